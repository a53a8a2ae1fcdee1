use crate::{
    error::{Blob, EstimationError},
    estimation::fees::{delta_pct, deploy_fee, format_display_units},
    types::{BytecodePayload, ComparisonResult, DeployComparison, FeeQuote},
};
use alloy::{
    network::TransactionBuilder,
    primitives::{Bytes, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
};
use tokio::try_join;
use tracing::{debug, instrument, warn};

/// Compares the estimated deployment cost of two bytecode blobs.
///
/// The provider is injected at construction and shared by all comparisons;
/// there is no global provider handle.
#[derive(Debug, Clone)]
pub struct FeeComparator<P> {
    provider: P,
    fallback_gas_price: Option<u128>,
    decimals: u8,
}

impl<P> FeeComparator<P> {
    /// Creates a comparator over `provider`, pricing fees in an 18-decimal
    /// native currency.
    pub const fn new(provider: P) -> Self {
        Self { provider, fallback_gas_price: None, decimals: 18 }
    }

    /// Sets a gas price to fall back to when the provider does not support
    /// fee queries. Without a fallback, a failed gas price query is an error.
    pub const fn with_fallback_gas_price(mut self, price: Option<u128>) -> Self {
        self.fallback_gas_price = price;
        self
    }

    /// Sets the number of decimals of the chain's native currency.
    pub const fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }
}

impl<P> FeeComparator<P>
where
    P: Provider,
{
    /// Compares the estimated deployment cost and size of the two blobs in
    /// `payload`.
    ///
    /// The two gas estimates are issued concurrently and fail fast: if either
    /// one fails, the whole comparison fails with an error naming the blob,
    /// never a partial result.
    #[instrument(skip_all)]
    pub async fn compare_deployment(
        &self,
        payload: &BytecodePayload,
    ) -> Result<DeployComparison, EstimationError> {
        let original = payload.decode(Blob::Original)?;
        let replacement = payload.decode(Blob::Replacement)?;

        let gas_price = self.gas_price().await?;
        let (gas_before, gas_after) = try_join!(
            self.estimate_deploy(original, Blob::Original),
            self.estimate_deploy(replacement, Blob::Replacement),
        )?;

        debug!(gas_price, gas_before, gas_after, "Estimated deployment gas");

        let fee_before = deploy_fee(gas_price, gas_before);
        let fee_after = deploy_fee(gas_price, gas_after);
        let size_before = payload.byte_len(Blob::Original);
        let size_after = payload.byte_len(Blob::Replacement);

        Ok(DeployComparison {
            result: ComparisonResult {
                size_delta_pct: delta_pct(U256::from(size_before), U256::from(size_after)),
                fee_delta_pct: delta_pct(fee_before, fee_after),
                original_size_bytes: size_before,
                new_size_bytes: size_after,
            },
            fees: FeeQuote {
                fee_before: format_display_units(fee_before, self.decimals),
                fee_after: format_display_units(fee_after, self.decimals),
            },
        })
    }

    /// The current gas price in the chain's smallest subunit.
    async fn gas_price(&self) -> Result<u128, EstimationError> {
        match self.provider.get_gas_price().await {
            Ok(price) => Ok(price),
            Err(err) => match self.fallback_gas_price {
                Some(fallback) => {
                    warn!(%err, fallback, "Gas price query failed, using configured fallback");
                    Ok(fallback)
                }
                None => Err(EstimationError::GasPrice(err)),
            },
        }
    }

    /// Estimates deployment gas for `code` by simulating a contract-creation
    /// transaction with no constructor arguments.
    async fn estimate_deploy(&self, code: Bytes, blob: Blob) -> Result<u64, EstimationError> {
        let tx = TransactionRequest::default().with_deploy_code(code);
        self.provider
            .estimate_gas(tx)
            .await
            .map_err(|source| EstimationError::Estimate { blob, source })
    }
}
