use crate::{
    config::SnapConfig,
    error::SnapError,
    estimation::FeeComparator,
    types::{
        copyable, divider, heading, panel, text, BytecodePayload, DeployComparison, DialogRequest,
        PayrollParams, SnapRequest,
    },
};
use alloy::providers::Provider;
use std::sync::Arc;
use tracing::{info, instrument};

/// The snap service.
#[derive(Debug, Clone)]
pub struct Snap<P> {
    inner: Arc<SnapInner<P>>,
}

#[derive(Debug)]
struct SnapInner<P> {
    comparator: FeeComparator<P>,
    /// Display symbol of the native currency fees are quoted in.
    symbol: String,
}

impl<P> Snap<P> {
    /// Creates a new snap over `provider`, configured by `config`.
    pub fn new(provider: P, config: &SnapConfig) -> Self {
        Self {
            inner: Arc::new(SnapInner {
                comparator: FeeComparator::new(provider)
                    .with_fallback_gas_price(config.fallback_gas_price)
                    .with_decimals(config.currency.decimals),
                symbol: config.currency.symbol.clone(),
            }),
        }
    }
}

impl<P> Snap<P>
where
    P: Provider,
{
    /// Dispatches a request to the matching snap method.
    ///
    /// All state is request-scoped; nothing survives past the returned dialog.
    #[instrument(skip(self, request), fields(method = %request.method))]
    pub async fn handle(&self, request: SnapRequest) -> Result<DialogRequest, SnapError> {
        match request.method.as_str() {
            "hello" => Ok(hello_dialog()),
            "check_bytecode" => {
                let payload: BytecodePayload = request.parse_params("check_bytecode")?;
                let comparison = self.inner.comparator.compare_deployment(&payload).await?;
                info!(
                    size = %comparison.result.size_delta_pct,
                    fee = %comparison.result.fee_delta_pct,
                    "Compared deployment bytecode"
                );
                Ok(self.check_bytecode_dialog(&payload, &comparison))
            }
            "zkConfirm" => {
                let params: PayrollParams = request.parse_params("zkConfirm")?;
                Ok(payroll_dialog(&params))
            }
            method => Err(SnapError::MethodNotFound(method.to_string())),
        }
    }

    /// The savings summary shown after a `check_bytecode` comparison.
    fn check_bytecode_dialog(
        &self,
        payload: &BytecodePayload,
        comparison: &DeployComparison,
    ) -> DialogRequest {
        let symbol = &self.inner.symbol;
        let name = payload.name.as_deref().unwrap_or("unknown");
        let contract_symbol = payload.symbol.as_deref().unwrap_or("-");

        DialogRequest::confirmation(panel(vec![
            heading("EthZip"),
            text(format!("Contract: **{name} ({contract_symbol})**")),
            divider(),
            text(format!("Original size: **{} bytes**", comparison.result.original_size_bytes)),
            text(format!("Original deploy fee: **{} {symbol}**", comparison.fees.fee_before)),
            divider(),
            text(format!("New size: **{} bytes**", comparison.result.new_size_bytes)),
            text(format!("Size reduction: **{}**", comparison.result.size_delta_pct)),
            text(format!("New deploy fee: **{} {symbol}**", comparison.fees.fee_after)),
            text(format!("Fee reduction: **{}**", comparison.result.fee_delta_pct)),
            divider(),
            copyable(payload.new_bytecode.clone()),
        ]))
    }
}

/// The static informational dialog behind `hello`.
fn hello_dialog() -> DialogRequest {
    DialogRequest::confirmation(panel(vec![
        heading("EthZip"),
        text("Hello from **EthZip**!"),
        text("Submit original and optimized bytecode to compare estimated deployment fees."),
    ]))
}

/// The payroll summary behind `zkConfirm`.
fn payroll_dialog(params: &PayrollParams) -> DialogRequest {
    let PayrollParams { from, to, token, fee, items, all_amount, amount, reward } = params;
    let reward = reward.as_deref().unwrap_or("Experimental");

    DialogRequest::confirmation(panel(vec![
        heading("ZkPayroll"),
        divider(),
        text(format!("Network: **{from}-->{to}**")),
        text(format!("Amount: **{amount} {token}**")),
        text(format!("Platform Fee: **{fee} {token}**")),
        text(format!("Items: **{items}**")),
        text(format!("XLD token reward: **{reward}**")),
        divider(),
        text(format!("TotalAmount to Pay: **{all_amount} {token}**")),
    ]))
}
