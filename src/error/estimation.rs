use super::{internal_rpc, invalid_params};
use alloy::transports::{RpcError, TransportErrorKind};
use std::fmt;
use thiserror::Error;

/// Identifies which of the two bytecode blobs an estimation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blob {
    /// The bytecode as currently deployed.
    Original,
    /// The bytecode proposed as a replacement.
    Replacement,
}

impl fmt::Display for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => f.write_str("original"),
            Self::Replacement => f.write_str("replacement"),
        }
    }
}

/// Errors related to deployment estimation.
#[derive(Debug, Error)]
pub enum EstimationError {
    /// A bytecode blob is not valid hex and cannot be simulated.
    #[error("invalid {blob} bytecode: {reason}")]
    InvalidBytecode {
        /// The blob that failed to decode.
        blob: Blob,
        /// Why decoding was rejected.
        reason: String,
    },
    /// The provider rejected or could not simulate a deployment.
    #[error("deployment estimate failed for {blob} bytecode")]
    Estimate {
        /// The blob whose estimate failed.
        blob: Blob,
        /// The underlying provider error.
        #[source]
        source: RpcError<TransportErrorKind>,
    },
    /// The provider could not supply a gas price and no fallback is configured.
    #[error("gas price unavailable")]
    GasPrice(#[source] RpcError<TransportErrorKind>),
}

impl From<EstimationError> for jsonrpsee::types::error::ErrorObject<'static> {
    fn from(err: EstimationError) -> Self {
        match err {
            EstimationError::InvalidBytecode { .. } | EstimationError::Estimate { .. } => {
                invalid_params(err.to_string())
            }
            EstimationError::GasPrice(_) => internal_rpc(err.to_string()),
        }
    }
}
