//! Snap error types.
use alloy::primitives::Bytes;
use core::fmt;
use jsonrpsee::core::RpcResult;
use thiserror::Error;

mod estimation;
pub use estimation::{Blob, EstimationError};

/// The overarching error type returned by `snap_invoke`.
#[derive(Debug, Error)]
pub enum SnapError {
    /// The requested method is not part of the snap's RPC surface.
    #[error("method not found: {0}")]
    MethodNotFound(String),
    /// The request parameters did not match the shape the method expects.
    #[error("invalid params for {method}: {reason}")]
    InvalidParams {
        /// The method the params were destined for.
        method: &'static str,
        /// Why deserialization was rejected.
        reason: String,
    },
    /// Errors related to deployment estimation.
    #[error(transparent)]
    Estimation(#[from] EstimationError),
    /// An internal error occurred.
    #[error(transparent)]
    InternalError(#[from] eyre::Error),
}

impl From<SnapError> for jsonrpsee::types::error::ErrorObject<'static> {
    fn from(err: SnapError) -> Self {
        match err {
            SnapError::MethodNotFound(_) => {
                rpc_err(jsonrpsee::types::error::METHOD_NOT_FOUND_CODE, err.to_string(), None)
            }
            SnapError::InvalidParams { .. } => invalid_params(err.to_string()),
            SnapError::Estimation(inner) => inner.into(),
            SnapError::InternalError(_) => internal_rpc(err.to_string()),
        }
    }
}

/// A helper trait to provide an RPC error code.
pub trait ToRpcResult<Ok, Err>: Sized {
    /// Converts result to [`RpcResult`] by converting error variant to
    /// [`jsonrpsee::types::error::ErrorObject`]
    fn to_rpc_result(self) -> RpcResult<Ok>
    where
        Err: fmt::Display;
}

macro_rules! impl_error_helpers {
    ($err:ty) => {
        impl<Ok> ToRpcResult<Ok, $err> for Result<Ok, $err> {
            fn to_rpc_result(self) -> RpcResult<Ok> {
                self.map_err(|err| err.into())
            }
        }

        impl From<$err> for String {
            fn from(err: $err) -> Self {
                err.to_string()
            }
        }
    };
}

impl_error_helpers!(SnapError);
impl_error_helpers!(EstimationError);

/// Constructs an invalid params JSON‑RPC error.
fn invalid_params(msg: impl Into<String>) -> jsonrpsee::types::error::ErrorObject<'static> {
    rpc_err(jsonrpsee::types::error::INVALID_PARAMS_CODE, msg, None)
}

/// Constructs an internal JSON‑RPC error.
fn internal_rpc(msg: impl Into<String>) -> jsonrpsee::types::error::ErrorObject<'static> {
    rpc_err(jsonrpsee::types::error::INTERNAL_ERROR_CODE, msg, None)
}

/// Constructs a JSON‑RPC error with `code`, `message` and optional `data`.
fn rpc_err(
    code: i32,
    msg: impl Into<String>,
    data: Option<Bytes>,
) -> jsonrpsee::types::error::ErrorObject<'static> {
    jsonrpsee::types::error::ErrorObject::owned(code, msg.into(), data)
}
