use crate::error::SnapError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// The inner request of a `wallet_invokeSnap` call: a method name and a
/// method-specific parameter object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapRequest {
    /// The snap method to invoke.
    pub method: String,
    /// The method parameters.
    #[serde(default)]
    pub params: serde_json::Value,
}

impl SnapRequest {
    /// A request with no parameters.
    pub fn bare(method: impl Into<String>) -> Self {
        Self { method: method.into(), params: serde_json::Value::Null }
    }

    /// A request carrying `params`.
    pub fn with_params(
        method: impl Into<String>,
        params: &impl Serialize,
    ) -> serde_json::Result<Self> {
        Ok(Self { method: method.into(), params: serde_json::to_value(params)? })
    }

    /// Deserializes the parameters into the shape `method` expects.
    pub fn parse_params<T: DeserializeOwned>(&self, method: &'static str) -> Result<T, SnapError> {
        serde_json::from_value(self.params.clone())
            .map_err(|err| SnapError::InvalidParams { method, reason: err.to_string() })
    }
}

/// Parameters of the `zkConfirm` method: a pending payroll transfer to
/// summarize. Purely presentational.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollParams {
    /// The source network.
    pub from: String,
    /// The destination network.
    pub to: String,
    /// The token the transfer is denominated in.
    pub token: String,
    /// The platform fee, in `token`.
    pub fee: String,
    /// The number of payroll items covered by the transfer.
    pub items: u64,
    /// The total amount to pay, in `token`.
    pub all_amount: String,
    /// The transfer amount, in `token`.
    pub amount: String,
    /// The token reward note. Defaults to `"Experimental"` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<String>,
}
