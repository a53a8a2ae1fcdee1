use crate::error::{Blob, EstimationError};
use alloy::{
    hex,
    primitives::Bytes,
};
use serde::{Deserialize, Serialize};

/// The `check_bytecode` request payload: the bytecode currently deployed and
/// the bytecode proposed to replace it, plus optional display metadata.
///
/// Both blobs are hex strings with an optional `0x` prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BytecodePayload {
    /// The original deployment bytecode.
    pub bytecode: String,
    /// The replacement deployment bytecode.
    pub new_bytecode: String,
    /// Contract name, for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contract symbol, for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl BytecodePayload {
    /// Returns the raw hex string for `blob`.
    fn raw(&self, blob: Blob) -> &str {
        match blob {
            Blob::Original => &self.bytecode,
            Blob::Replacement => &self.new_bytecode,
        }
    }

    /// Decodes `blob` into contract-creation calldata.
    ///
    /// Rejects empty or malformed hex before any provider call is made, so the
    /// failure is attributed to the right blob instead of surfacing as an
    /// opaque simulation error.
    pub fn decode(&self, blob: Blob) -> Result<Bytes, EstimationError> {
        let raw = self.raw(blob);
        let stripped = raw.strip_prefix("0x").unwrap_or(raw);
        if stripped.is_empty() {
            return Err(EstimationError::InvalidBytecode {
                blob,
                reason: "empty bytecode".to_string(),
            });
        }
        hex::decode(stripped)
            .map(Bytes::from)
            .map_err(|err| EstimationError::InvalidBytecode { blob, reason: err.to_string() })
    }

    /// Byte length of `blob`. A `0x` prefix does not count towards the size.
    pub fn byte_len(&self, blob: Blob) -> usize {
        let raw = self.raw(blob);
        raw.strip_prefix("0x").unwrap_or(raw).len() / 2
    }
}
