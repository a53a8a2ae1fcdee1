use serde::{Deserialize, Serialize};

/// The two deployment fees, converted to the display unit and rounded to 6
/// decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeQuote {
    /// Deployment fee of the original bytecode.
    pub fee_before: String,
    /// Deployment fee of the replacement bytecode.
    pub fee_after: String,
}

/// Size and fee deltas between the two bytecode blobs.
///
/// Percentages carry two decimal places and a trailing `%`. A negative
/// percentage means the replacement is larger or more expensive. When a
/// denominator is zero the sentinel `"N/A"` is reported instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Relative size reduction.
    pub size_delta_pct: String,
    /// Relative fee reduction.
    pub fee_delta_pct: String,
    /// Byte size of the original bytecode.
    pub original_size_bytes: usize,
    /// Byte size of the replacement bytecode.
    pub new_size_bytes: usize,
}

/// The complete outcome of a deployment comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployComparison {
    /// Size and fee deltas.
    #[serde(flatten)]
    pub result: ComparisonResult,
    /// Rounded fee amounts.
    #[serde(flatten)]
    pub fees: FeeQuote,
}
