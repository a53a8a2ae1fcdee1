//! Snap types.

mod bytecode;
pub use bytecode::BytecodePayload;

mod comparison;
pub use comparison::{ComparisonResult, DeployComparison, FeeQuote};

mod dialog;
pub use dialog::{copyable, divider, heading, panel, text, Component, DialogRequest, DialogType};

mod request;
pub use request::{PayrollParams, SnapRequest};
