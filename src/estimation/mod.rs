//! Deployment estimation and fee comparison.
//!
//! - `comparator`: fetches a gas price and two deployment gas estimates from
//!   the provider and assembles a [`DeployComparison`](crate::types::DeployComparison)
//! - `fees`: gas-to-fee arithmetic, display-unit rounding and percentage deltas

mod comparator;
pub use comparator::FeeComparator;

pub mod fees;
