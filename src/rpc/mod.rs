//! RPC modules.

mod api;
pub use api::{SnapApiClient, SnapApiServer};

mod snap;
pub use snap::Snap;
