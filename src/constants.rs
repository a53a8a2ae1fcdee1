//! Snap constants.

/// The snap id the requester connects to by default.
///
/// A `local:` origin points at a development build served from the local
/// machine rather than a published package.
pub const DEFAULT_SNAP_ORIGIN: &str = "local:http://localhost:8080";

/// The number of decimal places fee amounts are rounded to for display.
pub const FEE_DISPLAY_DECIMALS: u32 = 6;

/// The sentinel reported in place of a percentage whose denominator is zero.
pub const PCT_UNAVAILABLE: &str = "N/A";

/// The default maximum number of concurrent RPC connections.
pub const DEFAULT_RPC_MAX_CONNECTIONS: u32 = 500;
