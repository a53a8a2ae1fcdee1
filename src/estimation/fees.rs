//! Fee arithmetic and formatting helpers.
//!
//! Raw amounts stay in the chain's smallest subunit at full precision; only
//! display values are rounded. Deltas are always computed from the raw values.

use crate::constants::{FEE_DISPLAY_DECIMALS, PCT_UNAVAILABLE};
use alloy::primitives::U256;

/// Deployment fee in the chain's smallest subunit.
pub fn deploy_fee(gas_price: u128, gas: u64) -> U256 {
    U256::from(gas_price) * U256::from(gas)
}

/// Formats `amount` subunits (with `decimals` subunit decimals) as a display
/// amount rounded half-up to [`FEE_DISPLAY_DECIMALS`] places.
///
/// Rounding is idempotent: formatting an already-rounded amount yields the
/// same string.
pub fn format_display_units(amount: U256, decimals: u8) -> String {
    let display_decimals = FEE_DISPLAY_DECIMALS;
    let precision = U256::from(10u64).pow(U256::from(display_decimals));

    // Round to `display_decimals` fractional digits, expressed as an integer
    // count of 10^-display_decimals display units.
    let rounded = if u32::from(decimals) >= display_decimals {
        let scale = U256::from(10u64).pow(U256::from(u32::from(decimals) - display_decimals));
        (amount + scale / U256::from(2)) / scale
    } else {
        let scale = U256::from(10u64).pow(U256::from(display_decimals - u32::from(decimals)));
        amount * scale
    };

    let integer = rounded / precision;
    let frac = (rounded % precision).to::<u64>();
    format!("{integer}.{frac:0width$}", width = display_decimals as usize)
}

/// Relative delta `(before - after) / before * 100` with two decimal places
/// and a trailing `%`.
///
/// Negative output means growth (`after > before`). A zero `before` yields
/// [`PCT_UNAVAILABLE`] rather than a division by zero.
pub fn delta_pct(before: U256, after: U256) -> String {
    if before.is_zero() {
        return PCT_UNAVAILABLE.to_string();
    }

    let (sign, diff) =
        if after <= before { ("", before - after) } else { ("-", after - before) };

    // Basis points, truncated: two fractional digits of the percentage.
    let bps = diff * U256::from(10_000) / before;
    let integer = bps / U256::from(100);
    let frac = (bps % U256::from(100)).to::<u64>();
    format!("{sign}{integer}.{frac:02}%")
}
