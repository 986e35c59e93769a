//! Conversions between decimal native-currency amounts and their smallest unit.

use alloy_primitives::{
    U256,
    utils::{UnitsError, format_ether, parse_ether},
};

/// Decimals of the native currency.
pub const NATIVE_DECIMALS: u8 = 18;

/// Parses a decimal amount of the native currency, e.g. `"1.5"`, into its smallest unit.
pub fn parse_price(price: &str) -> Result<U256, UnitsError> {
    parse_ether(price.trim())
}

/// Formats an amount in the smallest unit as a decimal string without trailing zeros.
///
/// The output parses back to the same amount with [`parse_price`].
pub fn format_price(amount: U256) -> String {
    let formatted = format_ether(amount);
    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() { whole.to_string() } else { format!("{whole}.{fraction}") }
        }
        None => formatted,
    }
}
