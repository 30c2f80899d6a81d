//! Conversions between raw token amounts and their human readable decimal
//! representation.

use {
    crate::conversions::u256_to_scaled_big_decimal,
    alloy::primitives::{
        U256,
        utils::{ParseUnits, parse_units},
    },
    anyhow::{Context, Result, bail},
    bigdecimal::RoundingMode,
};

/// Parses a decimal amount such as `"1"` or `"0.5"` into raw token units for a
/// token with `decimals` decimals.
pub fn parse_token_amount(amount: &str, decimals: u8) -> Result<U256> {
    match parse_units(amount.trim(), decimals)
        .with_context(|| format!("invalid token amount {amount:?}"))?
    {
        ParseUnits::U256(value) => Ok(value),
        ParseUnits::I256(_) => bail!("token amount {amount:?} is negative"),
    }
}

/// Renders a raw token amount with exactly `precision` fraction digits. Excess
/// digits are truncated so a balance is never shown larger than it is.
pub fn format_token_amount(raw: U256, decimals: u8, precision: u8) -> String {
    u256_to_scaled_big_decimal(&raw, decimals)
        .with_scale_round(precision.into(), RoundingMode::Down)
        .to_plain_string()
}

/// Renders a raw token amount without trailing zeros, e.g. `1_000000` with 6
/// decimals is `"1"`.
pub fn format_token_amount_exact(raw: U256, decimals: u8) -> String {
    if raw.is_zero() {
        return "0".to_string();
    }
    u256_to_scaled_big_decimal(&raw, decimals)
        .normalized()
        .to_plain_string()
}
