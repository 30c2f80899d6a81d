use {
    alloy::primitives::U256,
    bigdecimal::BigDecimal,
    num::{BigInt, BigUint, bigint::Sign},
};

pub fn u256_to_big_uint(input: &U256) -> BigUint {
    BigUint::from_bytes_be(&input.to_be_bytes::<32>())
}

pub fn u256_to_big_int(input: &U256) -> BigInt {
    BigInt::from_biguint(Sign::Plus, u256_to_big_uint(input))
}

/// Interprets `raw` as a fixed point number with `decimals` digits after the
/// decimal point, e.g. `1_500000` with 6 decimals is `1.5`.
pub fn u256_to_scaled_big_decimal(raw: &U256, decimals: u8) -> BigDecimal {
    BigDecimal::new(u256_to_big_int(raw), decimals.into())
}
