use num_bigint::BigUint;

/// Conversion seam between parsed CSV value fields and whatever
/// arbitrary-precision representation the protocol engine operates on.
///
/// [`read_client_dataset`](crate::codec::read_client_dataset) only ever calls
/// `bignum_from_decimal`, so a protocol engine's own context type can plug in
/// here without this crate knowing its modulus or encoding.
pub trait BigNumContext {
    type BigNum;

    /// Converts a base-10 rendering into the engine's representation.
    /// Returns `None` unless `digits` is a valid non-negative base-10
    /// integer.
    fn bignum_from_decimal(&self, digits: &str) -> Option<Self::BigNum>;
}

/// Ready-made context producing [`num_bigint::BigUint`] values, for callers
/// that do not bring a protocol engine of their own.
#[derive(Debug, Default, Clone, Copy)]
pub struct BigUintContext;

impl BigNumContext for BigUintContext {
    type BigNum = BigUint;

    fn bignum_from_decimal(&self, digits: &str) -> Option<BigUint> {
        // parse_bytes tolerates a leading '+'; the format does not.
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        BigUint::parse_bytes(digits.as_bytes(), 10)
    }
}
