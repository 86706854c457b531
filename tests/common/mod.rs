//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use num_bigint::{BigInt, BigUint, Sign};

/// Build a signed operand from big-endian bytes.
pub fn to_bigint(bytes: &[u8], negative: bool) -> BigInt {
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    BigInt::from_biguint(sign, BigUint::from_bytes_be(bytes))
}

/// The positive modulus the harness's result convention reduces into.
pub fn positive_modulus(m: &BigInt) -> BigInt {
    BigInt::from_biguint(Sign::Plus, m.magnitude().clone())
}
