//! Adapter over the consumed big-integer capabilities.
//!
//! The harness never implements multi-precision arithmetic of its own. This
//! module provides the thin glue the rest of the crate needs: canonical sign
//! assignment, Euclidean residues, and conversions between `num-bigint`
//! values and the Montgomery backend's [`BoxedUint`] representation.

use crate::error::Error;
use crypto_bigint::BoxedUint;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::Zero;

/// Limb size of the Montgomery backend, in bits.
pub const LIMB_BITS: u32 = crypto_bigint::Limb::BITS;

/// Assign a sign to `x` in place.
///
/// Zero keeps its canonical non-negative sign regardless of `negative`:
/// `BigInt::from_biguint` normalizes a zero magnitude to `Sign::NoSign`, so
/// comparison and printing are unaffected.
pub fn set_negative(x: &mut BigInt, negative: bool) {
    let (_, magnitude) = std::mem::take(x).into_parts();
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    *x = BigInt::from_biguint(sign, magnitude);
}

/// Canonical residue of `a` modulo a nonzero magnitude, in `[0, m)`.
pub fn residue(a: &BigInt, m: &BigUint) -> BigUint {
    debug_assert!(!m.is_zero());
    let modulus = BigInt::from_biguint(Sign::Plus, m.clone());
    let (_, magnitude) = a.mod_floor(&modulus).into_parts();
    magnitude
}

/// Smallest whole-limb bit precision that holds `x` (at least one limb).
pub fn precision_for(x: &BigUint) -> u32 {
    let bits = (x.bits() as u32).max(1);
    bits.div_ceil(LIMB_BITS) * LIMB_BITS
}

/// Convert a `BigUint` into a [`BoxedUint`] of the given precision.
pub fn to_boxed(x: &BigUint, bits_precision: u32) -> Result<BoxedUint, Error> {
    Ok(BoxedUint::from_be_slice(&x.to_bytes_be(), bits_precision)?)
}

/// Convert a [`BoxedUint`] back into a `BigUint`.
pub fn from_boxed(x: &BoxedUint) -> BigUint {
    BigUint::from_bytes_be(&x.to_be_bytes())
}
