//! Random operand generation with a controlled bit-length distribution.
//!
//! All randomness flows through an explicitly passed [`RngCore`] handle so
//! the drivers stay free of hidden global state and tests can seed
//! deterministically.

use crate::bigint::LIMB_BITS;
use crate::error::Error;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use rand_core::RngCore;

/// Average bit length for generated operands.
///
/// Four limbs, so generated values span several limb boundaries of the
/// consumed arithmetic and exercise its multi-limb code paths.
pub const AVG_BITS: usize = 4 * LIMB_BITS as usize;

/// Deviation of the bit-length band around [`AVG_BITS`].
pub const DEVIATE: usize = LIMB_BITS as usize;

/// Top-bit policy for [`rand_bits`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TopBit {
    /// Force the top bit, guaranteeing the exact requested bit length.
    Set,
    /// Leave the top bits random; the value may be shorter than requested.
    Any,
}

/// Fill a non-negative value with `bits` random bits.
///
/// `force_odd` sets the low bit, which guarantees a modulus valid for the
/// Montgomery-form entry points.
pub fn rand_bits(rng: &mut impl RngCore, bits: usize, top: TopBit, force_odd: bool) -> BigInt {
    if bits == 0 {
        return BigInt::zero();
    }

    let nbytes = bits.div_ceil(8);
    let mut bytes = vec![0u8; nbytes];
    rng.fill_bytes(&mut bytes);

    let excess = nbytes * 8 - bits;
    bytes[0] &= 0xff >> excess;
    if top == TopBit::Set {
        bytes[0] |= 1 << ((bits - 1) % 8);
    }
    if force_odd {
        bytes[nbytes - 1] |= 1;
    }

    BigInt::from_biguint(Sign::Plus, BigUint::from_bytes_be(&bytes))
}

/// Generate a random operand whose bit length is drawn uniformly from
/// `[avg_bits - deviate, avg_bits + deviate)`.
///
/// Requires `0 < deviate < avg_bits`; anything else is a caller error.
pub fn generate(
    rng: &mut impl RngCore,
    avg_bits: usize,
    deviate: usize,
    force_odd: bool,
) -> Result<BigInt, Error> {
    if avg_bits == 0 || deviate == 0 || deviate >= avg_bits {
        return Err(Error::BitLengthBand { avg_bits, deviate });
    }

    let bits = avg_bits - deviate + rng.next_u32() as usize % (2 * deviate);
    Ok(rand_bits(rng, bits, TopBit::Set, force_odd))
}
