//! Test-vector types and the reduce/non-reduce input shaper.

use crate::bigint;
use crate::error::Error;
use crate::generate::{self, AVG_BITS, DEVIATE};
use num_bigint::{BigInt, Sign};
use rand_core::RngCore;

/// Single-exponent test vector: base, exponent, modulus.
///
/// The modulus is always generated odd, so every vector is valid for the
/// Montgomery-context entry points.
#[derive(Clone, Debug)]
pub struct TestTriple {
    /// Base.
    pub a: BigInt,
    /// Exponent. Never reduced or otherwise adjusted.
    pub p: BigInt,
    /// Modulus, odd by construction.
    pub m: BigInt,
}

/// Two-term test vector: two base/exponent pairs sharing one odd modulus.
#[derive(Clone, Debug)]
pub struct TestQuintuple {
    /// First base.
    pub a: BigInt,
    /// First exponent.
    pub p: BigInt,
    /// Second base.
    pub b: BigInt,
    /// Second exponent.
    pub q: BigInt,
    /// Modulus, odd by construction.
    pub m: BigInt,
}

/// Shape the bases of a freshly generated vector.
///
/// With `reduce` the bases are replaced by their canonical residue, giving
/// the common already-reduced case. Without it, `m * k` for a random
/// `k` in `[2, 17]` is added to each base, forcing the algorithms under
/// test through their internal reduction paths. The scratch multiple is a
/// scoped local, released on every exit path.
fn shape_bases(rng: &mut impl RngCore, reduce: bool, a: &mut BigInt, b: Option<&mut BigInt>, m: &BigInt) {
    let m_mag = m.magnitude();

    if reduce {
        *a = BigInt::from_biguint(Sign::Plus, bigint::residue(a, m_mag));
        if let Some(b) = b {
            *b = BigInt::from_biguint(Sign::Plus, bigint::residue(b, m_mag));
        }
        return;
    }

    let multiple = rng.next_u32() % 16 + 2;
    let scratch = BigInt::from_biguint(Sign::Plus, m_mag * multiple);
    *a += &scratch;
    if let Some(b) = b {
        *b += &scratch;
    }
}

impl TestTriple {
    /// Generate a fresh triple, reduced or unreduced.
    pub fn generate(rng: &mut impl RngCore, reduce: bool) -> Result<Self, Error> {
        let mut a = generate::generate(rng, AVG_BITS, DEVIATE, false)?;
        let p = generate::generate(rng, AVG_BITS, DEVIATE, false)?;
        let m = generate::generate(rng, AVG_BITS, DEVIATE, true)?;
        shape_bases(rng, reduce, &mut a, None, &m);
        Ok(Self { a, p, m })
    }

    /// Apply a 3-bit sign mask: bit 0 → `a`, bit 1 → `p`, bit 2 → `m`.
    pub fn apply_signs(&mut self, mask: u32) {
        bigint::set_negative(&mut self.a, mask & 1 != 0);
        bigint::set_negative(&mut self.p, mask >> 1 & 1 != 0);
        bigint::set_negative(&mut self.m, mask >> 2 & 1 != 0);
    }
}

impl TestQuintuple {
    /// Generate a fresh quintuple, reduced or unreduced.
    pub fn generate(rng: &mut impl RngCore, reduce: bool) -> Result<Self, Error> {
        let mut a = generate::generate(rng, AVG_BITS, DEVIATE, false)?;
        let p = generate::generate(rng, AVG_BITS, DEVIATE, false)?;
        let mut b = generate::generate(rng, AVG_BITS, DEVIATE, false)?;
        let q = generate::generate(rng, AVG_BITS, DEVIATE, false)?;
        let m = generate::generate(rng, AVG_BITS, DEVIATE, true)?;
        shape_bases(rng, reduce, &mut a, Some(&mut b), &m);
        Ok(Self { a, p, b, q, m })
    }

    /// Apply a 5-bit sign mask: bits 0..4 → `a`, `p`, `b`, `q`, `m`.
    pub fn apply_signs(&mut self, mask: u32) {
        bigint::set_negative(&mut self.a, mask & 1 != 0);
        bigint::set_negative(&mut self.p, mask >> 1 & 1 != 0);
        bigint::set_negative(&mut self.b, mask >> 2 & 1 != 0);
        bigint::set_negative(&mut self.q, mask >> 3 & 1 != 0);
        bigint::set_negative(&mut self.m, mask >> 4 & 1 != 0);
    }
}
