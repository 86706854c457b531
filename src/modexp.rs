//! The exponentiation entry points under test.
//!
//! Every function here is a thin adapter over a consumed backend —
//! `num-bigint`'s unsigned and signed `modpow`, `num-modular`'s windowed
//! `powm`, and `crypto-bigint`'s Montgomery form — none of them implements
//! exponentiation arithmetic of its own. All entry points share one operand
//! convention, with the oracle's output as ground truth:
//!
//! - the result is the canonical residue in `[0, |m|)`;
//! - the signs of the exponent and the modulus are ignored;
//! - a negative base maps to its non-negative residue;
//! - `|m| == 0` and `|m| == 1` yield zero (`x^p mod 0 == 0` is an accepted
//!   library convention this harness pins rather than fixes).

use crate::bigint::{from_boxed, precision_for, residue, to_boxed};
use crate::error::Error;
use crypto_bigint::{
    Odd,
    modular::{BoxedMontyForm, BoxedMontyParams},
};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_modular::ModularPow;
use num_traits::{One, Zero};

/// Precomputed modulus-dependent context for the Montgomery entry points.
///
/// Passing `None` instead forces the callee to derive its own parameters.
#[derive(Clone, Debug)]
pub struct MontyCtx {
    params: BoxedMontyParams,
}

impl MontyCtx {
    /// Precompute Montgomery parameters for the magnitude of `m`.
    ///
    /// The modulus must be odd and nonzero.
    pub fn new(m: &BigInt) -> Result<Self, Error> {
        let m_mag = m.magnitude();
        if m_mag.is_zero() {
            return Err(Error::ZeroModulus);
        }
        let modulus = to_boxed(m_mag, precision_for(m_mag))?;
        let modulus = Option::from(Odd::new(modulus)).ok_or(Error::EvenModulus)?;
        Ok(Self {
            params: BoxedMontyParams::new(modulus),
        })
    }

    fn modulus_magnitude(&self) -> BigUint {
        from_boxed(self.params.modulus())
    }
}

/// Result convention shared by every entry point; see the module docs.
///
/// `f` receives the non-negative base residue, `|p|` and `|m|`, with
/// `|m| > 1` guaranteed.
fn with_convention(
    a: &BigInt,
    p: &BigInt,
    m: &BigInt,
    f: impl FnOnce(&BigUint, &BigUint, &BigUint) -> Result<BigUint, Error>,
) -> Result<BigInt, Error> {
    let m_mag = m.magnitude();
    if m_mag.is_zero() || m_mag.is_one() {
        return Ok(BigInt::zero());
    }
    let r = residue(a, m_mag);
    let out = f(&r, p.magnitude(), m_mag)?;
    Ok(BigInt::from_biguint(Sign::Plus, out))
}

/// Montgomery parameters for `m_mag`, from the caller's context when one is
/// supplied (verified against the modulus) or derived on the spot.
fn monty_params(
    m_mag: &BigUint,
    ctx: Option<&MontyCtx>,
    vartime: bool,
) -> Result<BoxedMontyParams, Error> {
    if let Some(ctx) = ctx {
        if ctx.modulus_magnitude() != *m_mag {
            return Err(Error::ContextMismatch);
        }
        return Ok(ctx.params.clone());
    }

    let modulus = to_boxed(m_mag, precision_for(m_mag))?;
    let modulus = Option::from(Odd::new(modulus)).ok_or(Error::EvenModulus)?;
    Ok(if vartime {
        BoxedMontyParams::new_vartime(modulus)
    } else {
        BoxedMontyParams::new(modulus)
    })
}

/// Montgomery core: `base^exp mod m` through [`BoxedMontyForm`].
///
/// `bound_to_bits` bounds the exponentiation to the exponent's actual bit
/// length instead of its full precision, trading the constant-time pattern
/// for speed.
fn powmod_monty(
    base: &BigUint,
    exp: &BigUint,
    params: &BoxedMontyParams,
    bound_to_bits: bool,
) -> Result<BigUint, Error> {
    if exp.is_zero() {
        // x^0 = 1; |m| > 1 here, so no further reduction is needed.
        return Ok(BigUint::one());
    }

    let base = to_boxed(base, params.bits_precision())?;
    let exp = to_boxed(exp, precision_for(exp))?;
    let form = BoxedMontyForm::new(base, params.clone());
    let out = if bound_to_bits {
        form.pow_bounded_exp(&exp, exp.bits())
    } else {
        form.pow(&exp)
    };
    Ok(from_boxed(&out.retrieve()))
}

/// General-purpose entry point: dispatches odd moduli to the Montgomery
/// core and even moduli to the binary `modpow` backend.
pub fn mod_exp(a: &BigInt, p: &BigInt, m: &BigInt) -> Result<BigInt, Error> {
    with_convention(a, p, m, |r, e, mm| {
        if mm.is_odd() {
            powmod_monty(r, e, &monty_params(mm, None, false)?, false)
        } else {
            Ok(r.modpow(e, mm))
        }
    })
}

/// Constant-time entry point. Requires an odd modulus.
pub fn mod_exp_ct(a: &BigInt, p: &BigInt, m: &BigInt) -> Result<BigInt, Error> {
    mod_exp_mont_consttime(a, p, m, None)
}

/// Variable-time entry point backed by `num-bigint`'s `modpow`.
pub fn mod_exp_nonct(a: &BigInt, p: &BigInt, m: &BigInt) -> Result<BigInt, Error> {
    with_convention(a, p, m, |r, e, mm| Ok(r.modpow(e, mm)))
}

/// Windowed entry point backed by `num-modular`'s `powm`.
pub fn mod_exp_win(a: &BigInt, p: &BigInt, m: &BigInt) -> Result<BigInt, Error> {
    with_convention(a, p, m, |r, e, mm| Ok(r.powm(e, mm)))
}

/// The trusted reference oracle: `num-bigint`'s signed `modpow`, taken on
/// the raw signed base so the backend performs its own sign handling.
pub fn mod_exp_simple(a: &BigInt, p: &BigInt, m: &BigInt) -> Result<BigInt, Error> {
    let m_mag = m.magnitude();
    if m_mag.is_zero() || m_mag.is_one() {
        return Ok(BigInt::zero());
    }
    let modulus = BigInt::from_biguint(Sign::Plus, m_mag.clone());
    let exponent = BigInt::from_biguint(Sign::Plus, p.magnitude().clone());
    Ok(a.modpow(&exponent, &modulus))
}

/// Montgomery entry point honoring an optional precomputed context.
pub fn mod_exp_mont(
    a: &BigInt,
    p: &BigInt,
    m: &BigInt,
    ctx: Option<&MontyCtx>,
) -> Result<BigInt, Error> {
    with_convention(a, p, m, |r, e, mm| {
        powmod_monty(r, e, &monty_params(mm, ctx, false)?, false)
    })
}

/// Constant-time Montgomery entry point.
pub fn mod_exp_mont_ct(
    a: &BigInt,
    p: &BigInt,
    m: &BigInt,
    ctx: Option<&MontyCtx>,
) -> Result<BigInt, Error> {
    mod_exp_mont_consttime(a, p, m, ctx)
}

/// Hardened constant-time Montgomery entry point: full-precision exponent
/// bound, constant-time parameter derivation.
pub fn mod_exp_mont_consttime(
    a: &BigInt,
    p: &BigInt,
    m: &BigInt,
    ctx: Option<&MontyCtx>,
) -> Result<BigInt, Error> {
    with_convention(a, p, m, |r, e, mm| {
        let params = monty_params(mm, ctx, false)?;
        if e.is_zero() {
            return Ok(BigUint::one());
        }
        let base = to_boxed(r, params.bits_precision())?;
        let exp = to_boxed(e, precision_for(e))?;
        let form = BoxedMontyForm::new(base, params);
        let out = form.pow_bounded_exp(&exp, exp.bits_precision());
        Ok(from_boxed(&out.retrieve()))
    })
}

/// Variable-time Montgomery entry point: vartime parameter derivation and
/// an exponent bound of the exponent's actual bit length.
pub fn mod_exp_mont_vartime(
    a: &BigInt,
    p: &BigInt,
    m: &BigInt,
    ctx: Option<&MontyCtx>,
) -> Result<BigInt, Error> {
    with_convention(a, p, m, |r, e, mm| {
        powmod_monty(r, e, &monty_params(mm, ctx, true)?, true)
    })
}

/// Two-term Montgomery exponentiation: `a^p * b^q mod m`.
///
/// Operands are optional, mirroring the consumed library's contract where
/// an absent operand must surface as an error rather than a crash; the
/// modulus is always required.
pub fn mod_exp2_mont(
    a: Option<&BigInt>,
    p: Option<&BigInt>,
    b: Option<&BigInt>,
    q: Option<&BigInt>,
    m: &BigInt,
    ctx: Option<&MontyCtx>,
) -> Result<BigInt, Error> {
    let (a, p, b, q) = match (a, p, b, q) {
        (Some(a), Some(p), Some(b), Some(q)) => (a, p, b, q),
        _ => return Err(Error::MissingOperand),
    };

    let m_mag = m.magnitude();
    if m_mag.is_zero() || m_mag.is_one() {
        return Ok(BigInt::zero());
    }

    let params = monty_params(m_mag, ctx, false)?;
    let precision = params.bits_precision();

    let ra = to_boxed(&residue(a, m_mag), precision)?;
    let rb = to_boxed(&residue(b, m_mag), precision)?;
    let ea = to_boxed(p.magnitude(), precision_for(p.magnitude()))?;
    let eb = to_boxed(q.magnitude(), precision_for(q.magnitude()))?;

    // Both factors stay in Montgomery form until after the combining
    // multiplication, so only one retrieval is performed.
    let fa = BoxedMontyForm::new(ra, params.clone()).pow(&ea);
    let fb = BoxedMontyForm::new(rb, params).pow(&eb);
    let out = &fa * &fb;

    Ok(BigInt::from_biguint(Sign::Plus, from_boxed(&out.retrieve())))
}

/// Degenerate two-term adapter: fixes the second pair to `(1, 1)`, so the
/// two-term path must reduce to the first single-term computation.
pub fn mod_exp2_mont_first(
    a: &BigInt,
    p: &BigInt,
    m: &BigInt,
    ctx: Option<&MontyCtx>,
) -> Result<BigInt, Error> {
    let one = BigInt::one();
    mod_exp2_mont(Some(a), Some(p), Some(&one), Some(&one), m, ctx)
}

/// Degenerate two-term adapter: fixes the first pair to `(1, 1)`.
pub fn mod_exp2_mont_second(
    a: &BigInt,
    p: &BigInt,
    m: &BigInt,
    ctx: Option<&MontyCtx>,
) -> Result<BigInt, Error> {
    let one = BigInt::one();
    mod_exp2_mont(Some(&one), Some(&one), Some(a), Some(p), m, ctx)
}

/// Word-base variant of the Montgomery entry point.
pub fn mod_exp_mont_word(
    a: u64,
    p: &BigInt,
    m: &BigInt,
    ctx: Option<&MontyCtx>,
) -> Result<BigInt, Error> {
    mod_exp_mont(&BigInt::from(a), p, m, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bn(n: i64) -> BigInt {
        BigInt::from(n)
    }

    type PlainEntry = fn(&BigInt, &BigInt, &BigInt) -> Result<BigInt, Error>;
    type MontyEntry = fn(&BigInt, &BigInt, &BigInt, Option<&MontyCtx>) -> Result<BigInt, Error>;

    const PLAIN: &[PlainEntry] = &[mod_exp, mod_exp_ct, mod_exp_nonct, mod_exp_win, mod_exp_simple];
    const MONTY: &[MontyEntry] = &[
        mod_exp_mont,
        mod_exp_mont_ct,
        mod_exp_mont_consttime,
        mod_exp_mont_vartime,
        mod_exp2_mont_first,
        mod_exp2_mont_second,
    ];

    fn all_agree(a: i64, p: i64, m: i64, want: i64) {
        let (a, p, m, want) = (bn(a), bn(p), bn(m), bn(want));
        for f in PLAIN {
            assert_eq!(f(&a, &p, &m).unwrap(), want);
        }
        for f in MONTY {
            assert_eq!(f(&a, &p, &m, None).unwrap(), want);
        }
    }

    #[test]
    fn known_answers() {
        all_agree(3, 4, 97, 81);
        all_agree(2, 96, 97, 1); // Fermat: 2^(p-1) mod p
        all_agree(0, 5, 97, 0);
        all_agree(97, 5, 97, 0); // base a multiple of the modulus
        all_agree(2, 3, 35, 8);
    }

    #[test]
    fn zero_exponent_yields_one() {
        all_agree(5, 0, 97, 1);
        all_agree(0, 0, 97, 1);
    }

    #[test]
    fn degenerate_moduli_yield_zero() {
        all_agree(5, 3, 0, 0);
        all_agree(5, 3, 1, 0);
        all_agree(5, 0, 1, 0);
        all_agree(0, 0, 0, 0);
    }

    #[test]
    fn negative_base_maps_to_residue() {
        // -2 ≡ 95 (mod 97); (-2)^3 ≡ 97 - 8 = 89.
        all_agree(-2, 3, 97, 89);
    }

    #[test]
    fn exponent_and_modulus_signs_are_ignored() {
        all_agree(2, -3, 97, 8);
        all_agree(2, 3, -97, 8);
        all_agree(-2, -3, -97, 89);
    }

    #[test]
    fn unreduced_base_agrees_with_reduced() {
        let m = bn(8911); // odd, composite
        let p = bn(1234);
        let a = bn(567);
        let inflated = &a + &m * bn(13);
        for f in PLAIN {
            assert_eq!(f(&a, &p, &m).unwrap(), f(&inflated, &p, &m).unwrap());
        }
        for f in MONTY {
            assert_eq!(f(&a, &p, &m, None).unwrap(), f(&inflated, &p, &m, None).unwrap());
        }
    }

    #[test]
    fn precomputed_context_matches_derived() {
        let (a, p, m) = (bn(1234), bn(567), bn(8911));
        let ctx = MontyCtx::new(&m).unwrap();
        let derived = mod_exp_mont(&a, &p, &m, None).unwrap();
        assert_eq!(mod_exp_mont(&a, &p, &m, Some(&ctx)).unwrap(), derived);
        assert_eq!(mod_exp_mont_vartime(&a, &p, &m, Some(&ctx)).unwrap(), derived);
    }

    #[test]
    fn mismatched_context_is_rejected() {
        let ctx = MontyCtx::new(&bn(97)).unwrap();
        assert_eq!(
            mod_exp_mont(&bn(2), &bn(3), &bn(35), Some(&ctx)),
            Err(Error::ContextMismatch)
        );
    }

    #[test]
    fn context_rejects_bad_moduli() {
        assert_eq!(MontyCtx::new(&bn(0)).unwrap_err(), Error::ZeroModulus);
        assert_eq!(MontyCtx::new(&bn(100)).unwrap_err(), Error::EvenModulus);
    }

    #[test]
    fn montgomery_rejects_even_modulus() {
        assert_eq!(
            mod_exp_mont(&bn(2), &bn(3), &bn(100), None),
            Err(Error::EvenModulus)
        );
    }

    #[test]
    fn two_term_matches_composition() {
        // 2^3 * 3^2 mod 35 = 72 mod 35 = 2
        let got = mod_exp2_mont(
            Some(&bn(2)),
            Some(&bn(3)),
            Some(&bn(3)),
            Some(&bn(2)),
            &bn(35),
            None,
        )
        .unwrap();
        assert_eq!(got, bn(2));
    }

    #[test]
    fn two_term_rejects_absent_operands() {
        let m = bn(0);
        assert_eq!(
            mod_exp2_mont(None, None, None, None, &m, None),
            Err(Error::MissingOperand)
        );
        let a = bn(2);
        assert_eq!(
            mod_exp2_mont(Some(&a), Some(&a), None, Some(&a), &m, None),
            Err(Error::MissingOperand)
        );
    }

    #[test]
    fn word_variant_zero_conventions() {
        let p = BigInt::zero();
        assert_eq!(mod_exp_mont_word(1, &p, &bn(1), None).unwrap(), bn(0));
        assert_eq!(mod_exp_mont_word(1, &p, &bn(0), None).unwrap(), bn(0));
        assert_eq!(mod_exp_mont_word(3, &bn(4), &bn(97), None).unwrap(), bn(81));
    }
}
