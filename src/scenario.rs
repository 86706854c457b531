//! The four scenario drivers.
//!
//! Each driver returns whether any mismatch was seen; environment faults
//! (vector generation or oracle failure, a candidate erroring on a valid
//! randomized vector) propagate as [`Error`] and terminate the run.

use crate::error::Error;
use crate::generate::{self, TopBit};
use crate::modexp;
use crate::registry::{self, REGISTRY};
use crate::report::{self, VectorDump};
use crate::shape::{TestQuintuple, TestTriple};
use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};
use rand_core::RngCore;

/// Iterations per shaping mode in the single-exponent scenario.
pub const MOD_EXP_ROUNDS: usize = 100;

/// Iterations per shaping mode in the two-term scenario.
pub const MOD_EXP2_ROUNDS: usize = 50;

/// Zero-degeneracy scenario: with the exponent fixed at zero, every entry
/// must return exactly zero for modulus one, whether the base is a large
/// random value or zero. The word-base variant must also hold for the
/// degenerate modulus zero.
///
/// An entry returning an error here is a recorded failure, not a fault.
pub fn zero_degeneracy(rng: &mut impl RngCore) -> bool {
    let mut failed = false;

    let p = BigInt::zero();
    let m = BigInt::one();

    for use_random in [true, false] {
        let a = if use_random {
            generate::rand_bits(rng, 1024, TopBit::Any, false)
        } else {
            BigInt::zero()
        };

        for entry in REGISTRY {
            match registry::invoke(entry, &a, &p, &m, None) {
                Err(err) => {
                    eprintln!("{} failed: {err}", entry.name);
                    failed = true;
                }
                Ok(got) => {
                    if !got.is_zero() {
                        report::report_zero_failure(entry.name, &a, &got);
                        failed = true;
                    }
                }
            }
        }
    }

    for m in [BigInt::one(), BigInt::zero()] {
        match modexp::mod_exp_mont_word(1, &p, &m, None) {
            Err(err) => {
                eprintln!("mod_exp_mont_word failed: {err}");
                failed = true;
            }
            Ok(got) => {
                if !got.is_zero() {
                    report::report_zero_failure("mod_exp_mont_word", &BigInt::one(), &got);
                    failed = true;
                }
            }
        }
    }

    failed
}

/// Single-exponent scenario: randomized triples in both shaping modes,
/// all 8 sign combinations, every registry entry against the oracle.
pub fn single_exponent(rng: &mut impl RngCore) -> Result<bool, Error> {
    single_exponent_rounds(rng, MOD_EXP_ROUNDS)
}

fn single_exponent_rounds(rng: &mut impl RngCore, rounds: usize) -> Result<bool, Error> {
    let mut failed = false;

    for reduce in [false, true] {
        for _ in 0..rounds {
            let mut v = TestTriple::generate(rng, reduce)?;

            for mask in 0..8 {
                v.apply_signs(mask);

                let want = modexp::mod_exp_simple(&v.a, &v.p, &v.m)?;

                for entry in REGISTRY {
                    let got = registry::invoke(entry, &v.a, &v.p, &v.m, None)?;
                    let vector = VectorDump {
                        a: &v.a,
                        p: &v.p,
                        second: None,
                        m: &v.m,
                    };
                    if let Some(mismatch) = report::compare(entry.name, vector, &want, &got) {
                        mismatch.report();
                        failed = true;
                    }
                }
            }
        }
    }

    Ok(failed)
}

/// Reference for the two-term scenario: two independent oracle calls
/// combined by modular multiplication.
fn mod_exp2_simple(v: &TestQuintuple) -> Result<BigInt, Error> {
    let m_mag = v.m.magnitude();
    if m_mag.is_zero() || m_mag.is_one() {
        return Ok(BigInt::zero());
    }

    let fact1 = modexp::mod_exp_simple(&v.a, &v.p, &v.m)?;
    let fact2 = modexp::mod_exp_simple(&v.b, &v.q, &v.m)?;
    let modulus = BigInt::from_biguint(Sign::Plus, m_mag.clone());
    Ok(fact1 * fact2 % modulus)
}

/// Two-term scenario: randomized quintuples in both shaping modes, all 32
/// sign combinations, the two-term entry point against the composed oracle.
pub fn two_term(rng: &mut impl RngCore) -> Result<bool, Error> {
    two_term_rounds(rng, MOD_EXP2_ROUNDS)
}

fn two_term_rounds(rng: &mut impl RngCore, rounds: usize) -> Result<bool, Error> {
    let mut failed = false;

    for reduce in [false, true] {
        for _ in 0..rounds {
            let mut v = TestQuintuple::generate(rng, reduce)?;

            for mask in 0..32 {
                v.apply_signs(mask);

                let want = mod_exp2_simple(&v)?;
                let got = modexp::mod_exp2_mont(
                    Some(&v.a),
                    Some(&v.p),
                    Some(&v.b),
                    Some(&v.q),
                    &v.m,
                    None,
                )?;

                let vector = VectorDump {
                    a: &v.a,
                    p: &v.p,
                    second: Some((&v.b, &v.q)),
                    m: &v.m,
                };
                if let Some(mismatch) = report::compare("mod_exp2_mont", vector, &want, &got) {
                    mismatch.report();
                    failed = true;
                }
            }
        }
    }

    Ok(failed)
}

/// Fixed regression: the two-term entry point invoked with every operand
/// absent except the (zero-valued) modulus must report an error — never
/// succeed and never crash. Guards the null-operand defect fixed upstream
/// (openssl/openssl#17648).
pub fn crash_regression() -> bool {
    let m = BigInt::zero();

    match modexp::mod_exp2_mont(None, None, None, None, &m, None) {
        Ok(_) => {
            eprintln!("mod_exp2_mont succeeded on absent operands");
            true
        }
        Err(_) => false,
    }
}
