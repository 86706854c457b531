//! The fixed table of exponentiation entry points and uniform dispatch.

use crate::error::Error;
use crate::modexp::{self, MontyCtx};
use num_bigint::BigInt;

/// Plain calling convention: base, exponent, modulus.
pub type PlainFn = fn(&BigInt, &BigInt, &BigInt) -> Result<BigInt, Error>;

/// Montgomery calling convention: additionally takes an optional
/// precomputed modulus context, which every entry must tolerate as `None`.
pub type MontyFn = fn(&BigInt, &BigInt, &BigInt, Option<&MontyCtx>) -> Result<BigInt, Error>;

/// Calling convention tag. The callable lives in the variant payload, so a
/// mismatched invocation cannot be expressed.
#[derive(Clone, Copy, Debug)]
pub enum Kind {
    /// Direct invocation on the raw operands.
    Plain(PlainFn),
    /// Invocation with an optional Montgomery context.
    Monty(MontyFn),
}

/// A named candidate routine.
#[derive(Clone, Copy, Debug)]
pub struct AlgorithmEntry {
    /// Entry-point name used in diagnostics.
    pub name: &'static str,
    /// Calling convention and callable.
    pub kind: Kind,
}

/// The fixed, ordered registry of candidate routines.
///
/// The two `mod_exp2_mont_*` entries exercise the two-term algorithm with
/// one exponent pair fixed to the neutral `(1, 1)`, validating that the
/// two-term path agrees with direct single-term computation from either
/// side.
pub const REGISTRY: &[AlgorithmEntry] = &[
    AlgorithmEntry {
        name: "mod_exp",
        kind: Kind::Plain(modexp::mod_exp),
    },
    AlgorithmEntry {
        name: "mod_exp_ct",
        kind: Kind::Plain(modexp::mod_exp_ct),
    },
    AlgorithmEntry {
        name: "mod_exp_nonct",
        kind: Kind::Plain(modexp::mod_exp_nonct),
    },
    AlgorithmEntry {
        name: "mod_exp_win",
        kind: Kind::Plain(modexp::mod_exp_win),
    },
    AlgorithmEntry {
        name: "mod_exp_simple",
        kind: Kind::Plain(modexp::mod_exp_simple),
    },
    AlgorithmEntry {
        name: "mod_exp_mont",
        kind: Kind::Monty(modexp::mod_exp_mont),
    },
    AlgorithmEntry {
        name: "mod_exp_mont_ct",
        kind: Kind::Monty(modexp::mod_exp_mont_ct),
    },
    AlgorithmEntry {
        name: "mod_exp_mont_consttime",
        kind: Kind::Monty(modexp::mod_exp_mont_consttime),
    },
    AlgorithmEntry {
        name: "mod_exp_mont_vartime",
        kind: Kind::Monty(modexp::mod_exp_mont_vartime),
    },
    AlgorithmEntry {
        name: "mod_exp2_mont_first",
        kind: Kind::Monty(modexp::mod_exp2_mont_first),
    },
    AlgorithmEntry {
        name: "mod_exp2_mont_second",
        kind: Kind::Monty(modexp::mod_exp2_mont_second),
    },
];

/// Invoke an entry on a vector, passing the context only to
/// Montgomery-kind entries.
pub fn invoke(
    entry: &AlgorithmEntry,
    a: &BigInt,
    p: &BigInt,
    m: &BigInt,
    ctx: Option<&MontyCtx>,
) -> Result<BigInt, Error> {
    match entry.kind {
        Kind::Plain(f) => f(a, p, m),
        Kind::Monty(f) => f(a, p, m, ctx),
    }
}
