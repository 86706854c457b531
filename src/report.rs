//! Comparison against the oracle and mismatch reporting.
//!
//! Equality is exact — sign and magnitude — and a mismatch is dumped to
//! stderr with every operand, then recorded; the run always continues so a
//! single pass surfaces every disagreement.

use num_bigint::BigInt;

/// Borrowed view of a test vector for diagnostics.
#[derive(Clone, Copy, Debug)]
pub struct VectorDump<'a> {
    /// Base.
    pub a: &'a BigInt,
    /// Exponent.
    pub p: &'a BigInt,
    /// Second base/exponent pair, for two-term vectors.
    pub second: Option<(&'a BigInt, &'a BigInt)>,
    /// Modulus.
    pub m: &'a BigInt,
}

/// A recorded disagreement between the oracle and one candidate.
///
/// Never mutated after creation; [`Mismatch::report`] only reads it.
#[derive(Clone, Copy, Debug)]
pub struct Mismatch<'a> {
    name: &'static str,
    vector: VectorDump<'a>,
    want: &'a BigInt,
    got: &'a BigInt,
}

fn bn_print(name: &str, value: &BigInt) {
    eprintln!("{name:>6}: {value:X}");
}

/// Compare a candidate result against the oracle's.
///
/// Returns `None` on an exact match, otherwise the recorded mismatch.
pub fn compare<'a>(
    name: &'static str,
    vector: VectorDump<'a>,
    want: &'a BigInt,
    got: &'a BigInt,
) -> Option<Mismatch<'a>> {
    if want == got {
        return None;
    }
    Some(Mismatch {
        name,
        vector,
        want,
        got,
    })
}

impl Mismatch<'_> {
    /// Dump the vector operands and both results to stderr.
    pub fn report(&self) {
        eprintln!("mod_exp_simple() and {}() disagree:", self.name);

        bn_print("want", self.want);
        bn_print("got", self.got);

        bn_print("a", self.vector.a);
        bn_print("p", self.vector.p);
        if let Some((b, q)) = self.vector.second {
            bn_print("b", b);
            bn_print("q", q);
        }
        bn_print("m", self.vector.m);

        eprintln!();
    }
}

/// Report a zero-degeneracy check that produced a nonzero value.
pub fn report_zero_failure(name: &str, a: &BigInt, got: &BigInt) {
    eprintln!("{name}() zero test failed:");
    bn_print("a", a);
    bn_print("got", got);
}
