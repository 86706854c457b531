//! Harness error type.
//!
//! Errors of this type are environment/library faults: they indicate the
//! harness or a consumed backend is broken, not that an algorithm under test
//! disagrees with the oracle. Correctness mismatches are reported through
//! [`crate::report`] instead and never surface as `Error`.

use core::fmt;
use crypto_bigint::DecodeError;

/// Fault raised by the harness or a consumed backend.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The operand generator was called with an invalid bit-length band:
    /// `0 < deviate < avg_bits` is required.
    BitLengthBand {
        /// Requested average bit length.
        avg_bits: usize,
        /// Requested deviation.
        deviate: usize,
    },

    /// A two-term exponentiation operand was absent.
    MissingOperand,

    /// A Montgomery-only entry point was called with an even modulus.
    EvenModulus,

    /// A Montgomery context was requested for a zero modulus.
    ZeroModulus,

    /// A precomputed Montgomery context does not match the call's modulus.
    ContextMismatch,

    /// Conversion into the Montgomery backend's representation failed.
    Decode(DecodeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BitLengthBand { avg_bits, deviate } => write!(
                f,
                "invalid bit-length band: avg_bits={avg_bits}, deviate={deviate}"
            ),
            Error::MissingOperand => write!(f, "absent operand in two-term exponentiation"),
            Error::EvenModulus => write!(f, "Montgomery entry point requires an odd modulus"),
            Error::ZeroModulus => write!(f, "Montgomery context requires a nonzero modulus"),
            Error::ContextMismatch => {
                write!(f, "precomputed Montgomery context does not match modulus")
            }
            Error::Decode(err) => write!(f, "operand conversion failed: {err}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
    }
}
