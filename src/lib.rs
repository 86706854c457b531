//! Differential correctness harness for modular exponentiation.
//!
//! # About
//! Given a fixed registry of independently implemented routines computing
//! `a^p mod m` — plus the two-term variant `a^p * b^q mod m` used by
//! CRT-accelerated decryption — this crate proves by randomized and
//! boundary testing that every routine agrees with a trusted reference,
//! across positive/negative operand sign combinations, reduced and
//! unreduced inputs, and the documented degenerate cases (zero base, zero
//! exponent, zero modulus).
//!
//! The arithmetic itself is consumed, never reimplemented: `num-bigint`
//! supplies the sign-magnitude integers and the reference oracle,
//! `crypto-bigint` the Montgomery-form backend with its precomputable
//! modulus context, and `num-modular` an independent windowed backend.
//!
//! The binary target runs the four scenario drivers and exits non-zero if
//! any entry point ever disagreed with the oracle.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

pub mod bigint;
pub mod error;
pub mod generate;
pub mod modexp;
pub mod registry;
pub mod report;
pub mod scenario;
pub mod shape;

pub use error::Error;
pub use modexp::MontyCtx;
pub use registry::{AlgorithmEntry, Kind, REGISTRY};
