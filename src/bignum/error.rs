//! Error type for the multi-precision integer engine.
//!
//! A plain enum with a hand-written `Display`/`Error` implementation,
//! no derive-macro crate, matching how this crate's other error types
//! were written before the modules around them were trimmed.

use std::fmt;

/// Errors that can occur during MPI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpiError {
    /// A parameter was out of its valid range (e.g. an even modulus
    /// passed to `exp_mod`, a negative exponent, a radix outside 2..16).
    BadInput,

    /// A limb buffer could not be grown (requested capacity exceeds
    /// `config::MAX_LIMBS`).
    AllocationFailed,

    /// An output buffer was too small to hold the encoded value. Carries
    /// the minimum length that would have succeeded.
    BufferTooSmall {
        /// The number of bytes the caller must provide.
        needed: usize,
    },

    /// A string read encountered a character outside the given radix.
    InvalidCharacter,

    /// An unsigned subtraction would have gone negative, or a modulus
    /// used where a positive value is required was not positive.
    NegativeValue,

    /// Division or modulo by zero.
    DivisionByZero,

    /// A probabilistic or structural test rejected the input: a
    /// Miller-Rabin witness found, a non-coprime modular inverse, an RNG
    /// failure surfaced from the injected generator.
    NotAcceptable,
}

impl fmt::Display for MpiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MpiError::BadInput => write!(f, "invalid MPI parameter"),
            MpiError::AllocationFailed => write!(f, "MPI limb allocation failed"),
            MpiError::BufferTooSmall { needed } => {
                write!(f, "buffer too small, need at least {needed} bytes")
            }
            MpiError::InvalidCharacter => write!(f, "invalid character in MPI string"),
            MpiError::NegativeValue => write!(f, "operation would produce a negative value"),
            MpiError::DivisionByZero => write!(f, "division by zero"),
            MpiError::NotAcceptable => write!(f, "value rejected (not prime or not invertible)"),
        }
    }
}

impl std::error::Error for MpiError {}

/// Convenience alias used throughout `bignum`.
pub type MpiResult<T> = Result<T, MpiError>;
