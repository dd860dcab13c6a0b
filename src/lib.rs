//! Multi-precision integer arithmetic and supporting primitives
//!
//! This crate provides an arbitrary-precision signed integer engine
//! suitable for the modular arithmetic public-key cryptography needs:
//! RSA, Diffie-Hellman, and any other construction built on integers
//! wider than a machine word.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. Components
//! are explicit in their semantics and suitable for security-critical
//! code.
//!
//! # Module overview
//!
//! - `bignum`
//!   The multi-precision integer (`Mpi`) engine: signed arbitrary-
//!   precision arithmetic, Montgomery modular exponentiation, binary
//!   GCD and modular inverse, and Miller-Rabin primality testing and
//!   generation.
//!
//! - `rng`
//!   Cryptographically secure pseudorandom number generators built from
//!   internal primitives. `bignum` takes randomness through the
//!   `bignum::SecureRng` trait rather than reading entropy directly, so
//!   this module's `Csprng` is one possible source among others.
//!
//! - `os`
//!   Operating-system entropy access, used by `rng::Csprng::from_os`.
//!
//! # Design goals
//!
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Clear separation between cryptographic code and supporting utilities
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled foundation
//! for integer arithmetic in security-critical code.

mod os;

#[path = "bignum/mod.rs"]
pub mod mpi;
pub mod rng;
