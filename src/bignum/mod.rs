//! Multi-precision integer arithmetic.
//!
//! This module is the crate's arbitrary-precision integer engine: a
//! signed, heap-backed limb representation (`Mpi`) plus the operations
//! built on it — comparison, shifts, signed addition and subtraction,
//! schoolbook multiplication, Knuth-D division, Montgomery
//! exponentiation, binary GCD and modular inverse, and probabilistic
//! primality testing and generation. It underlies RSA, Diffie-Hellman,
//! and any other construction that needs integers wider than a machine
//! word.
//!
//! Submodules are organized by concern rather than bundled into one file:
//!
//! - [`core`] — the `Mpi` type itself and its basic operations.
//! - [`cmp`] — ordering.
//! - [`shift`] — bitwise shifts.
//! - [`add`] — signed addition/subtraction.
//! - [`mul`] — multiplication.
//! - [`div`] — division, remainder, modulo.
//! - [`montgomery`] / [`expmod`] — modular exponentiation.
//! - [`gcd`] — greatest common divisor and modular inverse.
//! - [`rng`] — randomness injection.
//! - [`prime`] — primality testing and generation.
//! - [`serialize`] — binary and ASCII encoding.

mod add;
mod cmp;
pub mod config;
mod core;
mod div;
pub mod error;
mod expmod;
mod gcd;
mod limb;
mod montgomery;
mod mul;
mod prime;
mod rng;
mod serialize;
mod shift;

pub use add::{add_abs, add_int, add_mpi, sub_abs, sub_int, sub_mpi};
pub use cmp::{cmp_abs, cmp_int, cmp_mpi};
pub use core::Mpi;
pub use div::{div_int, div_mpi, mod_int, mod_mpi};
pub use error::{MpiError, MpiResult};
pub use expmod::{exp_mod, MontgomeryCache};
pub use gcd::{gcd, inv_mod};
pub use limb::{DoubleLimb, Limb};
pub use mul::{mul_int, mul_mpi};
pub use prime::{gen_prime, is_prime};
pub use rng::{fill_random, SecureRng};
pub use serialize::{read_binary, read_string, write_binary, write_string};
pub use shift::{shift_left, shift_right};
