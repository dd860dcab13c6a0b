//! Compile-time configuration for the MPI engine.
//!
//! These values correspond to `POLARSSL_MPI_MAX_BITS`,
//! `POLARSSL_MPI_MAX_SIZE`, and `POLARSSL_MPI_WINDOW_SIZE` in the original
//! C implementation these routines are based on. Plain constants rather
//! than a runtime configuration struct, documented inline instead of
//! introducing a builder this engine has no use for.

/// Bits per limb. Fixed at 64 for this build; the carry/borrow and
/// multiply-accumulate routines assume a 128-bit widening type is
/// available for the double-limb intermediate.
pub const LIMB_BITS: u32 = 64;

/// Hard ceiling on the bit length of any `Mpi` value. `grow` refuses to
/// allocate past `MAX_LIMBS` regardless of how large a caller asks for.
///
/// 16384 bits comfortably covers RSA-8192 and Diffie-Hellman moduli in
/// common use while bounding worst-case allocation from untrusted input.
pub const MAX_BITS: usize = 16384;

/// `MAX_BITS` expressed in bytes.
pub const MAX_SIZE: usize = MAX_BITS / 8;

/// `MAX_BITS` expressed in limbs; the ceiling `grow` and `shrink` enforce.
pub const MAX_LIMBS: usize = MAX_BITS / (LIMB_BITS as usize);

/// Upper bound on the sliding-window size used by `exp_mod`. The window
/// size chosen at runtime (exponent bit-length thresholds 671/239/79/23
/// map to sizes 6/5/4/3/1) is capped by this constant.
pub const WINDOW_MAX: usize = 6;
