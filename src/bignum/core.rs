//! MPI representation and basic operations.
//!
//! Grounded on `mpi_init`/`mpi_free`/`mpi_copy`/`mpi_swap`/`mpi_lset`/
//! `mpi_safe_cond_assign`/`mpi_safe_cond_swap`/`mpi_get_bit`/`mpi_set_bit`/
//! `mpi_lsb`/`mpi_msb`/`mpi_size` in
//! `examples/original_source/code/crypto/bignum.c`. The `Clone`/`PartialEq`/
//! `Eq`/`Display` impls follow plain hand-written value-type conventions,
//! not derive macros, matching how the rest of this crate's numeric types
//! are written.

use std::fmt;

use super::error::{MpiError, MpiResult};
use super::limb::{self, Limb};

/// A signed, arbitrary-precision integer.
///
/// `limbs` holds the magnitude in little-endian limb order; `sign` is
/// `+1` or `-1`. The zero value always normalizes to `sign == 1`. The
/// vector's length is the buffer's capacity, not its significance:
/// limbs at or beyond the highest nonzero index are kept zeroed, but
/// the buffer may be longer than the value's effective length.
#[derive(Clone, Debug)]
pub struct Mpi {
    pub(crate) sign: i8,
    pub(crate) limbs: Vec<Limb>,
}

impl Default for Mpi {
    fn default() -> Self {
        Self::new()
    }
}

impl Mpi {
    /// An MPI initialized empty: no allocation, positive sign.
    pub fn new() -> Self {
        Mpi {
            sign: 1,
            limbs: Vec::new(),
        }
    }

    /// The value zero.
    pub fn zero() -> Self {
        Self::new()
    }

    /// Builds an MPI from a signed 64-bit integer.
    pub fn from_i64(z: i64) -> Self {
        let mut m = Self::new();
        m.set_small(z);
        m
    }

    /// Builds an MPI from an unsigned 64-bit integer.
    pub fn from_u64(z: u64) -> Self {
        Mpi {
            sign: 1,
            limbs: vec![z],
        }
    }

    /// Index one past the highest nonzero limb, or 0 if the value is
    /// zero: the value's effective length, as opposed to the buffer's
    /// capacity.
    pub(crate) fn significant_len(&self) -> usize {
        let mut i = self.limbs.len();
        while i > 0 && self.limbs[i - 1] == 0 {
            i -= 1;
        }
        i
    }

    /// True if the magnitude is zero, irrespective of `sign`.
    pub fn is_zero(&self) -> bool {
        self.significant_len() == 0
    }

    /// True if `sign == -1` and the value is nonzero.
    pub fn is_negative(&self) -> bool {
        self.sign < 0 && !self.is_zero()
    }

    /// Re-establishes invariant I3: zero always carries `sign == 1`.
    pub(crate) fn normalize_sign(&mut self) {
        if self.is_zero() {
            self.sign = 1;
        }
    }

    /// Sets this MPI to a small signed integer (`mpi_lset`). Forces the
    /// limb buffer's existing capacity to all-zero before writing the
    /// single low limb, matching the original's "zero then write" order.
    pub fn set_small(&mut self, z: i64) {
        if self.limbs.is_empty() {
            self.limbs.push(0);
        }
        limb::wipe(&mut self.limbs);
        self.limbs[0] = z.unsigned_abs();
        self.sign = if z < 0 { -1 } else { 1 };
    }

    /// Copies the value of `other` into `self` (`mpi_copy`).
    pub fn copy_from(&mut self, other: &Mpi) -> MpiResult<()> {
        let n = other.significant_len();
        limb::grow(&mut self.limbs, n)?;
        limb::wipe(&mut self.limbs);
        self.limbs[..n].copy_from_slice(&other.limbs[..n]);
        self.sign = other.sign;
        self.normalize_sign();
        Ok(())
    }

    /// Exchanges the entire contents of `self` and `other` (`mpi_swap`).
    pub fn swap(&mut self, other: &mut Mpi) {
        std::mem::swap(self, other);
    }

    /// Conditionally assigns `self = other` without branching on `flag`
    /// (`mpi_safe_cond_assign`). The same limb-by-limb blend runs
    /// regardless of `flag`'s value, so the memory access pattern does
    /// not depend on the secret being conditioned on.
    pub fn safe_cond_assign(&mut self, other: &Mpi, flag: bool) -> MpiResult<()> {
        let flag_limb: Limb = flag as Limb;
        let keep_limb: Limb = 1 - flag_limb;
        let flag_sign: i8 = flag as i8;
        let keep_sign: i8 = 1 - flag_sign;

        limb::grow(&mut self.limbs, other.limbs.len())?;

        self.sign = self.sign * keep_sign + other.sign * flag_sign;

        let m = other.limbs.len();
        for i in 0..m {
            self.limbs[i] = self.limbs[i] * keep_limb + other.limbs[i] * flag_limb;
        }
        for l in self.limbs[m..].iter_mut() {
            *l *= keep_limb;
        }

        Ok(())
    }

    /// Conditionally swaps `self` and `other` without branching on `flag`
    /// (`mpi_safe_cond_swap`). Swapping the `Vec` pointers outright would
    /// change the memory-access pattern depending on `flag`, so every
    /// limb is blended explicitly instead.
    pub fn safe_cond_swap(&mut self, other: &mut Mpi, flag: bool) -> MpiResult<()> {
        if std::ptr::eq(self, other) {
            return Ok(());
        }

        let flag_limb: Limb = flag as Limb;
        let keep_limb: Limb = 1 - flag_limb;
        let flag_sign: i8 = flag as i8;
        let keep_sign: i8 = 1 - flag_sign;

        let self_len = self.limbs.len();
        let other_len = other.limbs.len();
        limb::grow(&mut self.limbs, other_len)?;
        limb::grow(&mut other.limbs, self_len)?;

        let s = self.sign;
        self.sign = self.sign * keep_sign + other.sign * flag_sign;
        other.sign = other.sign * keep_sign + s * flag_sign;

        for i in 0..self.limbs.len() {
            let tmp = self.limbs[i];
            self.limbs[i] = self.limbs[i] * keep_limb + other.limbs[i] * flag_limb;
            other.limbs[i] = other.limbs[i] * keep_limb + tmp * flag_limb;
        }

        Ok(())
    }

    /// Reads bit `pos` (0 = least significant), or `0` if `pos` is beyond
    /// the current allocation (`mpi_get_bit`).
    pub fn get_bit(&self, pos: usize) -> u8 {
        let limb_bits = limb::LIMB_BITS as usize;
        let idx = pos / limb_bits;
        if idx >= self.limbs.len() {
            return 0;
        }
        ((self.limbs[idx] >> (pos % limb_bits)) & 1) as u8
    }

    /// Sets bit `pos` to `0` or `1`, growing the buffer if necessary
    /// (`mpi_set_bit`). Any other value is `BadInput`.
    pub fn set_bit(&mut self, pos: usize, val: u8) -> MpiResult<()> {
        if val != 0 && val != 1 {
            return Err(MpiError::BadInput);
        }

        let limb_bits = limb::LIMB_BITS as usize;
        let idx = pos / limb_bits;
        let bit = pos % limb_bits;

        if idx >= self.limbs.len() {
            if val == 0 {
                return Ok(());
            }
            limb::grow(&mut self.limbs, idx + 1)?;
        }

        self.limbs[idx] &= !(1 << bit);
        self.limbs[idx] |= (val as Limb) << bit;

        Ok(())
    }

    /// Number of trailing zero bits, or `0` if the value is zero
    /// (`mpi_lsb`).
    pub fn lsb(&self) -> usize {
        let limb_bits = limb::LIMB_BITS as usize;
        for (i, &l) in self.limbs.iter().enumerate() {
            if l != 0 {
                return i * limb_bits + l.trailing_zeros() as usize;
            }
        }
        0
    }

    /// One plus the index of the most significant set bit, or `0` for
    /// zero (`mpi_msb`).
    pub fn msb(&self) -> usize {
        let limb_bits = limb::LIMB_BITS as usize;
        let n = self.significant_len();
        if n == 0 {
            return 0;
        }
        (n - 1) * limb_bits + (limb_bits - self.limbs[n - 1].leading_zeros() as usize)
    }

    /// Size in bytes needed to hold the big-endian encoding of the
    /// magnitude (`mpi_size`).
    pub fn byte_size(&self) -> usize {
        (self.msb() + 7) / 8
    }
}

impl PartialEq for Mpi {
    fn eq(&self, other: &Self) -> bool {
        let a = self.significant_len();
        let b = other.significant_len();
        if a != b {
            return false;
        }
        if a == 0 {
            return true;
        }
        self.sign == other.sign && self.limbs[..a] == other.limbs[..b]
    }
}

impl Eq for Mpi {}

impl Drop for Mpi {
    fn drop(&mut self) {
        limb::wipe(&mut self.limbs);
    }
}

impl fmt::Display for Mpi {
    /// Renders the value as an uppercase hexadecimal string, the natural
    /// text form for an MPI.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-")?;
        }

        let n = self.significant_len();
        if n == 0 {
            return write!(f, "0");
        }

        write!(f, "{:X}", self.limbs[n - 1])?;
        for limb in self.limbs[..n - 1].iter().rev() {
            write!(f, "{:016X}", limb)?;
        }

        Ok(())
    }
}
