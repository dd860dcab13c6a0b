//! Bitwise shifts.
//!
//! Grounded on `mpi_shift_l`/`mpi_shift_r` in
//! `examples/original_source/code/crypto/bignum.c`.

use super::core::Mpi;
use super::error::MpiResult;
use super::limb::{self, LIMB_BITS};

/// Shifts `x` left by `count` bits in place, growing the buffer as
/// needed (`mpi_shift_l`).
pub fn shift_left(x: &mut Mpi, count: usize) -> MpiResult<()> {
    if count == 0 {
        return Ok(());
    }

    let limb_bits = LIMB_BITS as usize;
    let v0 = count / limb_bits;
    let t1 = count % limb_bits;

    let old_used = x.msb();
    let new_used = old_used + count;
    let needed_limbs = (new_used + limb_bits - 1) / limb_bits.max(1);
    limb::grow(&mut x.limbs, needed_limbs.max(x.limbs.len()))?;

    let n = x.limbs.len();

    if v0 > 0 {
        for i in (v0..n).rev() {
            x.limbs[i] = x.limbs[i - v0];
        }
        for i in 0..v0.min(n) {
            x.limbs[i] = 0;
        }
    }

    if t1 > 0 {
        for i in (v0..n).rev() {
            let hi = x.limbs[i] << t1;
            let lo = if i > v0 {
                x.limbs[i - 1] >> (limb_bits - t1)
            } else {
                0
            };
            x.limbs[i] = hi | lo;
        }
    }

    Ok(())
}

/// Shifts `x` right by `count` bits in place (`mpi_shift_r`). Bits
/// shifted past the top are dropped; the buffer length is unchanged.
pub fn shift_right(x: &mut Mpi, count: usize) {
    let limb_bits = LIMB_BITS as usize;
    let n = x.limbs.len();

    if count >= n * limb_bits {
        limb::wipe(&mut x.limbs);
        x.normalize_sign();
        return;
    }

    let v0 = count / limb_bits;
    let t1 = count % limb_bits;

    if v0 > 0 {
        for i in 0..n - v0 {
            x.limbs[i] = x.limbs[i + v0];
        }
        for i in n - v0..n {
            x.limbs[i] = 0;
        }
    }

    if t1 > 0 {
        for i in 0..n - v0 {
            let lo = x.limbs[i] >> t1;
            let hi = if i + 1 < n - v0 {
                x.limbs[i + 1] << (limb_bits - t1)
            } else {
                0
            };
            x.limbs[i] = lo | hi;
        }
    }

    x.normalize_sign();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_left_across_limb_boundary() {
        let mut x = Mpi::from_u64(1);
        shift_left(&mut x, 70).unwrap();
        assert_eq!(x.get_bit(70), 1);
        assert_eq!(x.get_bit(69), 0);
    }

    #[test]
    fn shift_right_drops_low_bits() {
        let mut x = Mpi::from_u64(0b1100);
        shift_right(&mut x, 2);
        assert_eq!(x, Mpi::from_u64(0b11));
    }

    #[test]
    fn shift_right_past_width_yields_zero() {
        let mut x = Mpi::from_u64(0xFFFF_FFFF);
        shift_right(&mut x, 200);
        assert!(x.is_zero());
    }

    #[test]
    fn shift_left_zero_is_noop() {
        let mut x = Mpi::from_u64(7);
        shift_left(&mut x, 0).unwrap();
        assert_eq!(x, Mpi::from_u64(7));
    }
}
