//! Multiplication.
//!
//! Grounded on `mpi_mul_hlp`/`mpi_mul_mpi`/`mpi_mul_int` in
//! `examples/original_source/code/crypto/bignum.c`; the multiply-and-
//! accumulate loop shape matches the schoolbook inner loop used by
//! `examples/other_examples/..._mortendahl-ramp__src-ll-mul.rs.rs`.

use super::core::Mpi;
use super::error::MpiResult;
use super::limb::{self, DoubleLimb, Limb, LIMB_BITS};

/// Multiplies `a` by the scalar `b`, adding the product into `d` in
/// place and propagating the resulting carry beyond `a.len()`
/// (`mpi_mul_hlp`). `d` must be at least `a.len() + 1` limbs long, with
/// enough trailing room for the carry chain to resolve. Shared with
/// `montgomery.rs`, which reuses this exact multiply-accumulate step.
pub(crate) fn mul_hlp(a: &[Limb], d: &mut [Limb], b: Limb) {
    let mut carry: DoubleLimb = 0;
    let bd = b as DoubleLimb;

    for i in 0..a.len() {
        let prod = a[i] as DoubleLimb * bd + d[i] as DoubleLimb + carry;
        d[i] = prod as Limb;
        carry = prod >> LIMB_BITS;
    }

    let mut k = a.len();
    while carry > 0 {
        let sum = d[k] as DoubleLimb + carry;
        d[k] = sum as Limb;
        carry = sum >> LIMB_BITS;
        k += 1;
    }
}

/// `x = a * b` (`mpi_mul_mpi`).
pub fn mul_mpi(x: &mut Mpi, a: &Mpi, b: &Mpi) -> MpiResult<()> {
    let la = a.significant_len();
    let lb = b.significant_len();

    let mut result = vec![0 as Limb; la + lb + 1];
    for i in 0..la {
        mul_hlp(&b.limbs[..lb], &mut result[i..], a.limbs[i]);
    }

    limb::grow(&mut x.limbs, result.len())?;
    limb::wipe(&mut x.limbs);
    x.limbs[..result.len()].copy_from_slice(&result);
    x.sign = if la == 0 || lb == 0 { 1 } else { a.sign * b.sign };
    x.normalize_sign();

    Ok(())
}

/// `x = a * b` for an unsigned scalar `b` (`mpi_mul_int`). Unsigned-only,
/// as the original's `t_uint` scalar parameter is — a negative scalar
/// multiply uses `mul_mpi` with a negative one-limb `Mpi` instead.
pub fn mul_int(x: &mut Mpi, a: &Mpi, b: u64) -> MpiResult<()> {
    let rhs = Mpi::from_u64(b);
    mul_mpi(x, a, &rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_mpi_carries_across_limbs() {
        let a = Mpi::from_u64(u64::MAX);
        let b = Mpi::from_u64(u64::MAX);
        let mut x = Mpi::new();
        mul_mpi(&mut x, &a, &b).unwrap();

        let mut expected = Mpi::new();
        expected.limbs = vec![1, u64::MAX - 1];
        assert_eq!(x, expected);
    }

    #[test]
    fn mul_mpi_sign_rules() {
        let a = Mpi::from_i64(-6);
        let b = Mpi::from_i64(7);
        let mut x = Mpi::new();
        mul_mpi(&mut x, &a, &b).unwrap();
        assert_eq!(x, Mpi::from_i64(-42));

        let a = Mpi::from_i64(-6);
        let b = Mpi::from_i64(-7);
        mul_mpi(&mut x, &a, &b).unwrap();
        assert_eq!(x, Mpi::from_i64(42));
    }

    #[test]
    fn mul_by_zero_is_positive_zero() {
        let a = Mpi::from_i64(-6);
        let b = Mpi::zero();
        let mut x = Mpi::new();
        mul_mpi(&mut x, &a, &b).unwrap();
        assert!(x.is_zero());
        assert_eq!(x.sign, 1);
    }

    #[test]
    fn mul_int_matches_mul_mpi() {
        let a = Mpi::from_i64(19);
        let mut x = Mpi::new();
        mul_int(&mut x, &a, 3).unwrap();
        assert_eq!(x, Mpi::from_i64(57));
    }
}
