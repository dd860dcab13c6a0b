//! Signed addition and subtraction.
//!
//! Grounded on `mpi_add_abs`/`mpi_sub_abs`/`mpi_add_mpi`/`mpi_sub_mpi`/
//! `mpi_add_int`/`mpi_sub_int` in
//! `examples/original_source/code/crypto/bignum.c`. The original's
//! limb-chain `mpi_sub_hlp` borrow loop is expressed here as a widening
//! `i128` subtraction per limb, the same widening-arithmetic idiom this
//! module uses throughout instead of manual half-limb carry tracking.

use std::cmp::Ordering;

use super::cmp::cmp_abs;
use super::core::Mpi;
use super::error::{MpiError, MpiResult};
use super::limb::{self, DoubleLimb, Limb, LIMB_BITS};

/// Computes `|a| + |b|` into `x`. Always leaves `x.sign == 1`
/// (`mpi_add_abs`).
pub fn add_abs(x: &mut Mpi, a: &Mpi, b: &Mpi) -> MpiResult<()> {
    let la = a.significant_len();
    let lb = b.significant_len();
    let n = la.max(lb);

    limb::grow(&mut x.limbs, n + 1)?;
    limb::wipe(&mut x.limbs);

    let mut carry: DoubleLimb = 0;
    for i in 0..n {
        let av = if i < la { a.limbs[i] } else { 0 };
        let bv = if i < lb { b.limbs[i] } else { 0 };
        let sum = av as DoubleLimb + bv as DoubleLimb + carry;
        x.limbs[i] = sum as Limb;
        carry = sum >> LIMB_BITS;
    }
    x.limbs[n] = carry as Limb;
    x.sign = 1;

    Ok(())
}

/// Computes `|a| - |b|` into `x`. Requires `|a| >= |b|`; otherwise
/// returns `MpiError::NegativeValue` (`mpi_sub_abs`).
pub fn sub_abs(x: &mut Mpi, a: &Mpi, b: &Mpi) -> MpiResult<()> {
    if cmp_abs(a, b) == Ordering::Less {
        return Err(MpiError::NegativeValue);
    }

    let la = a.significant_len();
    let lb = b.significant_len();

    limb::grow(&mut x.limbs, la)?;
    limb::wipe(&mut x.limbs);

    let mut borrow: i128 = 0;
    for i in 0..la {
        let av = a.limbs[i] as i128;
        let bv = if i < lb { b.limbs[i] as i128 } else { 0 };
        let mut diff = av - bv - borrow;
        if diff < 0 {
            diff += 1i128 << LIMB_BITS;
            borrow = 1;
        } else {
            borrow = 0;
        }
        x.limbs[i] = diff as Limb;
    }
    x.sign = 1;

    Ok(())
}

/// Signed addition `x = a + b` (`mpi_add_mpi`).
pub fn add_mpi(x: &mut Mpi, a: &Mpi, b: &Mpi) -> MpiResult<()> {
    if a.sign > 0 && b.sign > 0 || a.sign < 0 && b.sign < 0 {
        add_abs(x, a, b)?;
        x.sign = a.sign;
    } else {
        match cmp_abs(a, b) {
            Ordering::Less => {
                sub_abs(x, b, a)?;
                x.sign = -a.sign;
            }
            _ => {
                sub_abs(x, a, b)?;
                x.sign = a.sign;
            }
        }
    }
    x.normalize_sign();
    Ok(())
}

/// Signed subtraction `x = a - b` (`mpi_sub_mpi`).
pub fn sub_mpi(x: &mut Mpi, a: &Mpi, b: &Mpi) -> MpiResult<()> {
    let mut neg_b = b.clone();
    if !neg_b.is_zero() {
        neg_b.sign = -neg_b.sign;
    }
    add_mpi(x, a, &neg_b)
}

/// `x = a + b` for a signed small integer `b` (`mpi_add_int`).
pub fn add_int(x: &mut Mpi, a: &Mpi, b: i64) -> MpiResult<()> {
    let mut rhs = Mpi::new();
    rhs.set_small(b);
    add_mpi(x, a, &rhs)
}

/// `x = a - b` for a signed small integer `b` (`mpi_sub_int`).
pub fn sub_int(x: &mut Mpi, a: &Mpi, b: i64) -> MpiResult<()> {
    let mut rhs = Mpi::new();
    rhs.set_small(b);
    sub_mpi(x, a, &rhs)
}
