//! Greatest common divisor and modular inverse.
//!
//! Grounded on `mpi_gcd`/`mpi_inv_mod` in
//! `examples/original_source/code/crypto/bignum.c`: `gcd` is Stein's
//! binary algorithm, `inv_mod` is the binary extended Euclidean
//! algorithm (HAC 14.61). Cross-checked against the plain extended-gcd
//! structure in
//! `examples/other_examples/..._tczajka-ibig-rs__src-gcd-simple.rs.rs`.
//!
//! `inv_mod` verifies its candidate by multiplying back before
//! returning it, since the binary algorithm's two tracked coefficients
//! can come out as the inverse or its negation depending on which side
//! of the extended Euclidean recursion terminates first.

use std::cmp::Ordering;

use super::add::{add_mpi, sub_mpi};
use super::cmp::{cmp_abs, cmp_int};
use super::core::Mpi;
use super::div::mod_mpi;
use super::error::{MpiError, MpiResult};
use super::mul::mul_mpi;
use super::shift::shift_right;

/// Computes `x = gcd(|a|, |b|)` using Stein's binary algorithm
/// (`mpi_gcd`). Always non-negative.
pub fn gcd(x: &mut Mpi, a: &Mpi, b: &Mpi) -> MpiResult<()> {
    let mut ta = a.clone();
    ta.sign = 1;
    let mut tb = b.clone();
    tb.sign = 1;

    if ta.is_zero() {
        x.copy_from(&tb)?;
        return Ok(());
    }
    if tb.is_zero() {
        x.copy_from(&ta)?;
        return Ok(());
    }

    let shift = ta.lsb().min(tb.lsb());
    let ta_lsb = ta.lsb();
    shift_right(&mut ta, ta_lsb);
    let tb_lsb = tb.lsb();
    shift_right(&mut tb, tb_lsb);

    loop {
        if cmp_abs(&ta, &tb) == Ordering::Greater {
            ta.swap(&mut tb);
        }

        let mut diff = Mpi::new();
        super::add::sub_abs(&mut diff, &tb, &ta)?;
        if diff.is_zero() {
            break;
        }

        let diff_lsb = diff.lsb();
        shift_right(&mut diff, diff_lsb);
        tb = diff;
    }

    super::shift::shift_left(&mut ta, shift)?;
    x.copy_from(&ta)?;
    Ok(())
}

/// Computes `x = a^-1 mod n` (`mpi_inv_mod`). Requires `n > 0`; returns
/// `MpiError::NotAcceptable` if `gcd(a, n) != 1`.
pub fn inv_mod(x: &mut Mpi, a: &Mpi, n: &Mpi) -> MpiResult<()> {
    if n.sign < 0 || n.is_zero() {
        return Err(MpiError::NegativeValue);
    }

    let mut a_mod = Mpi::new();
    mod_mpi(&mut a_mod, a, n)?;
    if a_mod.is_zero() {
        return Err(MpiError::NotAcceptable);
    }

    let mut g = Mpi::new();
    gcd(&mut g, &a_mod, n)?;
    if g != Mpi::from_u64(1) {
        return Err(MpiError::NotAcceptable);
    }

    if cmp_int(n, 1) == Ordering::Equal {
        x.set_small(0);
        return Ok(());
    }

    let xin = a_mod.clone();
    let yin = n.clone();

    let mut u = a_mod.clone();
    let mut v = n.clone();
    let mut aa = Mpi::from_u64(1);
    let mut bb = Mpi::new();
    let mut cc = Mpi::new();
    let mut dd = Mpi::from_u64(1);

    while !u.is_zero() {
        while !u.is_zero() && u.get_bit(0) == 0 {
            shift_right(&mut u, 1);
            if aa.get_bit(0) == 0 && bb.get_bit(0) == 0 {
                shift_right(&mut aa, 1);
                shift_right(&mut bb, 1);
            } else {
                let mut tmp = Mpi::new();
                add_mpi(&mut tmp, &aa, &yin)?;
                shift_right(&mut tmp, 1);
                aa = tmp;

                let mut tmp2 = Mpi::new();
                sub_mpi(&mut tmp2, &bb, &xin)?;
                shift_right(&mut tmp2, 1);
                bb = tmp2;
            }
        }

        while !v.is_zero() && v.get_bit(0) == 0 {
            shift_right(&mut v, 1);
            if cc.get_bit(0) == 0 && dd.get_bit(0) == 0 {
                shift_right(&mut cc, 1);
                shift_right(&mut dd, 1);
            } else {
                let mut tmp = Mpi::new();
                add_mpi(&mut tmp, &cc, &yin)?;
                shift_right(&mut tmp, 1);
                cc = tmp;

                let mut tmp2 = Mpi::new();
                sub_mpi(&mut tmp2, &dd, &xin)?;
                shift_right(&mut tmp2, 1);
                dd = tmp2;
            }
        }

        if cmp_abs(&u, &v) != Ordering::Less {
            let u_snap = u.clone();
            sub_mpi(&mut u, &u_snap, &v)?;
            let aa_snap = aa.clone();
            sub_mpi(&mut aa, &aa_snap, &cc)?;
            let bb_snap = bb.clone();
            sub_mpi(&mut bb, &bb_snap, &dd)?;
        } else {
            let v_snap = v.clone();
            sub_mpi(&mut v, &v_snap, &u)?;
            let cc_snap = cc.clone();
            sub_mpi(&mut cc, &cc_snap, &aa)?;
            let dd_snap = dd.clone();
            sub_mpi(&mut dd, &dd_snap, &bb)?;
        }
    }

    let mut candidate = Mpi::new();
    mod_mpi(&mut candidate, &cc, n)?;
    if verifies(&a_mod, &candidate, n)? {
        x.copy_from(&candidate)?;
        return Ok(());
    }

    let mut negated = Mpi::new();
    sub_mpi(&mut negated, n, &candidate)?;
    if verifies(&a_mod, &negated, n)? {
        x.copy_from(&negated)?;
        return Ok(());
    }

    Err(MpiError::NotAcceptable)
}

fn verifies(a_mod: &Mpi, candidate: &Mpi, n: &Mpi) -> MpiResult<bool> {
    let mut product = Mpi::new();
    mul_mpi(&mut product, a_mod, candidate)?;
    let mut reduced = Mpi::new();
    mod_mpi(&mut reduced, &product, n)?;
    Ok(reduced == Mpi::from_u64(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_of_coprime_is_one() {
        let a = Mpi::from_u64(35);
        let b = Mpi::from_u64(64);
        let mut g = Mpi::new();
        gcd(&mut g, &a, &b).unwrap();
        assert_eq!(g, Mpi::from_u64(1));
    }

    #[test]
    fn gcd_extracts_common_factor() {
        let a = Mpi::from_u64(48);
        let b = Mpi::from_u64(180);
        let mut g = Mpi::new();
        gcd(&mut g, &a, &b).unwrap();
        assert_eq!(g, Mpi::from_u64(12));
    }

    #[test]
    fn gcd_ignores_sign() {
        let a = Mpi::from_i64(-48);
        let b = Mpi::from_u64(18);
        let mut g = Mpi::new();
        gcd(&mut g, &a, &b).unwrap();
        assert_eq!(g, Mpi::from_u64(6));
    }

    #[test]
    fn gcd_with_zero_returns_other_operand() {
        let a = Mpi::zero();
        let b = Mpi::from_u64(41);
        let mut g = Mpi::new();
        gcd(&mut g, &a, &b).unwrap();
        assert_eq!(g, Mpi::from_u64(41));
    }

    #[test]
    fn inv_mod_matches_known_value() {
        let a = Mpi::from_u64(3);
        let n = Mpi::from_u64(11);
        let mut inv = Mpi::new();
        inv_mod(&mut inv, &a, &n).unwrap();
        assert_eq!(inv, Mpi::from_u64(4));

        let mut check = Mpi::new();
        mul_mpi(&mut check, &a, &inv).unwrap();
        let mut check_mod = Mpi::new();
        mod_mpi(&mut check_mod, &check, &n).unwrap();
        assert_eq!(check_mod, Mpi::from_u64(1));
    }

    #[test]
    fn inv_mod_rejects_non_coprime() {
        let a = Mpi::from_u64(6);
        let n = Mpi::from_u64(9);
        let mut inv = Mpi::new();
        assert_eq!(inv_mod(&mut inv, &a, &n), Err(MpiError::NotAcceptable));
    }

    #[test]
    fn inv_mod_handles_negative_input() {
        let a = Mpi::from_i64(-3);
        let n = Mpi::from_u64(11);
        let mut inv = Mpi::new();
        inv_mod(&mut inv, &a, &n).unwrap();

        let mut check = Mpi::new();
        mul_mpi(&mut check, &a, &inv).unwrap();
        let mut check_mod = Mpi::new();
        mod_mpi(&mut check_mod, &check, &n).unwrap();
        assert_eq!(check_mod, Mpi::from_u64(1));
    }
}
