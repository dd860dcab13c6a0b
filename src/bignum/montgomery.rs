//! Montgomery multiplication and reduction.
//!
//! Grounded on `mpi_montg_init`/`mpi_montmul`/`mpi_montred` in
//! `examples/original_source/code/crypto/bignum.c`. The `n0` derivation
//! (five doublings of a 3-bit-correct Newton-Raphson seed to invert the
//! modulus's low limb mod `2^LIMB_BITS`) and the constant-time
//! final-subtraction rationale are cross-checked against the `n0`
//! doc comment on `OwnedModulusWithOne` in
//! `examples/xhebox-ring/src/arithmetic/bigint/modulus.rs`.

use std::cmp::Ordering;

use super::core::Mpi;
use super::error::MpiResult;
use super::limb::{self, DoubleLimb, Limb, LIMB_BITS};
use super::mul::mul_hlp;

/// Computes `mm = -N[0]^-1 mod 2^LIMB_BITS` for odd modulus `n`
/// (`mpi_montg_init`). `N[0]` is invertible mod `2^LIMB_BITS` exactly
/// because `n` is odd.
pub fn montg_init(n: &Mpi) -> Limb {
    let n0 = n.limbs[0];
    debug_assert!(n0 & 1 == 1, "montgomery modulus must be odd");

    // n0 * n0 == 1 (mod 8) for any odd n0: 3 correct bits to start.
    let mut x = n0;
    for _ in 0..5 {
        x = x.wrapping_mul(2u64.wrapping_sub(n0.wrapping_mul(x)));
    }

    x.wrapping_neg()
}

fn cmp_limbs(a: &[Limb], b: &[Limb]) -> Ordering {
    for i in (0..a.len().max(b.len())).rev() {
        let av = a.get(i).copied().unwrap_or(0);
        let bv = b.get(i).copied().unwrap_or(0);
        if av != bv {
            return av.cmp(&bv);
        }
    }
    Ordering::Equal
}

/// `a -= b` over equal-length limb slices, assuming `a >= b`. Ignores
/// any borrow past the end, matching `mpi_sub_hlp`'s unsigned subtract.
fn sub_limbs_in_place(a: &mut [Limb], b: &[Limb]) {
    let mut borrow: i128 = 0;
    for i in 0..a.len() {
        let bv = b.get(i).copied().unwrap_or(0) as i128;
        let diff = a[i] as i128 - bv - borrow;
        if diff < 0 {
            a[i] = (diff + (1i128 << LIMB_BITS)) as Limb;
            borrow = 1;
        } else {
            a[i] = diff as Limb;
            borrow = 0;
        }
    }
}

/// Computes `x = a * b * R^-1 mod n`, where `R = 2^(LIMB_BITS * n.len())`
/// (`mpi_montmul`). `a` and `b` are expected already reduced mod `n`.
/// `mm` is `montg_init(n)`.
pub fn montmul(x: &mut Mpi, a: &Mpi, b: &Mpi, n: &Mpi, mm: Limb) -> MpiResult<()> {
    let nn = n.significant_len();
    let m = b.significant_len().min(nn);
    let n_limbs = &n.limbs[..nn];

    let mut a_padded = a.limbs.clone();
    a_padded.resize(nn, 0);
    let mut b_padded = b.limbs.clone();
    b_padded.resize(m, 0);

    let mut d = vec![0 as Limb; 2 * nn + 2];

    for i in 0..nn {
        let u0 = a_padded[i];
        let d0_plus = d[0].wrapping_add(u0.wrapping_mul(b_padded.first().copied().unwrap_or(0)));
        let u1 = d0_plus.wrapping_mul(mm);

        mul_hlp(&b_padded[..m], &mut d, u0);
        mul_hlp(n_limbs, &mut d, u1);

        for k in 0..d.len() - 1 {
            d[k] = d[k + 1];
        }
        *d.last_mut().unwrap() = 0;
    }

    // The accumulator can reach 2N-1 after the loop, one limb wider than
    // N itself whenever N's top limb is large (the common case for real
    // moduli). Keep that carry limb live through the compare/subtract/
    // copy-back step instead of truncating to N's own width.
    //
    // Equalize the memory-access pattern: always perform a subtract,
    // either of N (the real reduction) or of an all-zero buffer.
    let needs_reduction = cmp_limbs(&d[..nn + 1], n_limbs) != Ordering::Less;
    let zeros = vec![0 as Limb; nn + 1];
    if needs_reduction {
        sub_limbs_in_place(&mut d[..nn + 1], n_limbs);
    } else {
        sub_limbs_in_place(&mut d[..nn + 1], &zeros);
    }

    limb::grow(&mut x.limbs, nn + 1)?;
    limb::wipe(&mut x.limbs);
    x.limbs[..nn + 1].copy_from_slice(&d[..nn + 1]);
    x.sign = 1;
    x.normalize_sign();

    Ok(())
}

/// Converts `x` out of Montgomery form by multiplying by `1`
/// (`mpi_montred`): `x = x * R^-1 mod n`.
pub fn montred(x: &mut Mpi, n: &Mpi, mm: Limb) -> MpiResult<()> {
    let one = Mpi::from_u64(1);
    let snapshot = x.clone();
    montmul(x, &snapshot, &one, n, mm)
}
