//! Comparison operations.
//!
//! Grounded on `mpi_cmp_abs`/`mpi_cmp_mpi`/`mpi_cmp_int` in
//! `examples/original_source/code/crypto/bignum.c`.

use std::cmp::Ordering;

use super::core::Mpi;

/// Compares the magnitudes of `a` and `b`, ignoring sign (`mpi_cmp_abs`).
pub fn cmp_abs(a: &Mpi, b: &Mpi) -> Ordering {
    let la = a.significant_len();
    let lb = b.significant_len();

    if la != lb {
        return la.cmp(&lb);
    }

    for i in (0..la).rev() {
        if a.limbs[i] != b.limbs[i] {
            return a.limbs[i].cmp(&b.limbs[i]);
        }
    }

    Ordering::Equal
}

/// Compares `a` and `b` as signed values (`mpi_cmp_mpi`).
pub fn cmp_mpi(a: &Mpi, b: &Mpi) -> Ordering {
    let la = a.significant_len();
    let lb = b.significant_len();

    if la == 0 && lb == 0 {
        return Ordering::Equal;
    }

    match (a.sign, b.sign) {
        (sa, sb) if sa > 0 && sb < 0 => Ordering::Greater,
        (sa, sb) if sa < 0 && sb > 0 => Ordering::Less,
        (sa, _) if sa > 0 => cmp_abs(a, b),
        _ => cmp_abs(b, a),
    }
}

/// Compares `a` against the signed small integer `z` (`mpi_cmp_int`).
pub fn cmp_int(a: &Mpi, z: i64) -> Ordering {
    let mut tmp = Mpi::new();
    tmp.set_small(z);
    cmp_mpi(a, &tmp)
}

impl PartialOrd for Mpi {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(cmp_mpi(self, other))
    }
}

impl Ord for Mpi {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_mpi(self, other)
    }
}
