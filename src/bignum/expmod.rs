//! Sliding-window modular exponentiation.
//!
//! Grounded on `mpi_exp_mod` in
//! `examples/original_source/code/crypto/bignum.c`: the window-size
//! thresholds (exponent bit length 671/239/79/23 selecting window size
//! 6/5/4/3/1), the precomputed odd-power table in Montgomery form, and
//! the negative-base correction (`X = N - X` when `A` is negative and
//! `E` is odd) all come from that function.

use super::core::Mpi;
use super::div::mod_mpi;
use super::error::{MpiError, MpiResult};
use super::limb::{Limb, LIMB_BITS};
use super::montgomery::{montg_init, montmul, montred};
use super::shift::shift_left;

fn window_size(exponent_bits: usize) -> usize {
    match exponent_bits {
        n if n > 671 => 6,
        n if n > 239 => 5,
        n if n > 79 => 4,
        n if n > 23 => 3,
        _ => 1,
    }
}

/// Caches the Montgomery context (`n0` and `R^2 mod n`) for a modulus
/// across repeated `exp_mod` calls, so callers doing many exponentiations
/// against the same RSA/DH modulus pay the setup cost once.
pub struct MontgomeryCache {
    modulus: Option<Mpi>,
    mm: Limb,
    rr: Mpi,
}

impl MontgomeryCache {
    /// An empty cache; the first `exp_mod` call against it populates it.
    pub fn new() -> Self {
        MontgomeryCache {
            modulus: None,
            mm: 0,
            rr: Mpi::new(),
        }
    }

    fn ensure(&mut self, n: &Mpi) -> MpiResult<()> {
        if self.modulus.as_ref() == Some(n) {
            return Ok(());
        }

        let mm = montg_init(n);
        let k = n.significant_len();
        let mut r = Mpi::from_u64(1);
        shift_left(&mut r, 2 * k * LIMB_BITS as usize)?;
        let mut rr = Mpi::new();
        mod_mpi(&mut rr, &r, n)?;

        self.mm = mm;
        self.rr = rr;
        self.modulus = Some(n.clone());
        Ok(())
    }
}

impl Default for MontgomeryCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes `x = a^e mod n` (`mpi_exp_mod`). `n` must be positive and
/// odd (Montgomery reduction requires it); `e` must be non-negative. An
/// explicit `cache` lets repeated calls against the same modulus skip
/// recomputing `R^2 mod n`.
pub fn exp_mod(
    x: &mut Mpi,
    a: &Mpi,
    e: &Mpi,
    n: &Mpi,
    cache: Option<&mut MontgomeryCache>,
) -> MpiResult<()> {
    if n.is_zero() || n.sign < 0 {
        return Err(MpiError::BadInput);
    }
    if n.limbs.first().copied().unwrap_or(0) & 1 == 0 {
        return Err(MpiError::BadInput);
    }
    if e.sign < 0 {
        return Err(MpiError::BadInput);
    }

    let mut owned_cache = MontgomeryCache::new();
    let cache = cache.unwrap_or(&mut owned_cache);
    cache.ensure(n)?;
    let mm = cache.mm;
    let rr = cache.rr.clone();

    if e.is_zero() {
        let one = Mpi::from_u64(1);
        let mut result = Mpi::new();
        mod_mpi(&mut result, &one, n)?;
        x.copy_from(&result)?;
        return Ok(());
    }

    let mut a_mod = Mpi::new();
    mod_mpi(&mut a_mod, a, n)?;

    let nbits = e.msb();
    let wsize = window_size(nbits);
    let table_len = 1usize << (wsize - 1);

    let mut w: Vec<Mpi> = Vec::with_capacity(table_len);
    let mut w0 = Mpi::new();
    montmul(&mut w0, &a_mod, &rr, n, mm)?;
    w.push(w0.clone());

    if table_len > 1 {
        let mut a2 = Mpi::new();
        montmul(&mut a2, &w0, &w0, n, mm)?;
        for idx in 1..table_len {
            let prev = w[idx - 1].clone();
            let mut next = Mpi::new();
            montmul(&mut next, &prev, &a2, n, mm)?;
            w.push(next);
        }
    }

    let one = Mpi::from_u64(1);
    let mut result = Mpi::new();
    montmul(&mut result, &one, &rr, n, mm)?;

    let mut pos = nbits as isize - 1;
    while pos >= 0 {
        let i0 = pos as usize;

        if e.get_bit(i0) == 0 {
            let snapshot = result.clone();
            montmul(&mut result, &snapshot, &snapshot, n, mm)?;
            pos -= 1;
            continue;
        }

        let max_window = wsize.min(i0 + 1);
        let mut l = max_window;
        while l > 1 && e.get_bit(i0 + 1 - l) == 0 {
            l -= 1;
        }

        let mut window_val: usize = 0;
        for k in 0..l {
            window_val = (window_val << 1) | e.get_bit(i0 - k) as usize;
        }

        for _ in 0..l {
            let snapshot = result.clone();
            montmul(&mut result, &snapshot, &snapshot, n, mm)?;
        }

        let idx = (window_val - 1) / 2;
        let snapshot = result.clone();
        montmul(&mut result, &snapshot, &w[idx], n, mm)?;

        pos -= l as isize;
    }

    montred(&mut result, n, mm)?;

    if a.is_negative() && e.get_bit(0) == 1 && !result.is_zero() {
        let mut corrected = Mpi::new();
        super::add::sub_mpi(&mut corrected, n, &result)?;
        result = corrected;
    }

    x.copy_from(&result)?;
    Ok(())
}
