//! Randomness injection.
//!
//! Grounded on `mpi_fill_random` in
//! `examples/original_source/code/crypto/bignum.c` and on this crate's
//! own `rng::Csprng` / `os::sys_random` entropy pattern: the MPI engine
//! never reads entropy directly, it takes a `&mut dyn SecureRng` so
//! callers control the source (and tests can supply a deterministic
//! one).

use super::core::Mpi;
use super::error::MpiResult;
use super::serialize::read_binary;

/// A source of cryptographically secure random bytes.
pub trait SecureRng {
    /// Fills `buf` entirely with random bytes.
    fn try_fill(&mut self, buf: &mut [u8]) -> MpiResult<()>;
}

impl SecureRng for crate::rng::Csprng {
    fn try_fill(&mut self, buf: &mut [u8]) -> MpiResult<()> {
        self.fill_bytes(buf);
        Ok(())
    }
}

/// Fills `x` with `n_bytes` of random data, read as a big-endian
/// non-negative magnitude (`mpi_fill_random`).
pub fn fill_random(x: &mut Mpi, n_bytes: usize, rng: &mut dyn SecureRng) -> MpiResult<()> {
    let mut buf = vec![0u8; n_bytes];
    rng.try_fill(&mut buf)?;
    let result = read_binary(x, &buf);
    buf.fill(0);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRng(Vec<u8>);

    impl SecureRng for FixedRng {
        fn try_fill(&mut self, buf: &mut [u8]) -> MpiResult<()> {
            buf.copy_from_slice(&self.0[..buf.len()]);
            Ok(())
        }
    }

    #[test]
    fn fill_random_reads_bytes_big_endian() {
        let mut rng = FixedRng(vec![0x01, 0x02, 0x03, 0x04]);
        let mut x = Mpi::new();
        fill_random(&mut x, 4, &mut rng).unwrap();
        assert_eq!(x, Mpi::from_u64(0x01020304));
    }

    #[test]
    fn fill_random_is_always_nonnegative() {
        let mut rng = FixedRng(vec![0xFF; 8]);
        let mut x = Mpi::new();
        fill_random(&mut x, 8, &mut rng).unwrap();
        assert!(!x.is_negative());
    }
}
