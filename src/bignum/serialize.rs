//! Binary and ASCII encoding.
//!
//! Grounded on `mpi_read_binary`/`mpi_write_binary`/`mpi_read_string`/
//! `mpi_write_string`/`mpi_write_hlp`/`mpi_get_digit` in
//! `examples/original_source/code/crypto/bignum.c`. `write_string`
//! returns an owned `String` rather than filling a caller buffer plus
//! length, matching this crate's general preference for allocation-
//! returning APIs over out-parameters wherever Rust ownership makes
//! that the more natural shape.

use super::core::Mpi;
use super::error::{MpiError, MpiResult};
use super::limb::{self, Limb, LIMB_BITS};

/// Reads a big-endian byte string into `x` as a non-negative magnitude
/// (`mpi_read_binary`).
pub fn read_binary(x: &mut Mpi, buf: &[u8]) -> MpiResult<()> {
    let limb_bytes = (LIMB_BITS / 8) as usize;
    let n = (buf.len() + limb_bytes - 1) / limb_bytes.max(1);

    limb::grow(&mut x.limbs, n.max(1))?;
    limb::wipe(&mut x.limbs);

    for (i, &byte) in buf.iter().rev().enumerate() {
        let limb_idx = i / limb_bytes;
        let shift = (i % limb_bytes) * 8;
        x.limbs[limb_idx] |= (byte as Limb) << shift;
    }

    x.sign = 1;
    Ok(())
}

/// Writes the big-endian magnitude of `x` into `buf`, left-zero-padded.
/// Returns `MpiError::BufferTooSmall` if `buf` is shorter than
/// `x.byte_size()` (`mpi_write_binary`).
pub fn write_binary(x: &Mpi, buf: &mut [u8]) -> MpiResult<()> {
    let needed = x.byte_size();
    if buf.len() < needed {
        return Err(MpiError::BufferTooSmall { needed });
    }

    for b in buf.iter_mut() {
        *b = 0;
    }

    let limb_bytes = (LIMB_BITS / 8) as usize;
    for i in 0..needed {
        let limb_idx = i / limb_bytes;
        let shift = (i % limb_bytes) * 8;
        let byte = if limb_idx < x.limbs.len() {
            ((x.limbs[limb_idx] >> shift) & 0xFF) as u8
        } else {
            0
        };
        buf[buf.len() - 1 - i] = byte;
    }

    Ok(())
}

fn digit_value(c: char, radix: u32) -> MpiResult<u32> {
    let v = c.to_digit(16).ok_or(MpiError::InvalidCharacter)?;
    if v >= radix {
        return Err(MpiError::InvalidCharacter);
    }
    Ok(v)
}

/// Parses `s` in the given `radix` (2..=16), an optional leading `-`
/// allowed, into `x` (`mpi_read_string`).
pub fn read_string(x: &mut Mpi, radix: u32, s: &str) -> MpiResult<()> {
    if !(2..=16).contains(&radix) {
        return Err(MpiError::BadInput);
    }

    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    if digits.is_empty() {
        return Err(MpiError::InvalidCharacter);
    }

    x.set_small(0);
    let mut radix_mpi = Mpi::new();
    radix_mpi.set_small(radix as i64);

    for c in digits.chars() {
        let d = digit_value(c, radix)?;
        let mut scaled = Mpi::new();
        super::mul::mul_mpi(&mut scaled, x, &radix_mpi)?;
        let mut next = Mpi::new();
        super::add::add_int(&mut next, &scaled, d as i64)?;
        *x = next;
    }

    if negative && !x.is_zero() {
        x.sign = -1;
    }

    Ok(())
}

const DIGITS: &[u8] = b"0123456789ABCDEF";

/// Renders `x` in the given `radix` (2..=16) as an owned string, with a
/// leading `-` for negative values (`mpi_write_string`/`mpi_write_hlp`).
pub fn write_string(x: &Mpi, radix: u32) -> MpiResult<String> {
    if !(2..=16).contains(&radix) {
        return Err(MpiError::BadInput);
    }

    if x.is_zero() {
        return Ok("0".to_string());
    }

    let mut digits = Vec::new();
    let mut n = x.clone();
    n.sign = 1;
    let mut r = Mpi::new();

    while !n.is_zero() {
        let rem = super::div::div_int(Some(&mut r), &n, radix as i64)?;
        digits.push(DIGITS[rem as usize]);
        n = r;
    }

    if x.is_negative() {
        digits.push(b'-');
    }

    digits.reverse();
    Ok(String::from_utf8(digits).expect("digit bytes are valid ASCII"))
}
