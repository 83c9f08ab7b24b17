//! CRC lookup table generation for any polynomial and bit order.
//!
//! All builders take the polynomial in natural notation, aligned to the top
//! of the register (a 16-bit polynomial driven through a `u32` register is
//! passed as `poly << 16`). Reflected builders bit-reverse it internally.
//!
//! # Table Strategies
//!
//! | Lanes | Tables | `u32` size | `u64` size |
//! |-------|--------|------------|------------|
//! | 1 (bytewise) | 1×256 | 1 KiB | 2 KiB |
//! | 8 (slice-by-8) | 8×256 | 8 KiB | 16 KiB |
//! | 16 (slice-by-16) | 16×256 | 16 KiB | 32 KiB |
//!
//! Table 0 is the single-byte division table. Table `k` describes how a byte
//! propagates through `k` further zero bytes, which is what lets slice-by-N
//! process N input bytes with N independent lookups.

// SAFETY: All array indexing in this module uses bounded indices: loop
// counters in 0..256 / 0..LANES, or a `u8` widened to usize for 256-entry tables.
#![allow(clippy::indexing_slicing)]

use crate::register::Register;

// ─────────────────────────────────────────────────────────────────────────────
// Single-table construction (bit-by-bit)
// ─────────────────────────────────────────────────────────────────────────────

/// Reflected table entry: 8 right-shift division steps.
///
/// `rpoly` is the bit-reversed polynomial.
#[inline]
fn entry_reflected<R: Register>(rpoly: R, index: u8) -> R {
  let mut crc = R::from_byte(index);
  for _ in 0..8 {
    crc = if crc.low_byte() & 1 != 0 { (crc >> 1) ^ rpoly } else { crc >> 1 };
  }
  crc
}

/// Natural table entry: `index` in the top byte, 8 left-shift division steps.
#[inline]
fn entry_unreflected<R: Register>(poly: R, index: u8) -> R {
  let mut crc = R::from_byte(index) << (R::BITS - 8);
  for _ in 0..8 {
    crc = if crc.msb() { (crc << 1) ^ poly } else { crc << 1 };
  }
  crc
}

/// Build the byte table for a reflected (LSB-first) CRC, bit by bit.
#[must_use]
pub fn build_reflected<R: Register>(poly: R) -> [R; 256] {
  let rpoly = poly.reverse_bits();
  let mut table = [R::ZERO; 256];
  for (i, slot) in table.iter_mut().enumerate() {
    *slot = entry_reflected(rpoly, i as u8);
  }
  table
}

/// Build the byte table for a natural (MSB-first) CRC, bit by bit.
#[must_use]
pub fn build_unreflected<R: Register>(poly: R) -> [R; 256] {
  let mut table = [R::ZERO; 256];
  for (i, slot) in table.iter_mut().enumerate() {
    *slot = entry_unreflected(poly, i as u8);
  }
  table
}

// ─────────────────────────────────────────────────────────────────────────────
// Single-table construction (linearity shortcut)
// ─────────────────────────────────────────────────────────────────────────────

/// Fill composite indices from the power-of-two entries.
///
/// CRC division is linear over GF(2), so `T[a ^ b] == T[a] ^ T[b]`.
#[inline]
fn fill_by_linearity<R: Register>(table: &mut [R; 256]) {
  let mut i = 2;
  while i < 256 {
    for j in 1..i {
      table[i + j] = table[i] ^ table[j];
    }
    i *= 2;
  }
}

/// Reflected byte table using only 8 division steps in total.
///
/// Produces the same table as [`build_reflected`].
#[must_use]
pub fn fast_reflected<R: Register>(poly: R) -> [R; 256] {
  let rpoly = poly.reverse_bits();
  let mut table = [R::ZERO; 256];
  table[0x80] = rpoly;
  let mut v = rpoly;
  let mut i = 0x40;
  while i != 0 {
    v = if v.low_byte() & 1 != 0 { (v >> 1) ^ rpoly } else { v >> 1 };
    table[i] = v;
    i /= 2;
  }
  fill_by_linearity(&mut table);
  table
}

/// Natural byte table using only 8 division steps in total.
///
/// Produces the same table as [`build_unreflected`].
#[must_use]
pub fn fast_unreflected<R: Register>(poly: R) -> [R; 256] {
  let mut table = [R::ZERO; 256];
  table[1] = poly;
  let mut v = poly;
  let mut i = 2;
  while i <= 0x80 {
    v = if v.msb() { (v << 1) ^ poly } else { v << 1 };
    table[i] = v;
    i *= 2;
  }
  fill_by_linearity(&mut table);
  table
}

// ─────────────────────────────────────────────────────────────────────────────
// Slice-by-N tables
// ─────────────────────────────────────────────────────────────────────────────

/// Generate `LANES` lookup tables for slice-by-`LANES` computation.
///
/// # Arguments
///
/// * `poly` - Natural polynomial, top-aligned in the register
/// * `refin` - Build reflected (LSB-first) tables
#[must_use]
pub fn build_lane_tables<R: Register, const LANES: usize>(poly: R, refin: bool) -> [[R; 256]; LANES] {
  let mut tables = [[R::ZERO; 256]; LANES];
  if LANES == 0 {
    return tables;
  }

  tables[0] = if refin { fast_reflected(poly) } else { fast_unreflected(poly) };

  for k in 1..LANES {
    for n in 0..256 {
      let prev = tables[k - 1][n];
      tables[k][n] = if refin {
        tables[0][prev.low_byte() as usize] ^ (prev >> 8)
      } else {
        tables[0][prev.top_byte() as usize] ^ (prev << 8)
      };
    }
  }

  tables
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
