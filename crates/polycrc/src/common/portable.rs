//! Portable CRC kernels using lookup table algorithms.
//!
//! Every kernel exists in two mirrored variants:
//!
//! - **reflected**: the register shifts right, input bytes meet the low end
//! - **unreflected**: the register shifts left, input bytes meet the top end
//!
//! # Algorithm Overview
//!
//! Slice-by-N processes N bytes per iteration using N precomputed lookup
//! tables. The first `R::BYTES` input bytes of a block are combined by XOR with the
//! register bytes they line up with; the rest are looked up as-is. Table
//! `N-1-j` is used for byte `j`, since that byte still has `N-1-j` bytes to
//! travel through before the block ends.
//!
//! With `N == 1` the block step degenerates to the byte-wise step, so the
//! same kernel serves all lane counts.
//!
//! | Register | Lanes | Bytes/iter | Tables |
//! |----------|-------|------------|--------|
//! | `u32` | 8 | 8 | 8×256×u32 |
//! | `u32` | 16 | 16 | 16×256×u32 |
//! | `u64` | 8 | 8 | 8×256×u64 |
//! | `u64` | 16 | 16 | 16×256×u64 |

// SAFETY: All array indexing in this module uses bounded indices:
// - `as_chunks::<N>` guarantees chunk sizes
// - Table indices are `u8` values (0..255) into 256-entry tables
// - Lane index `N - 1 - j` with `j < N`
#![allow(clippy::indexing_slicing)]

use crate::register::Register;

// ─────────────────────────────────────────────────────────────────────────────
// Byte-wise
// ─────────────────────────────────────────────────────────────────────────────

/// Advance a reflected register by one byte.
#[inline(always)]
pub(crate) fn byte_reflected<R: Register>(crc: R, byte: u8, table: &[R; 256]) -> R {
  (crc >> 8) ^ table[usize::from(crc.low_byte() ^ byte)]
}

/// Advance an unreflected register by one byte.
#[inline(always)]
pub(crate) fn byte_unreflected<R: Register>(crc: R, byte: u8, table: &[R; 256]) -> R {
  (crc << 8) ^ table[usize::from(crc.top_byte() ^ byte)]
}

// ─────────────────────────────────────────────────────────────────────────────
// Slice-by-N
// ─────────────────────────────────────────────────────────────────────────────

/// Update a reflected register using the slice-by-N algorithm.
///
/// # Arguments
///
/// * `crc` - Current register state
/// * `data` - Input data
/// * `tables` - N lookup tables (256 entries each)
#[inline]
pub(crate) fn slice_reflected<R: Register, const N: usize>(mut crc: R, data: &[u8], tables: &[[R; 256]; N]) -> R {
  let (chunks, remainder) = data.as_chunks::<N>();

  for chunk in chunks {
    let mut next = if N < R::BYTES { crc >> (8 * N as u32) } else { R::ZERO };
    for (j, &byte) in chunk.iter().enumerate() {
      let index = if j < R::BYTES { byte ^ crc.byte(j) } else { byte };
      next ^= tables[N - 1 - j][usize::from(index)];
    }
    crc = next;
  }

  for &byte in remainder {
    crc = byte_reflected(crc, byte, &tables[0]);
  }

  crc
}

/// Update an unreflected register using the slice-by-N algorithm.
///
/// Mirror image of [`slice_reflected`]: register bytes are consumed from the
/// top and the carried part shifts left.
#[inline]
pub(crate) fn slice_unreflected<R: Register, const N: usize>(mut crc: R, data: &[u8], tables: &[[R; 256]; N]) -> R {
  let (chunks, remainder) = data.as_chunks::<N>();

  for chunk in chunks {
    let mut next = if N < R::BYTES { crc << (8 * N as u32) } else { R::ZERO };
    for (j, &byte) in chunk.iter().enumerate() {
      let index = if j < R::BYTES { byte ^ crc.byte(R::BYTES - 1 - j) } else { byte };
      next ^= tables[N - 1 - j][usize::from(index)];
    }
    crc = next;
  }

  for &byte in remainder {
    crc = byte_unreflected(crc, byte, &tables[0]);
  }

  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Bit-at-a-time
// ─────────────────────────────────────────────────────────────────────────────

/// Feed the low `bits` bits of `value`, least significant first.
///
/// `rpoly` is the polynomial in register (reflected) order.
#[inline]
pub(crate) fn bits_reflected<R: Register>(mut crc: R, mut value: u8, bits: u32, rpoly: R) -> R {
  for _ in 0..bits {
    let feedback = (crc.low_byte() ^ value) & 1 != 0;
    crc = crc >> 1;
    if feedback {
      crc ^= rpoly;
    }
    value >>= 1;
  }
  crc
}

/// Feed the top `bits` bits of `value`, most significant first.
#[inline]
pub(crate) fn bits_unreflected<R: Register>(mut crc: R, mut value: u8, bits: u32, poly: R) -> R {
  for _ in 0..bits {
    let feedback = crc.msb() ^ (value & 0x80 != 0);
    crc = crc << 1;
    if feedback {
      crc ^= poly;
    }
    value <<= 1;
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::tables::build_lane_tables;

  const CRC32_POLY: u32 = 0x04C1_1DB7;
  const CRC64_XZ_POLY: u64 = 0x42F0_E1EB_A9EA_3693;
  const DATA: &[u8] = b"The quick brown fox jumps over the lazy dog, twice over and then some";

  fn bytewise_reflected<R: Register>(mut crc: R, data: &[u8], table: &[R; 256]) -> R {
    for &b in data {
      crc = byte_reflected(crc, b, table);
    }
    crc
  }

  fn bytewise_unreflected<R: Register>(mut crc: R, data: &[u8], table: &[R; 256]) -> R {
    for &b in data {
      crc = byte_unreflected(crc, b, table);
    }
    crc
  }

  #[test]
  fn test_slice_empty() {
    let t16 = build_lane_tables::<u64, 16>(CRC64_XZ_POLY, true);
    assert_eq!(slice_reflected(!0u64, &[], &t16), !0);
    let t8 = build_lane_tables::<u32, 8>(CRC32_POLY, false);
    assert_eq!(slice_unreflected(!0u32, &[], &t8), !0);
  }

  #[test]
  fn test_crc32_check_vector() {
    let tables = build_lane_tables::<u32, 8>(CRC32_POLY, true);
    assert_eq!(slice_reflected(!0u32, b"123456789", &tables) ^ !0, 0xCBF4_3926);

    // CRC-32/BZIP2
    assert_eq!(slice_unreflected(!0u32, b"123456789", &tables_unreflected_u32()) ^ !0, 0xFC89_1918);
  }

  fn tables_unreflected_u32() -> [[u32; 256]; 16] {
    build_lane_tables::<u32, 16>(CRC32_POLY, false)
  }

  #[test]
  fn test_crc64_xz_check_vector() {
    let tables = build_lane_tables::<u64, 16>(CRC64_XZ_POLY, true);
    assert_eq!(slice_reflected(!0u64, b"123456789", &tables) ^ !0, 0x995D_C9BB_DF19_39FA);
  }

  #[test]
  fn test_slice_matches_bytewise_every_length() {
    let r32 = build_lane_tables::<u32, 16>(CRC32_POLY, true);
    let n32 = build_lane_tables::<u32, 16>(CRC32_POLY, false);
    let r64 = build_lane_tables::<u64, 16>(CRC64_XZ_POLY, true);
    let n64 = build_lane_tables::<u64, 16>(CRC64_XZ_POLY, false);
    let r64_8 = build_lane_tables::<u64, 8>(CRC64_XZ_POLY, true);
    let n32_8 = build_lane_tables::<u32, 8>(CRC32_POLY, false);

    for len in 0..=DATA.len() {
      let d = &DATA[..len];
      assert_eq!(slice_reflected(0x1234_5678u32, d, &r32), bytewise_reflected(0x1234_5678, d, &r32[0]), "len {len}");
      assert_eq!(slice_unreflected(0x9ABC_DEF0u32, d, &n32), bytewise_unreflected(0x9ABC_DEF0, d, &n32[0]));
      assert_eq!(slice_reflected(!0u64, d, &r64), bytewise_reflected(!0, d, &r64[0]));
      assert_eq!(slice_reflected(!0u64, d, &r64_8), bytewise_reflected(!0, d, &r64_8[0]));
      assert_eq!(slice_unreflected(7u64, d, &n64), bytewise_unreflected(7, d, &n64[0]));
      assert_eq!(slice_unreflected(!0u32, d, &n32_8), bytewise_unreflected(!0, d, &n32_8[0]));
    }
  }

  #[test]
  fn test_single_lane_is_bytewise() {
    let t = build_lane_tables::<u32, 1>(CRC32_POLY, true);
    assert_eq!(slice_reflected(!0u32, DATA, &t), bytewise_reflected(!0, DATA, &t[0]));
    let t = build_lane_tables::<u64, 1>(CRC64_XZ_POLY, false);
    assert_eq!(slice_unreflected(!0u64, DATA, &t), bytewise_unreflected(!0, DATA, &t[0]));
  }

  #[test]
  fn test_slice_incremental() {
    let tables = build_lane_tables::<u64, 16>(CRC64_XZ_POLY, true);
    let full = slice_reflected(!0u64, DATA, &tables);

    for split in [1, 7, 8, 9, 15, 16, 17, 20, 33] {
      let crc1 = slice_reflected(!0u64, &DATA[..split], &tables);
      let crc2 = slice_reflected(crc1, &DATA[split..], &tables);
      assert_eq!(crc2, full, "Incremental failed at split {split}");
    }
  }

  #[test]
  fn test_eight_bits_equal_one_byte() {
    let rt = build_lane_tables::<u32, 1>(CRC32_POLY, true);
    let nt = build_lane_tables::<u32, 1>(CRC32_POLY, false);
    let rpoly = CRC32_POLY.reverse_bits();

    for byte in 0u8..=255 {
      let crc = 0xDEAD_BEEFu32;
      assert_eq!(bits_reflected(crc, byte, 8, rpoly), byte_reflected(crc, byte, &rt[0]));
      assert_eq!(bits_unreflected(crc, byte, 8, CRC32_POLY), byte_unreflected(crc, byte, &nt[0]));
    }
  }

  #[test]
  fn test_bits_split() {
    let rpoly = CRC64_XZ_POLY.reverse_bits();
    let whole = bits_reflected(!0u64, 0b1011_0110, 8, rpoly);
    let low = bits_reflected(!0u64, 0b0110, 3, rpoly);
    let high = bits_reflected(low, 0b1011_0110 >> 3, 5, rpoly);
    assert_eq!(whole, high);

    let whole = bits_unreflected(!0u64, 0b1011_0110, 8, CRC64_XZ_POLY);
    let top = bits_unreflected(!0u64, 0b1011_0110, 2, CRC64_XZ_POLY);
    let rest = bits_unreflected(top, 0b1011_0110 << 2, 6, CRC64_XZ_POLY);
    assert_eq!(whole, rest);
  }

  #[test]
  fn test_zero_bits_is_noop() {
    assert_eq!(bits_reflected(0x55u32, 0xFF, 0, 1), 0x55);
    assert_eq!(bits_unreflected(0x55u64, 0xFF, 0, 1), 0x55);
  }
}
