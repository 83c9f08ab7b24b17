//! Shared fixtures for integration tests.

#![allow(dead_code)]

use polycrc::CrcModel;

/// Deterministic xorshift byte stream.
pub fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed | 1;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

/// A catalogue model and its check value over `"123456789"`.
pub struct Named {
  pub name: &'static str,
  pub model: CrcModel,
  pub check: u64,
}

fn named(name: &'static str, width: u32, poly: u64, init: u64, refin: bool, refout: bool, xor_out: u64, check: u64) -> Named {
  Named { name, model: CrcModel::new(width, poly, init, refin, refout, xor_out).unwrap(), check }
}

pub fn catalogue() -> Vec<Named> {
  vec![
    named("CRC-3/GSM", 3, 0x3, 0, false, false, 0x7, 0x4),
    named("CRC-5/USB", 5, 0x05, 0x1F, true, true, 0x1F, 0x19),
    named("CRC-8/SMBUS", 8, 0x07, 0, false, false, 0, 0xF4),
    named("CRC-10/ATM", 10, 0x233, 0, false, false, 0, 0x199),
    named("CRC-12/UMTS", 12, 0x80F, 0, false, true, 0, 0xDAF),
    named("CRC-16/ARC", 16, 0x8005, 0, true, true, 0, 0xBB3D),
    named("CRC-16/IBM-3740", 16, 0x1021, 0xFFFF, false, false, 0, 0x29B1),
    named("CRC-16/KERMIT", 16, 0x1021, 0, true, true, 0, 0x2189),
    named("CRC-16/XMODEM", 16, 0x1021, 0, false, false, 0, 0x31C3),
    named("CRC-24/OPENPGP", 24, 0x86_4CFB, 0xB7_04CE, false, false, 0, 0x21_CF02),
    named("CRC-31/PHILIPS", 31, 0x04C1_1DB7, 0x7FFF_FFFF, false, false, 0x7FFF_FFFF, 0x0CE9_E46C),
    named("CRC-32/ISO-HDLC", 32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0xCBF4_3926),
    named("CRC-32/ISCSI", 32, 0x1EDC_6F41, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0xE306_9283),
    named("CRC-32/BZIP2", 32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0xFFFF_FFFF, 0xFC89_1918),
    named("CRC-32/MPEG-2", 32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0, 0x0376_E6E7),
    named("CRC-40/GSM", 40, 0x00_0482_0009, 0, false, false, 0xFF_FFFF_FFFF, 0xD4_164F_C646),
    named("CRC-64/XZ", 64, 0x42F0_E1EB_A9EA_3693, u64::MAX, true, true, u64::MAX, 0x995D_C9BB_DF19_39FA),
    named("CRC-64/ECMA-182", 64, 0x42F0_E1EB_A9EA_3693, 0, false, false, 0, 0x6C40_DF5F_0B49_7347),
    named("CRC-64/GO-ISO", 64, 0x1B, u64::MAX, true, true, u64::MAX, 0xB909_56C7_75A4_1001),
  ]
}
