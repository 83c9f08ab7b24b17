//! Bitwise reference implementation for every CRC model.
//!
//! This module provides the canonical "source of truth" for CRC computation.
//! It processes one bit at a time, directly following the Rocksoft model:
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `width`   | CRC width in bits (1 through 64) |
//! | `poly`    | Generator polynomial, natural notation |
//! | `init`    | Initial register value, natural notation |
//! | `refin`   | Feed each input byte least significant bit first |
//! | `refout`  | Reflect the register before the final XOR |
//! | `xorout`  | Final XOR value |
//!
//! No tables, no register alignment tricks: the register always holds the
//! CRC in its low `width` bits, MSB-first. All table-driven engines must
//! produce identical results.
//!
//! These are intentionally slow. Use for correctness verification, test
//! oracles and compile-time check-value assertions.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
#![allow(clippy::indexing_slicing)]

use crate::model::CrcModel;

/// The standard check input from the CRC catalogue.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// One division step: shift `bit` into the register.
#[inline]
const fn step(crc: u64, bit: u64, model: &CrcModel) -> u64 {
  let top = (crc >> (model.width() - 1)) & 1;
  let shifted = (crc << 1) & model.mask();
  if top != bit { shifted ^ model.poly() } else { shifted }
}

/// Apply output reflection and the final XOR to a raw register.
#[inline]
const fn finish(crc: u64, model: &CrcModel) -> u64 {
  let out = if model.refout() { model.reflect(crc) } else { crc };
  (out ^ model.xor_out()) & model.mask()
}

/// Bitwise CRC of `data` under `model`.
///
/// # Returns
///
/// The final CRC value (reflection and `xor_out` applied), in the low
/// `width` bits.
#[must_use]
pub const fn bitwise(model: &CrcModel, data: &[u8]) -> u64 {
  let mut crc = model.init();
  let mut i: usize = 0;
  while i < data.len() {
    let byte = data[i];
    let mut k: u32 = 0;
    while k < 8 {
      let bit = if model.refin() { (byte >> k) & 1 } else { (byte >> (7 - k)) & 1 };
      crc = step(crc, bit as u64, model);
      k += 1;
    }
    i += 1;
  }
  finish(crc, model)
}

/// Bitwise CRC of an arbitrary bit sequence.
///
/// Bits are consumed in stream order; `refin` has no effect here since there
/// are no bytes to reflect.
#[must_use]
pub fn bitwise_bits<I>(model: &CrcModel, bits: I) -> u64
where
  I: IntoIterator<Item = bool>,
{
  let crc = bits.into_iter().fold(model.init(), |crc, bit| step(crc, u64::from(bit), model));
  finish(crc, model)
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-time check values
// ─────────────────────────────────────────────────────────────────────────────

const fn model(width: u32, poly: u64, init: u64, refin: bool, refout: bool, xor_out: u64) -> CrcModel {
  match CrcModel::new(width, poly, init, refin, refout, xor_out) {
    Ok(m) => m,
    Err(_) => panic!("invalid check model"),
  }
}

const CRC32_ISO_HDLC: CrcModel = model(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);
const CRC16_ARC: CrcModel = model(16, 0x8005, 0, true, true, 0);
const CRC16_IBM_3740: CrcModel = model(16, 0x1021, 0xFFFF, false, false, 0);
const CRC64_XZ: CrcModel = model(64, 0x42F0_E1EB_A9EA_3693, u64::MAX, true, true, u64::MAX);
const CRC64_ECMA_182: CrcModel = model(64, 0x42F0_E1EB_A9EA_3693, 0, false, false, 0);

const _: () = assert!(bitwise(&CRC32_ISO_HDLC, CHECK_INPUT) == 0xCBF4_3926);
const _: () = assert!(bitwise(&CRC16_ARC, CHECK_INPUT) == 0xBB3D);
const _: () = assert!(bitwise(&CRC16_IBM_3740, CHECK_INPUT) == 0x29B1);
const _: () = assert!(bitwise(&CRC64_XZ, CHECK_INPUT) == 0x995D_C9BB_DF19_39FA);
const _: () = assert!(bitwise(&CRC64_ECMA_182, CHECK_INPUT) == 0x6C40_DF5F_0B49_7347);
