//! GF(2) polynomial arithmetic for CRC combination.
//!
//! When you have `crc(A)` and `crc(B)`, you can compute `crc(A || B)` without
//! reprocessing `A`. Appending `n` bytes multiplies the register by
//! `x^(8n) mod P`, and CRC is linear, so:
//!
//! ```text
//! reg(A || B) = reg(B) XOR (reg(A) XOR init) * x^(8*len(B)) mod P
//! ```
//!
//! `x^(8n)` is built by square-and-multiply over a table of `x^(2^i)`, so
//! every operation here costs O(log n) field multiplications.
//!
//! # Encodings
//!
//! Field elements are kept in the register's bit order:
//!
//! | `refin` | `x^0` at | multiply by `x` |
//! |---------|----------|-----------------|
//! | `true` | bit `width - 1` | shift right |
//! | `false` | bit 0 | shift left |
//!
//! CRC values of models with `refin != refout` are bit-reversed over `width`
//! on the way in and out, so callers always pass and receive plain CRC
//! values as the engines produce them.

// SAFETY: The only indexing is into the 2-entry `normalize` vector with a
// single extracted bit (0 or 1).
#![allow(clippy::indexing_slicing)]

use traits::ChecksumCombine;

use crate::model::CrcModel;

/// Combination, seed replacement and zero-run CRCs for one model.
///
/// Immutable after construction; share it freely.
///
/// # Example
///
/// ```rust
/// use polycrc::{Checksum, Combiner, Crc, CrcModel};
///
/// let model = CrcModel::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF)?;
/// let crc = Crc::<u32>::new(&model)?;
/// let combiner = Combiner::new(&model);
///
/// let (a, b) = b"123456789".split_at(4);
/// let crc_a = u64::from(crc.checksum_of(a));
/// let crc_b = u64::from(crc.checksum_of(b));
/// assert_eq!(combiner.combine(crc_a, crc_b, b.len() as u64), 0xCBF4_3926);
/// # Ok::<(), polycrc::ModelError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Combiner {
  model: CrcModel,
  width: u32,
  mask: u64,
  /// Field encoding follows `refin`.
  reflected: bool,
  /// The element `1` (`x^0`).
  one: u64,
  /// Reduction vector indexed by the coefficient shifted out of `x^(width-1)`.
  normalize: [u64; 2],
  /// `x^(2^i) mod P`.
  x_pow_2n: [u64; 64],
  /// Model `init` as a field element.
  init: u64,
  /// `xor_out` as a field element.
  canonize: u64,
  residue: u64,
}

impl Combiner {
  /// Precompute the field context for `model`.
  #[must_use]
  pub fn new(model: &CrcModel) -> Self {
    let width = model.width();
    let reflected = model.refin();
    let one = if reflected { 1u64 << (width - 1) } else { 1 };
    let init = if reflected { model.reflect(model.init()) } else { model.init() };

    let mut combiner = Self {
      model: *model,
      width,
      mask: model.mask(),
      reflected,
      one,
      normalize: [0, model.poly_for_input()],
      x_pow_2n: [0; 64],
      init,
      canonize: 0,
      residue: 0,
    };
    combiner.canonize = combiner.to_field(model.xor_out());

    let mut x_pow_2n = [0u64; 64];
    let mut x = combiner.mul_x(one);
    for slot in &mut x_pow_2n {
      *slot = x;
      x = combiner.multiply(x, x);
    }
    combiner.x_pow_2n = x_pow_2n;

    let x_pow_width = combiner.x_pow_n(u64::from(width));
    combiner.residue = combiner.field_to_crc(combiner.multiply(combiner.canonize, one ^ x_pow_width));
    combiner
  }

  /// The model this combiner works for.
  #[inline]
  #[must_use]
  pub fn model(&self) -> &CrcModel {
    &self.model
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Encoding
  // ───────────────────────────────────────────────────────────────────────────

  /// CRC value to field element (before removing `xor_out`).
  #[inline]
  fn to_field(&self, value: u64) -> u64 {
    let value = value & self.mask;
    if self.model.refin() == self.model.refout() { value } else { self.model.reflect(value) }
  }

  /// Field element to CRC value. Reflection is an involution, so this is
  /// the same mapping as [`to_field`](Self::to_field).
  #[inline]
  fn field_to_crc(&self, element: u64) -> u64 {
    self.to_field(element)
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Field arithmetic
  // ───────────────────────────────────────────────────────────────────────────

  /// `b * x mod P`.
  #[inline]
  fn mul_x(&self, b: u64) -> u64 {
    if self.reflected {
      (b >> 1) ^ self.normalize[(b & 1) as usize]
    } else {
      let carry = (b >> (self.width - 1)) & 1;
      ((b << 1) & self.mask) ^ self.normalize[carry as usize]
    }
  }

  /// `a * b mod P`.
  ///
  /// Walks the coefficients of `a` from `x^0` upward, so the operand whose
  /// highest term is lowest is put in `a`.
  #[must_use]
  pub fn multiply(&self, a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a & self.mask, b & self.mask);
    let mut product = 0;

    if self.reflected {
      // x^0 is the top bit: fewer steps when `a` has more trailing zeros.
      if (a ^ a.wrapping_sub(1)) < (b ^ b.wrapping_sub(1)) {
        core::mem::swap(&mut a, &mut b);
      }
      while a != 0 {
        if a & self.one != 0 {
          product ^= b;
          a ^= self.one;
        }
        a <<= 1;
        b = self.mul_x(b);
      }
    } else {
      if a > b {
        core::mem::swap(&mut a, &mut b);
      }
      while a != 0 {
        if a & 1 != 0 {
          product ^= b;
        }
        a >>= 1;
        b = self.mul_x(b);
      }
    }

    product
  }

  /// `x^n mod P`.
  #[must_use]
  pub fn x_pow_n(&self, n: u64) -> u64 {
    let mut result = self.one;
    for (i, &power) in self.x_pow_2n.iter().enumerate() {
      let rest = n >> i;
      if rest == 0 {
        break;
      }
      if rest & 1 != 0 {
        result = self.multiply(result, power);
      }
    }
    result
  }

  /// `x^(8n) mod P`, without overflowing `8n`.
  #[must_use]
  pub fn x_pow_8n(&self, n: u64) -> u64 {
    let mut result = self.x_pow_n(n);
    for _ in 0..3 {
      result = self.multiply(result, result);
    }
    result
  }

  // ───────────────────────────────────────────────────────────────────────────
  // CRC operations
  // ───────────────────────────────────────────────────────────────────────────

  /// The CRC of the empty message when the register starts at `init`.
  ///
  /// `init` is given like the model's own `init` parameter. The result is the
  /// "start value" accepted by [`change_seed`](Self::change_seed) and
  /// [`zeroes_crc`](Self::zeroes_crc).
  #[must_use]
  pub fn start_value(&self, init: u64) -> u64 {
    let init = init & self.mask;
    let init = if self.reflected { self.model.reflect(init) } else { init };
    self.field_to_crc(init ^ self.canonize)
  }

  /// The CRC of the empty message under the model's own `init`.
  #[inline]
  #[must_use]
  pub fn empty_crc(&self) -> u64 {
    self.start_value(self.model.init())
  }

  /// `crc(A || B)` from `crc(A)`, `crc(B)` and `len(B)` in bytes.
  ///
  /// Both inputs must have been computed with the model's `init`.
  #[must_use]
  pub fn combine(&self, crc_a: u64, crc_b: u64, len_b: u64) -> u64 {
    let a = self.to_field(crc_a) ^ self.init ^ self.canonize;
    self.field_to_crc(self.to_field(crc_b) ^ self.multiply(a, self.x_pow_8n(len_b)))
  }

  /// Re-seed a CRC of `len` bytes from `old_start` to `new_start`.
  ///
  /// Start values are CRCs of the empty message, see
  /// [`start_value`](Self::start_value).
  #[must_use]
  pub fn change_seed(&self, crc: u64, len: u64, old_start: u64, new_start: u64) -> u64 {
    let delta = self.to_field(new_start) ^ self.to_field(old_start);
    self.field_to_crc(self.to_field(crc) ^ self.multiply(delta, self.x_pow_8n(len)))
  }

  /// The CRC of `len` zero bytes, starting from `start`.
  #[must_use]
  pub fn zeroes_crc(&self, len: u64, start: u64) -> u64 {
    let register = self.to_field(start) ^ self.canonize;
    self.field_to_crc(self.multiply(register, self.x_pow_8n(len)) ^ self.canonize)
  }

  /// The CRC of any message followed by its own CRC.
  ///
  /// The CRC is appended in register bit order: `refin == refout` models
  /// append it as-is, others append its reflection. Reflected models store
  /// it little-endian, unreflected ones big-endian.
  #[inline]
  #[must_use]
  pub fn residue(&self) -> u64 {
    self.residue
  }
}

impl ChecksumCombine for Combiner {
  type Output = u64;

  #[inline]
  fn combine(&self, crc_a: u64, crc_b: u64, len_b: u64) -> u64 {
    Combiner::combine(self, crc_a, crc_b, len_b)
  }
}
