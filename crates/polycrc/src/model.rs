//! CRC model parameters.
//!
//! Models follow the Rocksoft parameterization used by the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).
//!
//! # Parameters
//!
//! - `width`: number of bits in the CRC (1 through 64)
//! - `poly`: generator polynomial, without the implicit `x^width` term
//! - `init`: initial register value
//! - `refin`: process each input byte least significant bit first
//! - `refout`: reflect the final register before the XOR
//! - `xor_out`: value combined by XOR into the final register
//!
//! `poly`, `init` and `xor_out` are always given in natural (unreflected)
//! notation, exactly as the catalogue lists them.

use crate::error::{ModelError, ModelField};

/// Mask covering the low `width` bits (`width` in `1..=64`).
#[inline]
#[must_use]
pub const fn width_mask(width: u32) -> u64 {
  if width >= 64 { u64::MAX } else { (1u64 << width) - 1 }
}

/// Reflect (bit-reverse) the lower `width` bits of `value`.
///
/// Bits above `width` are discarded. For example,
/// `reflect_bits(0b1011, 4)` returns `0b1101`.
#[inline]
#[must_use]
pub const fn reflect_bits(value: u64, width: u32) -> u64 {
  (value & width_mask(width)).reverse_bits() >> (64 - width)
}

/// A validated CRC model.
///
/// Immutable once built; fully determines checksum behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcModel {
  width: u8,
  poly: u64,
  init: u64,
  refin: bool,
  refout: bool,
  xor_out: u64,
}

impl CrcModel {
  /// Create a model, validating the width and field sizes.
  ///
  /// # Errors
  ///
  /// - [`ModelError::InvalidWidth`] if `width` is outside `1..=64`
  /// - [`ModelError::ExcessBits`] if `poly`, `init` or `xor_out` has bits set
  ///   at or above `width`
  pub const fn new(
    width: u32,
    poly: u64,
    init: u64,
    refin: bool,
    refout: bool,
    xor_out: u64,
  ) -> Result<Self, ModelError> {
    if width == 0 || width > 64 {
      return Err(ModelError::InvalidWidth { width });
    }
    let excess = !width_mask(width);
    if poly & excess != 0 {
      return Err(ModelError::ExcessBits { field: ModelField::Poly, width });
    }
    if init & excess != 0 {
      return Err(ModelError::ExcessBits { field: ModelField::Init, width });
    }
    if xor_out & excess != 0 {
      return Err(ModelError::ExcessBits { field: ModelField::XorOut, width });
    }
    Ok(Self { width: width as u8, poly, init, refin, refout, xor_out })
  }

  /// The same model with a different initial register value.
  ///
  /// # Errors
  ///
  /// [`ModelError::ExcessBits`] if `init` does not fit the width.
  pub const fn with_init(self, init: u64) -> Result<Self, ModelError> {
    Self::new(self.width as u32, self.poly, init, self.refin, self.refout, self.xor_out)
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width as u32
  }

  #[inline]
  #[must_use]
  pub const fn poly(&self) -> u64 {
    self.poly
  }

  #[inline]
  #[must_use]
  pub const fn init(&self) -> u64 {
    self.init
  }

  #[inline]
  #[must_use]
  pub const fn refin(&self) -> bool {
    self.refin
  }

  #[inline]
  #[must_use]
  pub const fn refout(&self) -> bool {
    self.refout
  }

  #[inline]
  #[must_use]
  pub const fn xor_out(&self) -> u64 {
    self.xor_out
  }

  /// Mask covering the model's `width` bits.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    width_mask(self.width as u32)
  }

  /// Reflect `value` over the model's width.
  #[inline]
  #[must_use]
  pub const fn reflect(&self, value: u64) -> u64 {
    reflect_bits(value, self.width as u32)
  }

  /// The polynomial in the bit order the engine processes it.
  ///
  /// Reflected for `refin` models, natural otherwise.
  #[inline]
  #[must_use]
  pub const fn poly_for_input(&self) -> u64 {
    if self.refin { self.reflect(self.poly) } else { self.poly }
  }
}
