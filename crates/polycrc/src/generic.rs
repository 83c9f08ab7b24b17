//! CRC models narrower than their register.
//!
//! [`Crc`] wraps an [`Engine`] and aligns the model to it:
//!
//! - Unreflected models live in the **top** `width` bits of the register, so
//!   `poly`, `init` and `xor_out` are shifted up by `R::BITS - width` and the
//!   result is shifted back down.
//! - Reflected models live in the **low** `width` bits. `poly` and `init` are
//!   still shifted up before the engine bit-reverses them, which lands them at
//!   the bottom; `xor_out` and the result need no shift.
//!
//! Which of the two applies to the output is decided by `refout`, since the
//! engine reverses the whole register when `refin != refout`.

use core::fmt;

use traits::{Checksum, RangeError};

use crate::{engine::Engine, error::ModelError, model::CrcModel, register::Register};

/// A CRC of any width up to `R::BITS`, computed with an `R`-sized engine.
///
/// # Example
///
/// ```rust
/// use polycrc::{Crc, CrcModel};
///
/// // CRC-16/ARC
/// let model = CrcModel::new(16, 0x8005, 0, true, true, 0)?;
/// let mut crc = Crc::<u32>::new(&model)?;
/// crc.update(b"123456789");
/// assert_eq!(crc.value(), 0xBB3D);
/// # Ok::<(), polycrc::ModelError>(())
/// ```
#[derive(Clone)]
pub struct Crc<R: Register, const LANES: usize = 16> {
  engine: Engine<R, LANES>,
  model: CrcModel,
  shift: u32,
  mask: R,
}

/// Models up to 32 bits, slice-by-16.
pub type Crc32Generic = Crc<u32, 16>;
/// Models up to 64 bits, slice-by-16.
pub type Crc64Generic = Crc<u64, 16>;

impl<R: Register, const LANES: usize> Crc<R, LANES> {
  /// Build an engine for `model`.
  ///
  /// # Errors
  ///
  /// [`ModelError::WidthExceedsRegister`] if the model is wider than `R`.
  pub fn new(model: &CrcModel) -> Result<Self, ModelError> {
    let width = model.width();
    if width > R::BITS {
      return Err(ModelError::WidthExceedsRegister { width, register_bits: R::BITS });
    }
    Ok(Self::build(model))
  }

  /// Construction once the width is known to fit.
  pub(crate) fn build(model: &CrcModel) -> Self {
    debug_assert!(model.width() <= R::BITS);
    let shift = R::BITS - model.width();
    let poly = R::from_u64(model.poly()) << shift;
    let init = R::from_u64(model.init()) << shift;
    let xor_out = R::from_u64(model.xor_out());
    let xor_out = if model.refout() { xor_out } else { xor_out << shift };

    Self {
      engine: Engine::new(poly, init, model.refin(), model.refout(), xor_out),
      model: *model,
      shift,
      mask: R::from_u64(model.mask()),
    }
  }

  /// The model this engine computes.
  #[inline]
  #[must_use]
  pub fn model(&self) -> &CrcModel {
    &self.model
  }

  /// A reset copy sharing the same tables.
  #[inline]
  #[must_use]
  pub fn fresh(&self) -> Self {
    Self { engine: self.engine.fresh(), model: self.model, shift: self.shift, mask: self.mask }
  }

  #[inline]
  pub fn reset(&mut self) {
    self.engine.reset();
  }

  #[inline]
  pub fn update_byte(&mut self, byte: u8) {
    self.engine.update_byte(byte);
  }

  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.engine.update(data);
  }

  /// Process `buf[offset..offset + len]`.
  ///
  /// # Errors
  ///
  /// [`RangeError`] if the range does not lie inside `buf`.
  #[inline]
  pub fn update_range(&mut self, buf: &[u8], offset: usize, len: usize) -> Result<(), RangeError> {
    self.engine.update_range(buf, offset, len)
  }

  /// The CRC so far, in the low `width` bits.
  #[inline]
  #[must_use]
  pub fn value(&self) -> R {
    let native = self.engine.value();
    let aligned = if self.model.refout() { native } else { native >> self.shift };
    aligned & self.mask
  }

  /// Continue from a previously finalized `crc`.
  #[inline]
  pub fn resume(&mut self, crc: R) {
    let crc = crc & self.mask;
    let native = if self.model.refout() { crc } else { crc << self.shift };
    self.engine.resume(native);
  }

  #[inline]
  #[must_use]
  pub fn kernel_name(&self) -> &'static str {
    self.engine.kernel_name()
  }
}

impl<R: Register> Crc<R, 1> {
  /// Process the next `bits` bits of `value` (at most 8).
  ///
  /// See [`Engine::update_bits`] for the bit order.
  #[inline]
  pub fn update_bits(&mut self, value: u8, bits: u32) {
    self.engine.update_bits(value, bits);
  }
}

impl<R: Register, const LANES: usize> fmt::Debug for Crc<R, LANES> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc").field("model", &self.model).field("engine", &self.engine).finish()
  }
}

impl<R: Register, const LANES: usize> Checksum for Crc<R, LANES> {
  type Output = R;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Crc::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> R {
    self.value()
  }

  #[inline]
  fn reset(&mut self) {
    Crc::reset(self);
  }
}
