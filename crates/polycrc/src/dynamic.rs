//! Register and lane selection at runtime.

use traits::{Checksum, RangeError};

use crate::{
  config::{self, Lanes},
  generic::Crc,
  model::CrcModel,
  register::Register,
};

/// A CRC engine for any model, with the register family picked from the
/// model width and the table strategy from [`config::get`].
///
/// Models up to 32 bits run on a `u32` register, wider ones on `u64`.
/// Values are always returned as `u64`.
///
/// # Example
///
/// ```rust
/// use polycrc::{CrcModel, DynCrc, Lanes};
///
/// let model = CrcModel::new(64, 0x42F0_E1EB_A9EA_3693, u64::MAX, true, true, u64::MAX)?;
/// let mut crc = DynCrc::with_lanes(&model, Lanes::Slice8);
/// crc.update(b"123456789");
/// assert_eq!(crc.value(), 0x995D_C9BB_DF19_39FA);
/// assert_eq!(crc.kernel_name(), "portable/slice8-reflected");
/// # Ok::<(), polycrc::ModelError>(())
/// ```
#[derive(Clone, Debug)]
pub enum DynCrc {
  Bytewise32(Crc<u32, 1>),
  Slice8x32(Crc<u32, 8>),
  Slice16x32(Crc<u32, 16>),
  Bytewise64(Crc<u64, 1>),
  Slice8x64(Crc<u64, 8>),
  Slice16x64(Crc<u64, 16>),
}

macro_rules! dispatch {
  ($self:expr, $crc:ident => $body:expr) => {
    match $self {
      DynCrc::Bytewise32($crc) => $body,
      DynCrc::Slice8x32($crc) => $body,
      DynCrc::Slice16x32($crc) => $body,
      DynCrc::Bytewise64($crc) => $body,
      DynCrc::Slice8x64($crc) => $body,
      DynCrc::Slice16x64($crc) => $body,
    }
  };
}

impl DynCrc {
  /// Build an engine with the configured lane count.
  #[must_use]
  pub fn new(model: &CrcModel) -> Self {
    Self::with_lanes(model, config::get().lanes)
  }

  /// Build an engine with an explicit lane count.
  #[must_use]
  pub fn with_lanes(model: &CrcModel, lanes: Lanes) -> Self {
    if model.width() <= 32 {
      match lanes {
        Lanes::Bytewise => Self::Bytewise32(Crc::build(model)),
        Lanes::Slice8 => Self::Slice8x32(Crc::build(model)),
        Lanes::Slice16 => Self::Slice16x32(Crc::build(model)),
      }
    } else {
      match lanes {
        Lanes::Bytewise => Self::Bytewise64(Crc::build(model)),
        Lanes::Slice8 => Self::Slice8x64(Crc::build(model)),
        Lanes::Slice16 => Self::Slice16x64(Crc::build(model)),
      }
    }
  }

  /// The model this engine computes.
  #[must_use]
  pub fn model(&self) -> &CrcModel {
    dispatch!(self, crc => crc.model())
  }

  /// The table strategy in use.
  #[must_use]
  pub fn lanes(&self) -> Lanes {
    match self {
      Self::Bytewise32(_) | Self::Bytewise64(_) => Lanes::Bytewise,
      Self::Slice8x32(_) | Self::Slice8x64(_) => Lanes::Slice8,
      Self::Slice16x32(_) | Self::Slice16x64(_) => Lanes::Slice16,
    }
  }

  /// Register width of the underlying engine (32 or 64).
  #[must_use]
  pub fn register_bits(&self) -> u32 {
    match self {
      Self::Bytewise32(_) | Self::Slice8x32(_) | Self::Slice16x32(_) => 32,
      Self::Bytewise64(_) | Self::Slice8x64(_) | Self::Slice16x64(_) => 64,
    }
  }

  #[inline]
  pub fn reset(&mut self) {
    dispatch!(self, crc => crc.reset());
  }

  #[inline]
  pub fn update_byte(&mut self, byte: u8) {
    dispatch!(self, crc => crc.update_byte(byte));
  }

  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    dispatch!(self, crc => crc.update(data));
  }

  /// Process `buf[offset..offset + len]`.
  ///
  /// # Errors
  ///
  /// [`RangeError`] if the range does not lie inside `buf`.
  #[inline]
  pub fn update_range(&mut self, buf: &[u8], offset: usize, len: usize) -> Result<(), RangeError> {
    dispatch!(self, crc => crc.update_range(buf, offset, len))
  }

  /// The CRC so far.
  #[inline]
  #[must_use]
  pub fn value(&self) -> u64 {
    dispatch!(self, crc => Register::to_u64(crc.value()))
  }

  /// Continue from a previously finalized `crc`.
  ///
  /// Bits above the model width are ignored.
  #[inline]
  pub fn resume(&mut self, crc: u64) {
    match self {
      Self::Bytewise32(c) => c.resume(crc as u32),
      Self::Slice8x32(c) => c.resume(crc as u32),
      Self::Slice16x32(c) => c.resume(crc as u32),
      Self::Bytewise64(c) => c.resume(crc),
      Self::Slice8x64(c) => c.resume(crc),
      Self::Slice16x64(c) => c.resume(crc),
    }
  }

  #[must_use]
  pub fn kernel_name(&self) -> &'static str {
    dispatch!(self, crc => crc.kernel_name())
  }
}

impl Checksum for DynCrc {
  type Output = u64;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    DynCrc::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    self.value()
  }

  #[inline]
  fn reset(&mut self) {
    DynCrc::reset(self);
  }
}
