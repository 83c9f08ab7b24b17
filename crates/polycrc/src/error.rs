//! Construction errors.
//!
//! Computation itself is total: once a model is validated and an engine is
//! built, no operation can fail except bounds-checked range updates, which
//! report [`traits::RangeError`].

use core::fmt;

/// The model field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelField {
  /// Generator polynomial.
  Poly,
  /// Initial register value.
  Init,
  /// Final XOR mask.
  XorOut,
}

impl ModelField {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Poly => "poly",
      Self::Init => "init",
      Self::XorOut => "xorout",
    }
  }
}

/// A CRC model could not be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ModelError {
  /// Width outside `1..=64`.
  InvalidWidth {
    /// The rejected width.
    width: u32,
  },
  /// Width larger than the register of the requested engine family.
  WidthExceedsRegister {
    /// Model width.
    width: u32,
    /// Native register width of the engine (32 or 64).
    register_bits: u32,
  },
  /// A parameter has bits set above the model width.
  ExcessBits {
    /// The offending field.
    field: ModelField,
    /// Model width.
    width: u32,
  },
}

impl fmt::Display for ModelError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::InvalidWidth { width } => write!(f, "crc width {width} is outside 1..=64"),
      Self::WidthExceedsRegister { width, register_bits } => {
        write!(f, "crc width {width} does not fit a {register_bits}-bit register")
      }
      Self::ExcessBits { field, width } => {
        write!(f, "{} has bits set above the crc width {width}", field.as_str())
      }
    }
  }
}

impl core::error::Error for ModelError {}
