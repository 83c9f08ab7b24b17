//! Native CRC register types.
//!
//! Engines are generic over the machine word that holds the CRC register.
//! Only `u32` and `u64` are supported; narrower models run on one of these
//! through the width adapter in [`crate::Crc`].

use core::{
  fmt::{Debug, LowerHex},
  hash::Hash,
  ops::{BitAnd, BitXor, BitXorAssign, Shl, Shr},
};

mod sealed {
  pub trait Sealed {}
  impl Sealed for u32 {}
  impl Sealed for u64 {}
}

/// A native CRC register (`u32` or `u64`).
///
/// This trait is sealed; it exists so table builders, kernels and engines
/// can be written once for both register widths.
pub trait Register:
  sealed::Sealed
  + Copy
  + Eq
  + Hash
  + Debug
  + LowerHex
  + Default
  + Send
  + Sync
  + 'static
  + BitXor<Output = Self>
  + BitXorAssign
  + BitAnd<Output = Self>
  + Shl<u32, Output = Self>
  + Shr<u32, Output = Self>
{
  /// Register width in bits.
  const BITS: u32;
  /// Register width in bytes.
  const BYTES: usize;
  /// All bits clear.
  const ZERO: Self;

  /// Truncate a `u64` to this register width.
  fn from_u64(value: u64) -> Self;

  /// Zero-extend to `u64`.
  fn to_u64(self) -> u64;

  /// Place `byte` in the least significant byte.
  fn from_byte(byte: u8) -> Self;

  /// Reverse the order of all `BITS` bits.
  fn reverse_bits(self) -> Self;

  /// Least significant byte.
  fn low_byte(self) -> u8;

  /// Byte `i`, counted from the least significant end.
  #[inline(always)]
  fn byte(self, i: usize) -> u8 {
    (self >> (8 * i as u32)).low_byte()
  }

  /// Most significant byte.
  #[inline(always)]
  fn top_byte(self) -> u8 {
    (self >> (Self::BITS - 8)).low_byte()
  }

  /// Whether the most significant bit is set.
  #[inline(always)]
  fn msb(self) -> bool {
    self.top_byte() & 0x80 != 0
  }
}

macro_rules! impl_register {
  ($($ty:ty),*) => {
    $(
      impl Register for $ty {
        const BITS: u32 = <$ty>::BITS;
        const BYTES: usize = core::mem::size_of::<$ty>();
        const ZERO: Self = 0;

        #[inline(always)]
        fn from_u64(value: u64) -> Self {
          value as $ty
        }

        #[inline(always)]
        fn to_u64(self) -> u64 {
          u64::from(self)
        }

        #[inline(always)]
        fn from_byte(byte: u8) -> Self {
          <$ty>::from(byte)
        }

        #[inline(always)]
        fn reverse_bits(self) -> Self {
          <$ty>::reverse_bits(self)
        }

        #[inline(always)]
        fn low_byte(self) -> u8 {
          self as u8
        }
      }
    )*
  };
}

impl_register!(u32, u64);
