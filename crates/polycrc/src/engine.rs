//! Native-width table-driven CRC engines.
//!
//! An [`Engine`] runs a CRC whose width equals its register (`u32` or `u64`).
//! Narrower models go through [`crate::Crc`], which pre-shifts the parameters
//! and drives an engine underneath.
//!
//! # Kernel Selection
//!
//! The bit order is fixed per model, so the reflected/unreflected kernel is
//! chosen once in [`Engine::new`] and stored as a set of function pointers.
//! The update loop itself never branches on `refin`.
//!
//! | Lanes | Kernel name (reflected) | Kernel name (unreflected) |
//! |-------|-------------------------|---------------------------|
//! | 1 | `portable/bytewise-reflected` | `portable/bytewise-unreflected` |
//! | 8 | `portable/slice8-reflected` | `portable/slice8-unreflected` |
//! | 16 | `portable/slice16-reflected` | `portable/slice16-unreflected` |
//!
//! # Sharing
//!
//! Tables live behind an [`Arc`] and are immutable after construction;
//! cloning an engine (or calling [`Engine::fresh`]) shares them. Each engine
//! owns its register, so clones can run on different threads.

use alloc::sync::Arc;
use core::fmt;

use traits::{Checksum, RangeError};

use crate::{
  common::{
    portable::{bits_reflected, bits_unreflected, byte_reflected, byte_unreflected, slice_reflected, slice_unreflected},
    tables::build_lane_tables,
  },
  register::Register,
};

// ─────────────────────────────────────────────────────────────────────────────
// Kernel names
// ─────────────────────────────────────────────────────────────────────────────

pub const BYTEWISE_REFLECTED: &str = "portable/bytewise-reflected";
pub const BYTEWISE_UNREFLECTED: &str = "portable/bytewise-unreflected";
pub const SLICE8_REFLECTED: &str = "portable/slice8-reflected";
pub const SLICE8_UNREFLECTED: &str = "portable/slice8-unreflected";
pub const SLICE16_REFLECTED: &str = "portable/slice16-reflected";
pub const SLICE16_UNREFLECTED: &str = "portable/slice16-unreflected";

#[inline]
const fn kernel_name(lanes: usize, refin: bool) -> &'static str {
  match (lanes, refin) {
    (1, true) => BYTEWISE_REFLECTED,
    (1, false) => BYTEWISE_UNREFLECTED,
    (8, true) => SLICE8_REFLECTED,
    (8, false) => SLICE8_UNREFLECTED,
    (_, true) => SLICE16_REFLECTED,
    (_, false) => SLICE16_UNREFLECTED,
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Kernel
// ─────────────────────────────────────────────────────────────────────────────

type ByteFn<R> = fn(R, u8, &[R; 256]) -> R;
type UpdateFn<R, const LANES: usize> = fn(R, &[u8], &[[R; 256]; LANES]) -> R;
type BitsFn<R> = fn(R, u8, u32, R) -> R;

/// Bit-order specific update functions, selected once per engine.
#[derive(Clone, Copy)]
struct Kernel<R: Register, const LANES: usize> {
  name: &'static str,
  byte: ByteFn<R>,
  update: UpdateFn<R, LANES>,
  bits: BitsFn<R>,
}

impl<R: Register, const LANES: usize> Kernel<R, LANES> {
  fn select(refin: bool) -> Self {
    if refin {
      Self {
        name: kernel_name(LANES, true),
        byte: byte_reflected::<R>,
        update: slice_reflected::<R, LANES>,
        bits: bits_reflected::<R>,
      }
    } else {
      Self {
        name: kernel_name(LANES, false),
        byte: byte_unreflected::<R>,
        update: slice_unreflected::<R, LANES>,
        bits: bits_unreflected::<R>,
      }
    }
  }
}

impl<R: Register, const LANES: usize> fmt::Debug for Kernel<R, LANES> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine
// ─────────────────────────────────────────────────────────────────────────────

/// A CRC engine whose width equals its register width.
///
/// `LANES` selects the table strategy: 1 (byte-wise), 8 (slice-by-8) or
/// 16 (slice-by-16). Any other value is rejected at compile time.
///
/// All parameters are given in natural notation, aligned to the top of the
/// register, exactly as [`crate::Crc`] passes them down.
///
/// # Example
///
/// ```rust
/// use polycrc::{Checksum, Crc32Slice8};
///
/// let mut crc = Crc32Slice8::new(0x04C1_1DB7, !0, true, true, !0);
/// crc.update(b"1234");
/// crc.update(b"56789");
/// assert_eq!(crc.value(), 0xCBF4_3926);
/// assert_eq!(crc.finalize(), 0xCBF4_3926);
/// ```
#[derive(Clone)]
pub struct Engine<R: Register, const LANES: usize = 16> {
  tables: Arc<[[R; 256]; LANES]>,
  kernel: Kernel<R, LANES>,
  /// Polynomial in register order (reflected when `refin`).
  poly: R,
  /// Register value after `reset`.
  start: R,
  /// `refin != refout`: reverse the register on output.
  reflect_out: bool,
  xor_out: R,
  state: R,
}

/// 32-bit register, byte-wise.
pub type Crc32Bytewise = Engine<u32, 1>;
/// 32-bit register, slice-by-8.
pub type Crc32Slice8 = Engine<u32, 8>;
/// 32-bit register, slice-by-16.
pub type Crc32Slice16 = Engine<u32, 16>;
/// 64-bit register, byte-wise.
pub type Crc64Bytewise = Engine<u64, 1>;
/// 64-bit register, slice-by-8.
pub type Crc64Slice8 = Engine<u64, 8>;
/// 64-bit register, slice-by-16.
pub type Crc64Slice16 = Engine<u64, 16>;

impl<R: Register, const LANES: usize> Engine<R, LANES> {
  /// Build the lookup tables and return a reset engine.
  ///
  /// # Arguments
  ///
  /// * `poly` - Generator polynomial, natural notation
  /// * `init` - Initial register value, natural notation
  /// * `refin` - Process input bytes least significant bit first
  /// * `refout` - Reflect the register before the final XOR
  /// * `xor_out` - Final XOR value
  #[must_use]
  pub fn new(poly: R, init: R, refin: bool, refout: bool, xor_out: R) -> Self {
    const { assert!(matches!(LANES, 1 | 8 | 16), "engines support 1, 8 or 16 lanes") };

    let kernel = Kernel::select(refin);
    #[cfg(feature = "tracing")]
    tracing::trace!(kernel = kernel.name, register_bits = R::BITS, "building crc lookup tables");

    let start = if refin { init.reverse_bits() } else { init };
    Self {
      tables: Arc::new(build_lane_tables::<R, LANES>(poly, refin)),
      kernel,
      poly: if refin { poly.reverse_bits() } else { poly },
      start,
      reflect_out: refin != refout,
      xor_out,
      state: start,
    }
  }

  /// A reset engine sharing this engine's tables.
  #[inline]
  #[must_use]
  pub fn fresh(&self) -> Self {
    let mut engine = self.clone();
    engine.reset();
    engine
  }

  /// Restore the register to the initial value.
  #[inline]
  pub fn reset(&mut self) {
    self.state = self.start;
  }

  /// Process a single byte.
  #[inline]
  #[allow(clippy::indexing_slicing)] // LANES >= 1 is asserted in `new`
  pub fn update_byte(&mut self, byte: u8) {
    self.state = (self.kernel.byte)(self.state, byte, &self.tables[0]);
  }

  /// Process a buffer.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    if data.is_empty() {
      return;
    }
    self.state = (self.kernel.update)(self.state, data, &self.tables);
  }

  /// Process `buf[offset..offset + len]`.
  ///
  /// # Errors
  ///
  /// [`RangeError`] if the range does not lie inside `buf`; the register is
  /// left untouched.
  #[inline]
  pub fn update_range(&mut self, buf: &[u8], offset: usize, len: usize) -> Result<(), RangeError> {
    let data = RangeError::slice(buf, offset, len)?;
    self.update(data);
    Ok(())
  }

  /// The CRC of everything processed since the last reset.
  ///
  /// Pure: updates may continue afterwards.
  #[inline]
  #[must_use]
  pub fn value(&self) -> R {
    let out = if self.reflect_out { self.state.reverse_bits() } else { self.state };
    out ^ self.xor_out
  }

  /// Continue from a previously finalized `crc`.
  ///
  /// Afterwards [`value`](Self::value) returns `crc`, and further updates
  /// behave as if the data that produced it had just been processed.
  #[inline]
  pub fn resume(&mut self, crc: R) {
    let raw = crc ^ self.xor_out;
    self.state = if self.reflect_out { raw.reverse_bits() } else { raw };
  }

  /// Name of the kernel selected at construction.
  #[inline]
  #[must_use]
  pub fn kernel_name(&self) -> &'static str {
    self.kernel.name
  }
}

impl<R: Register> Engine<R, 1> {
  /// Process the next `bits` bits of `value` (at most 8).
  ///
  /// Reflected models take bits from bit 0 upward; unreflected models from
  /// bit 7 downward. Larger `bits` counts are clamped to 8.
  #[inline]
  pub fn update_bits(&mut self, value: u8, bits: u32) {
    self.state = (self.kernel.bits)(self.state, value, bits.min(8), self.poly);
  }
}

impl<R: Register, const LANES: usize> fmt::Debug for Engine<R, LANES> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Engine")
      .field("kernel", &self.kernel)
      .field("state", &format_args!("{:#x}", self.state))
      .finish_non_exhaustive()
  }
}

impl<R: Register, const LANES: usize> Checksum for Engine<R, LANES> {
  type Output = R;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Engine::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> R {
    self.value()
  }

  #[inline]
  fn reset(&mut self) {
    Engine::reset(self);
  }
}
