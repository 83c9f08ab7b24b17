//! Non-cryptographic checksum traits.
//!
//! - **Streaming**: incremental updates over arbitrary splits of the input
//! - **Runtime models**: state carries its own parameters, so every method
//!   takes `&self` / `&mut self`
//! - **Parallelism**: combine finished checksums of adjacent chunks

use core::fmt::Debug;

/// Incremental checksum state.
///
/// # Usage
///
/// ```rust,ignore
/// use polycrc::{Checksum, Crc, CrcModel};
///
/// let model = CrcModel::new(32, 0x04C1_1DB7, !0, true, true, !0)?;
/// let mut crc = Crc::<u32>::new(&model)?;
/// crc.update(b"hello ");
/// crc.update(b"world");
/// let value = crc.finalize();
/// ```
///
/// # Implementor Requirements
///
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the state to the one it was constructed with
/// - splitting the input across `update` calls must not change the result
pub trait Checksum {
  /// The checksum output type (`u32` or `u64` for CRC engines).
  type Output: Copy + Eq + Debug;

  /// Update the state with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the state with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the state with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything processed so far.
  ///
  /// This method does not consume or modify the state, so further updates
  /// may follow.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the state to its initial value.
  fn reset(&mut self);

  /// Compute the checksum of `data` from a reset copy of this state.
  ///
  /// `self` is left untouched.
  #[inline]
  #[must_use]
  fn checksum_of(&self, data: &[u8]) -> Self::Output
  where
    Self: Clone,
  {
    let mut h = self.clone();
    h.reset();
    h.update(data);
    h.finalize()
  }
}

/// Checksums that support combination of independently computed parts.
///
/// The combine operation computes `crc(A || B)` from `crc(A)`, `crc(B)`, and
/// `len(B)` in O(log n) time:
///
/// ```text
/// crc(A || B) = (crc(A) ^ crc(empty)) * x^(8*len(B)) mod G(x) ^ crc(B)
/// ```
///
/// This enables parallel checksum computation:
///
/// 1. Split data into chunks
/// 2. Compute checksums independently
/// 3. Fold the results left to right with `combine`
pub trait ChecksumCombine {
  /// The checksum value type being combined.
  type Output: Copy + Eq + Debug;

  /// Combine two checksums.
  ///
  /// # Arguments
  ///
  /// * `crc_a` - Checksum of the first part (A)
  /// * `crc_b` - Checksum of the second part (B)
  /// * `len_b` - Length of the second part in bytes
  #[must_use]
  fn combine(&self, crc_a: Self::Output, crc_b: Self::Output, len_b: u64) -> Self::Output;
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Byte-sum toy checksum: good enough to exercise the provided methods.
  #[derive(Clone, Debug)]
  struct Sum(u32);

  impl Checksum for Sum {
    type Output = u32;

    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
    }

    fn finalize(&self) -> u32 {
      self.0
    }

    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  #[test]
  fn vectored_matches_sequential() {
    let mut a = Sum(0);
    a.update_vectored(&[b"ab", b"", b"cde"]);

    let mut b = Sum(0);
    b.update(b"abcde");

    assert_eq!(a.finalize(), b.finalize());
  }

  #[test]
  fn checksum_of_leaves_state_alone() {
    let mut h = Sum(0);
    h.update(b"xyz");
    let before = h.finalize();

    assert_eq!(h.checksum_of(b"\x01\x02"), 3);
    assert_eq!(h.finalize(), before);
  }

  #[cfg(feature = "std")]
  #[test]
  fn io_slices_match_sequential() {
    let bufs = [std::io::IoSlice::new(b"12"), std::io::IoSlice::new(b"345")];
    let mut a = Sum(0);
    a.update_io_slices(&bufs);
    assert_eq!(a.finalize(), Sum(0).checksum_of(b"12345"));
  }
}
