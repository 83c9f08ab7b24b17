//! Error types shared by checksum implementations.
//!
//! Individual crates may define additional errors as needed.

use core::fmt;

/// A buffer sub-range was out of bounds.
///
/// Returned by range-based update methods when `offset + len` does not fit
/// inside the buffer (or overflows `usize`). No bytes are processed when this
/// error is returned.
///
/// # Examples
///
/// ```
/// use traits::RangeError;
///
/// fn sub(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], RangeError> {
///   offset
///     .checked_add(len)
///     .and_then(|end| buf.get(offset..end))
///     .ok_or(RangeError::new(offset, len, buf.len()))
/// }
///
/// assert!(sub(b"abc", 1, 2).is_ok());
/// assert_eq!(sub(b"abc", 2, 2), Err(RangeError::new(2, 2, 3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct RangeError {
  /// Requested start offset.
  pub offset: usize,
  /// Requested length.
  pub len: usize,
  /// Length of the buffer the range was applied to.
  pub available: usize,
}

impl RangeError {
  /// Create a new range error.
  #[inline]
  #[must_use]
  pub const fn new(offset: usize, len: usize, available: usize) -> Self {
    Self { offset, len, available }
  }

  /// Resolve `offset..offset + len` against `buf`.
  ///
  /// # Errors
  ///
  /// Returns [`RangeError`] when the range does not lie inside `buf`.
  #[inline]
  pub fn slice(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], Self> {
    offset.checked_add(len).and_then(|end| buf.get(offset..end)).ok_or(Self::new(offset, len, buf.len()))
  }
}

impl fmt::Display for RangeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "range {}+{} out of bounds for buffer of length {}",
      self.offset, self.len, self.available
    )
  }
}

impl core::error::Error for RangeError {}
