//! Common building blocks shared by every engine.
//!
//! - Lookup table generation for any register width and bit order
//! - Portable byte-wise / slice-by-N / bit-at-a-time kernels
//! - The bitwise reference CRC used as a test oracle

pub(crate) mod portable;
pub mod reference;
pub mod tables;
