//! Core checksum traits for polycrc.
//!
//! This crate provides the foundational traits that every polycrc engine
//! conforms to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Implementors |
//! |-------|---------|--------------|
//! | [`Checksum`] | Incremental checksum state | CRC engines, width adapters |
//! | [`ChecksumCombine`] | O(log n) combination of finished checksums | GF(2) combiners |
//!
//! Unlike fixed-algorithm hashers, polycrc engines are parameterized at
//! runtime by a CRC model, so both traits are object-safe and work on
//! instances rather than on associated constructors.
//!
//! # Error Types
//!
//! - [`RangeError`] - a buffer sub-range fell outside the buffer
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;

pub use checksum::{Checksum, ChecksumCombine};
pub use error::RangeError;
