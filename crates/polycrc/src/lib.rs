//! Table-driven CRC engines for arbitrary CRC models.
//!
//! Any model of the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/)
//! can be computed: width 1 through 64, any polynomial, initial value, input
//! and output reflection, and final XOR.
//!
//! # Building Blocks
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`CrcModel`] | Validated model parameters |
//! | [`Engine`] | Native-width engine (`u32` / `u64` register), 1, 8 or 16 lanes |
//! | [`Crc`] | Any width up to the register size, on top of an [`Engine`] |
//! | [`DynCrc`] | Register and lane count chosen at runtime |
//! | [`Combiner`] | GF(2) combine, seed change, zero runs, residue |
//!
//! # Example
//!
//! ```rust
//! use polycrc::{Checksum, ChecksumCombine, Combiner, Crc, CrcModel};
//!
//! // CRC-32/ISO-HDLC
//! let model = CrcModel::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF)?;
//!
//! // One-shot computation
//! let mut crc = Crc::<u32>::new(&model)?;
//! let data = b"123456789";
//! assert_eq!(crc.checksum_of(data), 0xCBF4_3926);
//!
//! // Streaming computation
//! crc.update(b"1234");
//! crc.update(b"56789");
//! assert_eq!(crc.finalize(), 0xCBF4_3926);
//!
//! // Parallel combine
//! let combiner = Combiner::new(&model);
//! let (a, b) = data.split_at(4);
//! let crc_a = u64::from(crc.checksum_of(a));
//! let crc_b = u64::from(crc.checksum_of(b));
//! assert_eq!(ChecksumCombine::combine(&combiner, crc_a, crc_b, b.len() as u64), 0xCBF4_3926);
//! # Ok::<(), polycrc::ModelError>(())
//! ```
//!
//! # `no_std` Support
//!
//! This crate is `no_std` compatible (it needs `alloc` for shared tables).
//! Disable the `std` feature for embedded use; environment overrides in
//! [`config`] are then unavailable.
//!
//! ```toml
//! [dependencies]
//! polycrc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod combine;
pub mod common;
pub mod config;
mod dynamic;
mod engine;
mod error;
mod generic;
mod model;
mod register;

pub use combine::Combiner;
pub use common::{reference, tables};
pub use config::{Config, LaneForce, Lanes};
pub use dynamic::DynCrc;
pub use engine::{Crc32Bytewise, Crc32Slice8, Crc32Slice16, Crc64Bytewise, Crc64Slice8, Crc64Slice16, Engine};
pub use error::{ModelError, ModelField};
pub use generic::{Crc, Crc32Generic, Crc64Generic};
pub use model::{CrcModel, reflect_bits, width_mask};
pub use register::Register;
pub use traits::{Checksum, ChecksumCombine, RangeError};

/// Kernel names reported by [`Engine::kernel_name`].
pub mod kernels {
  pub use crate::engine::{
    BYTEWISE_REFLECTED, BYTEWISE_UNREFLECTED, SLICE8_REFLECTED, SLICE8_UNREFLECTED, SLICE16_REFLECTED,
    SLICE16_UNREFLECTED,
  };
}
