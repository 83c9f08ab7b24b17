//! Fuzz target for CRC combine operations.
//!
//! Combining the CRCs of arbitrary chunks in order must reproduce the CRC
//! of the whole input.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use polycrc::{Checksum, Combiner, DynCrc};

mod common;

#[derive(Arbitrary, Debug)]
struct Input {
  model: common::RawModel,
  data: Vec<u8>,
  splits: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let model = input.model.model();
  let engine = DynCrc::new(&model);
  let combiner = Combiner::new(&model);
  let expected = engine.checksum_of(&input.data);

  let chunks = common::chunks(&input.data, &input.splits);
  let combined = chunks
    .iter()
    .fold(combiner.empty_crc(), |acc, chunk| combiner.combine(acc, engine.checksum_of(chunk), chunk.len() as u64));

  assert_eq!(combined, expected, "{model:?} combine chain mismatch over {} chunks", chunks.len());
});
