//! Fuzz target for the table-driven engines.
//!
//! Every lane count must agree with the bit-at-a-time reference for any
//! model and input.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use polycrc::{Checksum, DynCrc, Lanes, reference::bitwise};

mod common;

#[derive(Arbitrary, Debug)]
struct Input {
  model: common::RawModel,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let model = input.model.model();
  let expected = bitwise(&model, &input.data);

  for lanes in [Lanes::Bytewise, Lanes::Slice8, Lanes::Slice16] {
    let ours = DynCrc::with_lanes(&model, lanes).checksum_of(&input.data);
    assert_eq!(
      ours,
      expected,
      "{model:?} {lanes:?} mismatch: ours={ours:#x}, reference={expected:#x}, len={}",
      input.data.len()
    );
  }
});
