//! Fuzz target for streaming updates.
//!
//! Chunked `update`, `update_range` and `resume` must all match one-shot.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use polycrc::{Checksum, DynCrc, Lanes};

mod common;

#[derive(Arbitrary, Debug)]
struct Input {
  model: common::RawModel,
  lanes: common::RawLanes,
  data: Vec<u8>,
  splits: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let model = input.model.model();
  let proto = DynCrc::with_lanes(&model, Lanes::from(input.lanes));
  let expected = proto.checksum_of(&input.data);

  let mut chunked = proto.clone();
  let mut ranged = proto.clone();
  let mut resumed = proto.clone();
  let mut offset = 0;
  for chunk in common::chunks(&input.data, &input.splits) {
    chunked.update(chunk);

    if let Err(e) = ranged.update_range(&input.data, offset, chunk.len()) {
      panic!("in-bounds range rejected: {e}");
    }
    offset += chunk.len();

    let so_far = resumed.value();
    resumed = proto.clone();
    resumed.resume(so_far);
    resumed.update(chunk);
  }

  assert_eq!(chunked.value(), expected, "{model:?} chunked update mismatch");
  assert_eq!(ranged.value(), expected, "{model:?} update_range mismatch");
  assert_eq!(resumed.value(), expected, "{model:?} resume chain mismatch");
});
