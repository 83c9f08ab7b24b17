#![allow(dead_code)] // Not every target uses every helper.

use arbitrary::Arbitrary;
use polycrc::{CrcModel, Lanes, width_mask};

/// Raw model parameters; any combination maps to a valid model.
#[derive(Arbitrary, Debug, Clone, Copy)]
pub struct RawModel {
  width: u8,
  poly: u64,
  init: u64,
  refin: bool,
  refout: bool,
  xor_out: u64,
}

impl RawModel {
  pub fn model(self) -> CrcModel {
    let width = u32::from(self.width % 64) + 1;
    let mask = width_mask(width);
    match CrcModel::new(width, self.poly & mask, self.init & mask, self.refin, self.refout, self.xor_out & mask) {
      Ok(model) => model,
      Err(e) => panic!("masked parameters must be valid: {e}"),
    }
  }
}

#[derive(Arbitrary, Debug, Clone, Copy)]
pub enum RawLanes {
  Bytewise,
  Slice8,
  Slice16,
}

impl From<RawLanes> for Lanes {
  fn from(raw: RawLanes) -> Self {
    match raw {
      RawLanes::Bytewise => Lanes::Bytewise,
      RawLanes::Slice8 => Lanes::Slice8,
      RawLanes::Slice16 => Lanes::Slice16,
    }
  }
}

/// Cut `data` at the (normalized, sorted) split points.
pub fn chunks<'a>(data: &'a [u8], splits: &[usize]) -> Vec<&'a [u8]> {
  let mut splits: Vec<usize> = splits.iter().map(|s| s % (data.len() + 1)).collect();
  splits.sort_unstable();
  splits.dedup();

  let mut out = Vec::new();
  let mut prev = 0;
  for split in splits {
    if split > prev {
      out.push(&data[prev..split]);
      prev = split;
    }
  }
  out.push(&data[prev..]);
  out
}
