//! Differential fuzzing against crc-fast.
//!
//! Catalogue models shared by both crates must agree on checksums and on
//! combine.

#![no_main]

use arbitrary::Arbitrary;
use crc_fast::CrcAlgorithm;
use libfuzzer_sys::fuzz_target;
use polycrc::{Checksum, Combiner, CrcModel, DynCrc};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split: usize,
}

const MODELS: [(CrcAlgorithm, u32, u64, u64, u64); 4] = [
  (CrcAlgorithm::Crc32IsoHdlc, 32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF),
  (CrcAlgorithm::Crc32Iscsi, 32, 0x1EDC_6F41, 0xFFFF_FFFF, 0xFFFF_FFFF),
  (CrcAlgorithm::Crc64Xz, 64, 0x42F0_E1EB_A9EA_3693, u64::MAX, u64::MAX),
  (CrcAlgorithm::Crc64Nvme, 64, 0xAD93_D235_94C9_3659, u64::MAX, u64::MAX),
];

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split % (data.len() + 1);
  let (a, b) = data.split_at(split);

  for (alg, width, poly, init, xor_out) in MODELS {
    let model = match CrcModel::new(width, poly, init, true, true, xor_out) {
      Ok(model) => model,
      Err(e) => panic!("catalogue model rejected: {e}"),
    };
    let ours = DynCrc::new(&model).checksum_of(data);
    let reference = crc_fast::checksum(alg, data);
    assert_eq!(
      ours, reference,
      "{alg:?} differential mismatch: ours={ours:#018x}, reference={reference:#018x}, len={}",
      data.len()
    );

    let combined = Combiner::new(&model).combine(crc_fast::checksum(alg, a), crc_fast::checksum(alg, b), b.len() as u64);
    assert_eq!(combined, reference, "{alg:?} combine mismatch at split {split}/{}", data.len());
  }
});
