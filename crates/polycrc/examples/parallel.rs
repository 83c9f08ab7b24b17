//! Parallel CRC computation using the GF(2) combiner.
//!
//! Given crc(A) and crc(B), crc(A || B) follows in O(log len(B)) without
//! touching the data again, so chunks can be checksummed independently.
//!
//! Run with: `cargo run --example parallel -p polycrc`

use std::thread;

use polycrc::{Checksum, Combiner, CrcModel, DynCrc, ModelError};

fn main() -> Result<(), ModelError> {
  println!("=== Parallel CRC Examples ===\n");

  // CRC-64/XZ
  let model = CrcModel::new(64, 0x42F0_E1EB_A9EA_3693, u64::MAX, true, true, u64::MAX)?;
  let engine = DynCrc::new(&model);
  let combiner = Combiner::new(&model);

  combine_basics(&engine, &combiner);
  threaded(&engine, &combiner);
  reseed_and_zeroes()?;
  Ok(())
}

fn combine_basics(engine: &DynCrc, combiner: &Combiner) {
  println!("--- Combine Basics ---\n");

  let data = b"hello world";
  let (part_a, part_b) = data.split_at(6);

  let crc_a = engine.checksum_of(part_a);
  let crc_b = engine.checksum_of(part_b);
  let combined = combiner.combine(crc_a, crc_b, part_b.len() as u64);
  let expected = engine.checksum_of(data);

  println!("Part A (\"hello \"): 0x{crc_a:016X}");
  println!("Part B (\"world\"):  0x{crc_b:016X}");
  println!("Combined:           0x{combined:016X}");
  assert_eq!(combined, expected);
  println!("Match!\n");
}

fn threaded(engine: &DynCrc, combiner: &Combiner) {
  println!("--- Multi-Threaded ---\n");

  let data: Vec<u8> = (0..4_000_000u32).map(|i| ((i * 17) % 256) as u8).collect();
  let num_threads = 4;
  let chunk_size = data.len().div_ceil(num_threads);

  let sequential = engine.checksum_of(&data);
  println!("Sequential: 0x{sequential:016X}");

  // Each thread gets a reset copy sharing the same tables.
  let results: Vec<(u64, usize)> = thread::scope(|s| {
    let handles: Vec<_> = data
      .chunks(chunk_size)
      .map(|chunk| {
        let engine = engine.clone();
        s.spawn(move || (engine.checksum_of(chunk), chunk.len()))
      })
      .collect();
    handles.into_iter().map(|h| h.join().expect("thread panicked")).collect()
  });

  let combined = results
    .iter()
    .skip(1)
    .fold(results[0].0, |acc, &(crc, len)| combiner.combine(acc, crc, len as u64));

  println!("Threaded:   0x{combined:016X}");
  assert_eq!(sequential, combined);
  println!("Match! (used {num_threads} threads)\n");
}

fn reseed_and_zeroes() -> Result<(), ModelError> {
  println!("--- Seeds and Zero Runs ---\n");

  // CRC-32/ISO-HDLC against the same polynomial started from zero.
  let model = CrcModel::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF)?;
  let zero_init = model.with_init(0)?;
  let combiner = Combiner::new(&model);

  let data = b"123456789";
  let crc = DynCrc::new(&model).checksum_of(data);
  let reseeded = combiner.change_seed(crc, data.len() as u64, combiner.empty_crc(), combiner.start_value(0));
  println!("crc with init=0xFFFFFFFF: 0x{crc:08X}");
  println!("reseeded to init=0:       0x{reseeded:08X}");
  assert_eq!(reseeded, DynCrc::new(&zero_init).checksum_of(data));

  let zeroes = combiner.zeroes_crc(1 << 20, combiner.empty_crc());
  println!("crc of 1 MiB of zeroes:   0x{zeroes:08X}");
  assert_eq!(zeroes, DynCrc::new(&model).checksum_of(&vec![0u8; 1 << 20]));

  println!("residue:                  0x{:08X}", combiner.residue());
  Ok(())
}
