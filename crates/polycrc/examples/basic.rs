//! Computing CRCs for catalogue models.
//!
//! Run with: `cargo run --example basic -p polycrc`

use polycrc::{Checksum, Crc, CrcModel, DynCrc, Lanes, ModelError};

fn main() -> Result<(), ModelError> {
  println!("=== Basic CRC Examples ===\n");

  one_shot()?;
  streaming()?;
  odd_widths()?;
  lane_choice()?;
  Ok(())
}

fn one_shot() -> Result<(), ModelError> {
  println!("--- One-Shot ---\n");

  let crc32 = CrcModel::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF)?;
  let engine = Crc::<u32>::new(&crc32)?;
  let value = engine.checksum_of(b"123456789");
  println!("CRC-32/ISO-HDLC(\"123456789\") = 0x{value:08X}");
  assert_eq!(value, 0xCBF4_3926);

  let crc64 = CrcModel::new(64, 0x42F0_E1EB_A9EA_3693, u64::MAX, true, true, u64::MAX)?;
  let engine = Crc::<u64>::new(&crc64)?;
  let value = engine.checksum_of(b"123456789");
  println!("CRC-64/XZ(\"123456789\")       = 0x{value:016X}\n");
  assert_eq!(value, 0x995D_C9BB_DF19_39FA);
  Ok(())
}

fn streaming() -> Result<(), ModelError> {
  println!("--- Streaming ---\n");

  // CRC-16/IBM-3740
  let model = CrcModel::new(16, 0x1021, 0xFFFF, false, false, 0)?;
  let mut crc = Crc::<u32>::new(&model)?;
  for chunk in [&b"1234"[..], b"5", b"6789"] {
    crc.update(chunk);
    println!("after {:?}: 0x{:04X}", core::str::from_utf8(chunk).unwrap_or("?"), crc.value());
  }
  assert_eq!(crc.value(), 0x29B1);

  // Pick up where a previous run stopped.
  let mut resumed = crc.fresh();
  resumed.resume(Crc::<u32>::new(&model)?.checksum_of(b"1234"));
  resumed.update(b"56789");
  assert_eq!(resumed.value(), 0x29B1);
  println!("resumed: 0x{:04X}\n", resumed.value());
  Ok(())
}

fn odd_widths() -> Result<(), ModelError> {
  println!("--- Odd Widths ---\n");

  let models = [
    ("CRC-3/GSM", CrcModel::new(3, 0x3, 0, false, false, 0x7)?, 0x4),
    ("CRC-5/USB", CrcModel::new(5, 0x05, 0x1F, true, true, 0x1F)?, 0x19),
    ("CRC-12/UMTS", CrcModel::new(12, 0x80F, 0, false, true, 0)?, 0xDAF),
    ("CRC-40/GSM", CrcModel::new(40, 0x00_0482_0009, 0, false, false, 0xFF_FFFF_FFFF)?, 0xD4_164F_C646),
  ];
  for (name, model, check) in models {
    let crc = DynCrc::new(&model);
    let value = crc.checksum_of(b"123456789");
    println!("{name:<12} width={:>2} register=u{} -> 0x{value:X}", model.width(), crc.register_bits());
    assert_eq!(value, check);
  }
  println!();
  Ok(())
}

fn lane_choice() -> Result<(), ModelError> {
  println!("--- Lane Choice ---\n");

  let model = CrcModel::new(32, 0x1EDC_6F41, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF)?;
  let data: Vec<u8> = (0..4096u32).map(|i| (i * 7) as u8).collect();
  let expected = DynCrc::with_lanes(&model, Lanes::Bytewise).checksum_of(&data);
  for lanes in [Lanes::Bytewise, Lanes::Slice8, Lanes::Slice16] {
    let crc = DynCrc::with_lanes(&model, lanes);
    let value = crc.checksum_of(&data);
    println!("{:<28} 0x{value:08X}", crc.kernel_name());
    assert_eq!(value, expected);
  }
  println!("default: {}", DynCrc::new(&model).kernel_name());
  Ok(())
}
