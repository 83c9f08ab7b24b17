#![allow(dead_code)] // Not every bench uses every helper.

use std::sync::Once;

use polycrc::{CrcModel, config};

pub const CASES: &[(&str, usize)] = &[("xs", 64), ("s", 256), ("m", 4 * 1024), ("l", 64 * 1024), ("xl", 1024 * 1024)];

/// Models covering both bit orders and both register families.
pub fn models() -> [(&'static str, CrcModel); 6] {
  let model = |width, poly, init, refin, refout, xor_out| match CrcModel::new(width, poly, init, refin, refout, xor_out) {
    Ok(m) => m,
    Err(e) => panic!("bench model is invalid: {e}"),
  };
  [
    ("crc16/arc", model(16, 0x8005, 0, true, true, 0)),
    ("crc24/openpgp", model(24, 0x86_4CFB, 0xB7_04CE, false, false, 0)),
    ("crc32/iso-hdlc", model(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF)),
    ("crc32/bzip2", model(32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0xFFFF_FFFF)),
    ("crc40/gsm", model(40, 0x00_0482_0009, 0, false, false, 0xFF_FFFF_FFFF)),
    ("crc64/xz", model(64, 0x42F0_E1EB_A9EA_3693, u64::MAX, true, true, u64::MAX)),
  ]
}

#[must_use]
pub fn make_data(len: usize) -> Vec<u8> {
  (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add((i >> 8) as u8)).collect()
}

/// Print the effective configuration once at benchmark start.
pub fn print_config_info() {
  static ONCE: Once = Once::new();
  ONCE.call_once(|| {
    let cfg = config::get();
    eprintln!("╔══════════════════════════════════════════════════════════════╗");
    eprintln!("║                      CRC ENGINE CONFIG                       ║");
    eprintln!("╠══════════════════════════════════════════════════════════════╣");
    eprintln!("║ Requested force: {}", cfg.requested_force.as_str());
    eprintln!("║ Dynamic lanes: {}", cfg.lanes.as_str());
    eprintln!("╚══════════════════════════════════════════════════════════════╝");
  });
}
