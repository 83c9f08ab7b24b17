//! Property-based tests over randomly generated CRC models.
//!
//! Every engine family is checked against the bit-at-a-time reference, and
//! the combiner against direct computation, for arbitrary widths, polynomials
//! and reflection settings.

use polycrc::{Checksum, Combiner, Crc, CrcModel, DynCrc, Lanes, reference::bitwise, width_mask};
use proptest::prelude::*;

// Test Strategies

/// Any valid model with a width in `widths`.
fn arb_model_in(widths: core::ops::RangeInclusive<u32>) -> impl Strategy<Value = CrcModel> {
  (widths, any::<u64>(), any::<u64>(), any::<bool>(), any::<bool>(), any::<u64>()).prop_map(
    |(width, poly, init, refin, refout, xor_out)| {
      let mask = width_mask(width);
      CrcModel::new(width, (poly & mask) | 1, init & mask, refin, refout, xor_out & mask).unwrap()
    },
  )
}

fn arb_model() -> impl Strategy<Value = CrcModel> {
  arb_model_in(1..=64)
}

/// Any valid model that fits a `u32` register.
fn arb_narrow_model() -> impl Strategy<Value = CrcModel> {
  arb_model_in(1..=32)
}

fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..1024)
}

fn arb_lanes() -> impl Strategy<Value = Lanes> {
  prop_oneof![Just(Lanes::Bytewise), Just(Lanes::Slice8), Just(Lanes::Slice16)]
}

// Engines

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn dyn_matches_reference(model in arb_model(), lanes in arb_lanes(), data in arb_data()) {
    let crc = DynCrc::with_lanes(&model, lanes);
    prop_assert_eq!(crc.checksum_of(&data), bitwise(&model, &data));
  }

  #[test]
  fn lanes_agree(model in arb_model(), data in arb_data()) {
    let bytewise = DynCrc::with_lanes(&model, Lanes::Bytewise).checksum_of(&data);
    prop_assert_eq!(DynCrc::with_lanes(&model, Lanes::Slice8).checksum_of(&data), bytewise);
    prop_assert_eq!(DynCrc::with_lanes(&model, Lanes::Slice16).checksum_of(&data), bytewise);
  }

  #[test]
  fn u32_and_u64_registers_agree(model in arb_narrow_model(), data in arb_data()) {
    let narrow = Crc::<u32, 8>::new(&model).unwrap();
    let wide = Crc::<u64, 16>::new(&model).unwrap();
    prop_assert_eq!(u64::from(narrow.checksum_of(&data)), wide.checksum_of(&data));
  }

  #[test]
  fn incremental_equals_oneshot(model in arb_model(), data in arb_data(), split in 0usize..1024) {
    let split = split.min(data.len());
    let (a, b) = data.split_at(split);

    let mut crc = DynCrc::with_lanes(&model, Lanes::Slice16);
    let oneshot = crc.checksum_of(&data);
    crc.update(a);
    crc.update(b);
    prop_assert_eq!(crc.value(), oneshot);
  }

  #[test]
  fn resume_equals_continue(model in arb_model(), data in arb_data(), split in 0usize..1024) {
    let split = split.min(data.len());
    let (a, b) = data.split_at(split);

    let proto = DynCrc::with_lanes(&model, Lanes::Slice8);
    let mut resumed = proto.clone();
    resumed.resume(proto.checksum_of(a));
    resumed.update(b);
    prop_assert_eq!(resumed.value(), proto.checksum_of(&data));
  }

  #[test]
  fn update_range_equals_subslice(
    model in arb_model(),
    data in arb_data(),
    offset in 0usize..1024,
    len in 0usize..1024
  ) {
    let mut crc = DynCrc::new(&model);
    let result = crc.update_range(&data, offset, len);
    if offset.checked_add(len).is_some_and(|end| end <= data.len()) {
      prop_assert!(result.is_ok());
      prop_assert_eq!(crc.value(), bitwise(&model, &data[offset..offset + len]));
    } else {
      prop_assert!(result.is_err());
      prop_assert_eq!(crc.value(), bitwise(&model, &[]));
    }
  }
}

// Combiner

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn combine_equals_concatenation(model in arb_model(), data in arb_data(), split in 0usize..1024) {
    let split = split.min(data.len());
    let (a, b) = data.split_at(split);

    let combiner = Combiner::new(&model);
    let combined = combiner.combine(bitwise(&model, a), bitwise(&model, b), b.len() as u64);
    prop_assert_eq!(combined, bitwise(&model, &data));
  }

  #[test]
  fn combine_is_associative(
    model in arb_model(),
    a in prop::collection::vec(any::<u8>(), 0..64),
    b in prop::collection::vec(any::<u8>(), 0..64),
    c in prop::collection::vec(any::<u8>(), 0..64)
  ) {
    let combiner = Combiner::new(&model);
    let (ca, cb, cc) = (bitwise(&model, &a), bitwise(&model, &b), bitwise(&model, &c));
    let (lb, lc) = (b.len() as u64, c.len() as u64);

    let left = combiner.combine(combiner.combine(ca, cb, lb), cc, lc);
    let right = combiner.combine(ca, combiner.combine(cb, cc, lc), lb + lc);
    prop_assert_eq!(left, right);
  }

  #[test]
  fn change_seed_equals_recompute(
    model in arb_model(),
    data in arb_data(),
    old_init in any::<u64>(),
    new_init in any::<u64>()
  ) {
    let mask = model.mask();
    let old_model = model.with_init(old_init & mask).unwrap();
    let new_model = model.with_init(new_init & mask).unwrap();

    let combiner = Combiner::new(&model);
    let old_start = combiner.start_value(old_model.init());
    let new_start = combiner.start_value(new_model.init());
    prop_assert_eq!(old_start, bitwise(&old_model, &[]));
    prop_assert_eq!(new_start, bitwise(&new_model, &[]));

    let reseeded = combiner.change_seed(bitwise(&old_model, &data), data.len() as u64, old_start, new_start);
    prop_assert_eq!(reseeded, bitwise(&new_model, &data));
  }

  #[test]
  fn zeroes_equals_recompute(model in arb_model(), len in 0usize..2048, init in any::<u64>()) {
    let seeded = model.with_init(init & model.mask()).unwrap();
    let combiner = Combiner::new(&model);
    let start = combiner.start_value(seeded.init());
    prop_assert_eq!(combiner.zeroes_crc(len as u64, start), bitwise(&seeded, &vec![0u8; len]));
  }
}
