//! GF(2) combiner benchmarks.
//!
//! Run: `cargo bench -p polycrc --bench combine`
//!
//! Combine, seed change and zero runs are all O(log n) in the length.

use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use polycrc::Combiner;

mod util;

const LENGTHS: [u64; 6] = [64, 256, 1024, 4096, 16384, 65536];

fn bench_combine(c: &mut Criterion) {
  for (name, model) in util::models() {
    let combiner = Combiner::new(&model);
    let mut group = c.benchmark_group(format!("combine/{name}"));

    for len in LENGTHS {
      group.throughput(Throughput::Elements(1));
      group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
        let crc_a = 0x1234_5678 & model.mask();
        let crc_b = 0x8765_4321 & model.mask();
        b.iter(|| black_box(combiner.combine(black_box(crc_a), black_box(crc_b), len)));
      });
    }
    group.finish();
  }
}

fn bench_change_seed(c: &mut Criterion) {
  let (_, model) = util::models()[2];
  let combiner = Combiner::new(&model);
  let old_start = combiner.empty_crc();
  let new_start = combiner.start_value(0);

  let mut group = c.benchmark_group("combine/change_seed");
  for len in LENGTHS {
    group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
      b.iter(|| black_box(combiner.change_seed(black_box(0xCBF4_3926), len, old_start, new_start)));
    });
  }
  group.finish();
}

fn bench_zeroes(c: &mut Criterion) {
  let (_, model) = util::models()[5];
  let combiner = Combiner::new(&model);
  let start = combiner.empty_crc();

  let mut group = c.benchmark_group("combine/zeroes");
  for len in LENGTHS {
    group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
      b.iter(|| black_box(combiner.zeroes_crc(black_box(len), start)));
    });
  }
  group.finish();
}

criterion_group!(benches, bench_combine, bench_change_seed, bench_zeroes);
criterion_main!(benches);
