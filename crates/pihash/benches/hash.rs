//! Throughput benchmarks for the four hash widths.
//!
//! Run: `cargo bench -p pihash`
//! Native: `RUSTFLAGS='-C target-cpu=native' cargo bench -p pihash`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pihash::{hash32, hash64, hash128, hash256};

fn inputs() -> Vec<(usize, Vec<u8>)> {
  // Sizes chosen to exercise the tail-only path, exact chunk multiples, and
  // large-buffer throughput.
  let sizes = [0usize, 1, 3, 8, 16, 31, 32, 63, 64, 65, 1024, 16 * 1024, 1024 * 1024];
  sizes
    .into_iter()
    .map(|len| {
      let mut v = vec![0u8; len];
      for (i, b) in v.iter_mut().enumerate() {
        *b = (i as u8).wrapping_mul(31).wrapping_add(7);
      }
      (len, v)
    })
    .collect()
}

fn oneshot(c: &mut Criterion) {
  let inputs = inputs();
  let mut group = c.benchmark_group("pihash/oneshot");

  for (len, data) in &inputs {
    group.throughput(Throughput::Bytes(*len as u64));

    group.bench_with_input(BenchmarkId::new("hash32", len), data, |b, d| {
      b.iter(|| black_box(hash32(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("hash64", len), data, |b, d| {
      b.iter(|| black_box(hash64(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("hash128", len), data, |b, d| {
      b.iter(|| black_box(hash128(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("hash256", len), data, |b, d| {
      b.iter(|| black_box(hash256(black_box(d))))
    });
  }

  group.finish();
}

fn mixers(c: &mut Criterion) {
  let mut group = c.benchmark_group("pihash/mix");

  group.bench_function("mix32", |b| {
    let mut v = 0x243F_6A88u32;
    b.iter(|| {
      v = pihash::mix::mix32(black_box(v));
      v
    })
  });
  group.bench_function("mix64", |b| {
    let mut v = 0x243F_6A88_85A3_08D3u64;
    b.iter(|| {
      v = pihash::mix::mix64(black_box(v));
      v
    })
  });

  group.finish();
}

criterion_group!(benches, oneshot, mixers);
criterion_main!(benches);
