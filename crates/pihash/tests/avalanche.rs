//! Avalanche quality of the finishing mixers.
//!
//! A single-bit input change should flip about half the output bits. Both
//! mixers are measured over a fixed pseudo-random trial set, so the observed
//! mean is the same on every run and the bound can be tight.

use pihash::mix::{mix32, mix64};

const TRIALS: u32 = 10_000;
const TOLERANCE: f64 = 0.075;

fn xorshift64star(state: &mut u64) -> u64 {
  let mut x = *state;
  x ^= x >> 12;
  x ^= x << 25;
  x ^= x >> 27;
  *state = x;
  x.wrapping_mul(0x2545_F491_4F6C_DD1D)
}

#[test]
fn mix32_flips_half_the_bits_on_increment() {
  let mut state = 0x9E37_79B9_7F4A_7C15_u64;
  let mut flipped = 0u64;
  for _ in 0..TRIALS {
    let v = (xorshift64star(&mut state) >> 32) as u32;
    flipped += u64::from((mix32(v) ^ mix32(v.wrapping_add(1))).count_ones());
  }

  let mean = flipped as f64 / (f64::from(TRIALS) * 32.0);
  assert!(
    (mean - 0.5).abs() < TOLERANCE,
    "mix32 mean fractional Hamming distance {mean:.4} outside 0.5 +/- {TOLERANCE}"
  );
}

#[test]
fn mix64_flips_half_the_bits_on_increment() {
  let mut state = 0x9E37_79B9_7F4A_7C15_u64;
  let mut flipped = 0u64;
  for _ in 0..TRIALS {
    let v = xorshift64star(&mut state);
    flipped += u64::from((mix64(v) ^ mix64(v.wrapping_add(1))).count_ones());
  }

  let mean = flipped as f64 / (f64::from(TRIALS) * 64.0);
  assert!(
    (mean - 0.5).abs() < TOLERANCE,
    "mix64 mean fractional Hamming distance {mean:.4} outside 0.5 +/- {TOLERANCE}"
  );
}

