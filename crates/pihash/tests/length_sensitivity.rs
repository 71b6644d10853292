//! Regression search for append-a-zero collisions.
//!
//! The total input length is salted into the tail absorption, which runs
//! after the full-chunk loop, precisely so that `b` and `b ++ [0x00]` land
//! apart even though the padded tail windows look identical. The sweep input
//! is deterministic, so a pass here is a pinned regression result rather
//! than a statistical claim.

use pihash::{hash32, hash64, hash128, hash256};

fn deterministic_bytes(len: usize) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = 0x243F_6A88_85A3_08D3u64;
  for b in &mut out {
    x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    *b = (x >> 56) as u8;
  }
  out
}

#[test]
fn appending_a_zero_byte_shifts_every_variant() {
  // 0..=160 crosses every variant's tail-only, one-chunk, and multi-chunk
  // regions, including the exact chunk multiples and several loop chunks
  // past them.
  for len in 0..=160 {
    let data = deterministic_bytes(len);
    let mut extended = data.clone();
    extended.push(0);

    assert_ne!(hash32(&data), hash32(&extended), "hash32 len={len}");
    assert_ne!(hash64(&data), hash64(&extended), "hash64 len={len}");
    assert_ne!(hash128(&data), hash128(&extended), "hash128 len={len}");
    assert_ne!(hash256(&data), hash256(&extended), "hash256 len={len}");
  }
}

#[test]
fn trailing_zero_runs_stay_apart() {
  for len in [5usize, 16, 33] {
    let base = deterministic_bytes(len);
    let mut one = base.clone();
    one.push(0);
    let mut two = one.clone();
    two.push(0);

    assert_ne!(hash32(&base), hash32(&one), "hash32 len={len}");
    assert_ne!(hash32(&one), hash32(&two), "hash32 len={len}+1");
    assert_ne!(hash32(&base), hash32(&two), "hash32 len={len}+2");

    assert_ne!(hash64(&base), hash64(&one), "hash64 len={len}");
    assert_ne!(hash64(&one), hash64(&two), "hash64 len={len}+1");
    assert_ne!(hash64(&base), hash64(&two), "hash64 len={len}+2");

    assert_ne!(hash128(&base), hash128(&one), "hash128 len={len}");
    assert_ne!(hash128(&one), hash128(&two), "hash128 len={len}+1");
    assert_ne!(hash128(&base), hash128(&two), "hash128 len={len}+2");

    assert_ne!(hash256(&base), hash256(&one), "hash256 len={len}");
    assert_ne!(hash256(&one), hash256(&two), "hash256 len={len}+1");
    assert_ne!(hash256(&base), hash256(&two), "hash256 len={len}+2");
  }
}
