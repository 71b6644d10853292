//! 32-bit piHash (**NOT CRYPTO**).
//!
//! Four byte-wide lanes over 4-byte chunks, folded to a single word.

#![allow(clippy::indexing_slicing)] // Tight chunk parsing

use traits::FastHash;

use crate::fetch::fetch8;
use crate::mix::mix32;
use crate::tail;

/// Marker type for [`hash32`].
#[derive(Clone, Default)]
pub struct PiHash32;

const CHUNK: usize = 4;

// Lane seeds.
const SEED_W: u32 = 0x297B_FEF9;
const SEED_X: u32 = 0x0C24_0623;
const SEED_Y: u32 = 0x3952_7119;
const SEED_Z: u32 = 0x09BC_0863;

// Round constants (odd multipliers).
const K0: u32 = 0x2191_4047;
const K1: u32 = 0x0356_AC85;
const K2: u32 = 0x0F75_27D9;
const K3: u32 = 0x1B87_3593;

/// One absorption step, shared by the loop and the tail. `salt` is the chunk's
/// byte offset in the loop and the total input length for the tail.
#[inline(always)]
fn absorb(w: &mut u32, x: &mut u32, y: &mut u32, z: &mut u32, chunk: &[u8; CHUNK], salt: u32) {
  *w ^= fetch8(chunk, 0).rotate_right(11).wrapping_add(salt.wrapping_mul(*w)).wrapping_mul(K0);
  *x = x.wrapping_add(fetch8(chunk, 1).rotate_left(17).wrapping_add(w.wrapping_mul(*x)).wrapping_mul(K1));
  *y = y.wrapping_add(fetch8(chunk, 2).rotate_right(3).wrapping_add(x.wrapping_mul(*y)).wrapping_mul(K2));
  *z ^= fetch8(chunk, 3).rotate_right(23).wrapping_add(y.wrapping_mul(*z)).wrapping_mul(K3);
}

/// Hashes `data` to a 32-bit fingerprint.
#[must_use]
pub fn hash32(data: &[u8]) -> u32 {
  let mut w = SEED_W;
  let mut x = SEED_X;
  let mut y = SEED_Y;
  let mut z = SEED_Z;

  let (chunks, _) = data[..tail::split(data.len(), CHUNK)].as_chunks::<CHUNK>();
  for (index, chunk) in chunks.iter().enumerate() {
    absorb(&mut w, &mut x, &mut y, &mut z, chunk, (index * CHUNK) as u32);
    (x, y, z) = (y, z, x);
  }

  // Trailing chunk last, salted with the total length, so appending bytes
  // (zero or not) always reaches the finalizer as a fresh difference.
  let scratch = tail::padded::<CHUNK>(data);
  absorb(&mut w, &mut x, &mut y, &mut z, &scratch, data.len() as u32);

  // Cross-mix so every lane depends on all others, then the chained avalanche
  // pass.
  w = w.wrapping_add(x);
  w = w.wrapping_sub(y);
  w ^= z;
  x = x.wrapping_sub(w);
  y ^= w;
  z = z.wrapping_add(w);

  w = w.wrapping_add(mix32(w));
  x = x.wrapping_add(mix32(x)).wrapping_add(w);
  y = y.wrapping_add(mix32(y)).wrapping_add(x);
  z = z.wrapping_add(mix32(z)).wrapping_add(y);

  w ^ x ^ y ^ z
}

impl FastHash for PiHash32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn hash(data: &[u8]) -> Self::Output {
    hash32(data)
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use proptest::prelude::*;

  use super::*;

  fn deterministic_bytes(len: usize) -> Vec<u8> {
    let mut out = alloc::vec![0u8; len];
    let mut x = 0x243F_6A88_85A3_08D3u64;
    for b in &mut out {
      x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
      *b = (x >> 56) as u8;
    }
    out
  }

  #[test]
  fn known_vectors() {
    assert_eq!(hash32(b""), 0x5684_D51F);
    assert_eq!(hash32(b"a"), 0x0E89_092E);
    assert_eq!(hash32(b"hello"), 0x5CE8_79A0);
    assert_eq!(hash32(b"hello, world"), 0x011C_5DAB);
    assert_eq!(hash32(b"The quick brown fox jumps over the lazy dog"), 0x4FF8_707E);
  }

  #[test]
  fn chunk_boundaries() {
    let cases: [(usize, u32); 6] = [
      (3, 0x1F0D_B2E1),
      (4, 0xCCC8_ACB6),
      (5, 0x6E97_3693),
      (8, 0x3B26_BE61),
      (9, 0xD147_EF51),
      (14, 0xCA80_54F5),
    ];
    for (len, expected) in cases {
      assert_eq!(hash32(&deterministic_bytes(len)), expected, "len={len}");
    }
  }

  #[test]
  fn empty_and_zero_padding_differ() {
    assert_ne!(hash32(b""), hash32(b"\x00"));
    assert_ne!(hash32(b"\x00"), hash32(b"\x00\x00"));
    assert_ne!(hash32(b"hello"), hash32(b"hello\x00"));
  }

  #[test]
  fn trait_matches_function() {
    let data = deterministic_bytes(100);
    assert_eq!(<PiHash32 as FastHash>::hash(&data), hash32(&data));
    assert_eq!(PiHash32::OUTPUT_SIZE, 4);
  }

  proptest! {
    #[test]
    fn deterministic(data in proptest::collection::vec(any::<u8>(), 0..512)) {
      prop_assert_eq!(hash32(&data), hash32(&data));
    }
  }
}
