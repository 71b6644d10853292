//! 64-bit piHash (**NOT CRYPTO**).
//!
//! Four 16-bit-fetch lanes over 8-byte chunks, folded to a single word.

#![allow(clippy::indexing_slicing)] // Tight chunk parsing

use traits::FastHash;

use crate::fetch::fetch16;
use crate::mix::mix64;
use crate::tail;

/// Marker type for [`hash64`].
#[derive(Clone, Default)]
pub struct PiHash64;

const CHUNK: usize = 8;

// Lane seeds.
const SEED_W: u64 = 0x2_4E76_FBDB;
const SEED_X: u64 = 0x2_51F3_0FB9;
const SEED_Y: u64 = 0x1_2181_21E1;
const SEED_Z: u64 = 0x1_9403_B6E1;

// Round constants (odd multipliers), shared with the 32-bit variant but
// applied in 64-bit arithmetic.
const K0: u64 = 0x2191_4047;
const K1: u64 = 0x0356_AC85;
const K2: u64 = 0x0F75_27D9;
const K3: u64 = 0x1B87_3593;

/// One absorption step, shared by the loop and the tail. `salt` is the chunk's
/// byte offset in the loop and the total input length for the tail.
#[inline(always)]
fn absorb(w: &mut u64, x: &mut u64, y: &mut u64, z: &mut u64, chunk: &[u8; CHUNK], salt: u64) {
  *w ^= fetch16(chunk, 0).rotate_right(61).wrapping_add(salt.wrapping_mul(*w)).wrapping_mul(K0);
  *x = x.wrapping_add(fetch16(chunk, 2).rotate_left(16).wrapping_add(w.wrapping_mul(*x)).wrapping_mul(K1));
  *y = y.wrapping_add(fetch16(chunk, 4).rotate_right(13).wrapping_add(x.wrapping_mul(*y)).wrapping_mul(K2));
  *z ^= fetch16(chunk, 6).rotate_right(19).wrapping_add(y.wrapping_mul(*z)).wrapping_mul(K3);
}

/// Hashes `data` to a 64-bit fingerprint.
#[must_use]
pub fn hash64(data: &[u8]) -> u64 {
  let mut w = SEED_W;
  let mut x = SEED_X;
  let mut y = SEED_Y;
  let mut z = SEED_Z;

  let (chunks, _) = data[..tail::split(data.len(), CHUNK)].as_chunks::<CHUNK>();
  for (index, chunk) in chunks.iter().enumerate() {
    absorb(&mut w, &mut x, &mut y, &mut z, chunk, (index * CHUNK) as u64);
    (x, y, z) = (y, z, x);
  }

  // Trailing chunk last, salted with the total length, so appending bytes
  // (zero or not) always reaches the finalizer as a fresh difference.
  let scratch = tail::padded::<CHUNK>(data);
  absorb(&mut w, &mut x, &mut y, &mut z, &scratch, data.len() as u64);

  // Cross-mix so every lane depends on all others, then the chained avalanche
  // pass.
  w = w.wrapping_add(x);
  w = w.wrapping_sub(y);
  w ^= z;
  x = x.wrapping_sub(w);
  y ^= w;
  z = z.wrapping_add(w);

  w = w.wrapping_add(mix64(w));
  x = x.wrapping_add(mix64(x)).wrapping_add(w);
  y = y.wrapping_add(mix64(y)).wrapping_add(x);
  z = z.wrapping_add(mix64(z)).wrapping_add(y);

  w ^ x ^ y ^ z
}

impl FastHash for PiHash64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;

  #[inline]
  fn hash(data: &[u8]) -> Self::Output {
    hash64(data)
  }
}
