//! 128-bit piHash (**NOT CRYPTO**).
//!
//! Four word-wide lanes over 16-byte chunks, emitted as `[u32; 4]` with the
//! most-significant lane first.

#![allow(clippy::indexing_slicing)] // Tight chunk parsing

use traits::FastHash;

use crate::fetch::fetch32;
use crate::mix::mix32;
use crate::tail;

/// Marker type for [`hash128`].
#[derive(Clone, Default)]
pub struct PiHash128;

const CHUNK: usize = 16;

// Lane seeds.
const SEED_W: u32 = 0x5A44_F074;
const SEED_X: u32 = 0x35E8_20F6;
const SEED_Y: u32 = 0x674F_1845;
const SEED_Z: u32 = 0x7FB5_DE7F;

// Round constants (odd multipliers). Same set as the narrow variants, in the
// spread-mode order.
const K0: u32 = 0x2191_4047;
const K1: u32 = 0x1B87_3593;
const K2: u32 = 0x0F75_27D9;
const K3: u32 = 0x0356_AC85;

/// One absorption step, shared by the loop and the tail. `salt` is the chunk's
/// byte offset in the loop and the total input length for the tail.
#[inline(always)]
fn absorb(w: &mut u32, x: &mut u32, y: &mut u32, z: &mut u32, chunk: &[u8; CHUNK], salt: u32) {
  *w ^= fetch32(chunk, 0).rotate_right(7).wrapping_mul(K0).wrapping_add(salt ^ *w);
  *x = x.wrapping_add(fetch32(chunk, 4).rotate_left(19).wrapping_mul(K1).wrapping_add(*w ^ *x));
  *y = y.wrapping_add(fetch32(chunk, 8).rotate_right(13).wrapping_mul(K2).wrapping_add(*x ^ *y));
  *z ^= fetch32(chunk, 12).rotate_right(11).wrapping_mul(K3).wrapping_add(*y ^ *z);
}

/// Hashes `data` to a 128-bit fingerprint, most-significant word first.
#[must_use]
pub fn hash128(data: &[u8]) -> [u32; 4] {
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
  // pass over all four output words.
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

  [w, x, y, z]
}

impl FastHash for PiHash128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = [u32; 4];

  #[inline]
  fn hash(data: &[u8]) -> Self::Output {
    hash128(data)
  }
}
