//! 256-bit piHash (**NOT CRYPTO**).
//!
//! The double-width variant: lanes y and z are true 64-bit registers, while
//! lanes w and x are simulated by pairs of 32-bit sub-registers that are only
//! joined into whole words at finalization. This keeps per-byte cost close to
//! the 128-bit variant while doubling the fingerprint width, at some cost in
//! diffusion across the simulated halves. Output is `[u64; 4]` with the
//! most-significant lane first.

#![allow(clippy::indexing_slicing)] // Tight chunk parsing

use traits::FastHash;

use crate::fetch::{fetch32, fetch64};
use crate::mix::mix64;
use crate::tail;

/// Marker type for [`hash256`].
#[derive(Clone, Default)]
pub struct PiHash256;

const CHUNK: usize = 32;

// Lane seeds: sub-register pairs for w and x, whole words for y and z. Like
// the round constants below they are drawn from the hexadecimal digits of pi.
const SEED_W_LO: u32 = 0x9216_D5D9;
const SEED_W_HI: u32 = 0x8979_FB1B;
const SEED_X_LO: u32 = 0xD131_0BA6;
const SEED_X_HI: u32 = 0x98DF_B5AC;
const SEED_Y: u64 = 0x2FFD_72DB_D01A_DFB7;
const SEED_Z: u64 = 0xB8E1_AFED_6A26_7E96;

// Round constants (odd multipliers), distinct from the narrower variants.
const KA: u32 = 0x85A3_08D3;
const KB: u32 = 0xEC4E_6C89;
const KC: u32 = 0x38D0_1377;
const KD: u32 = 0xBE54_66CF;
const KE: u64 = 0xC0AC_29B7_C97C_50DD;
const KF: u64 = 0x3F84_D5B5_B547_0917;

struct Lanes {
  w_lo: u32,
  w_hi: u32,
  x_lo: u32,
  x_hi: u32,
  y: u64,
  z: u64,
}

#[inline(always)]
const fn join(hi: u32, lo: u32) -> u64 {
  ((hi as u64) << 32) | lo as u64
}

impl Lanes {
  const fn seeded() -> Self {
    Self {
      w_lo: SEED_W_LO,
      w_hi: SEED_W_HI,
      x_lo: SEED_X_LO,
      x_hi: SEED_X_HI,
      y: SEED_Y,
      z: SEED_Z,
    }
  }

  /// One absorption step, shared by the loop and the tail. The chunk carries
  /// one 4-byte window per sub-register and one 8-byte window for each of y
  /// and z; the update chain couples `w_lo -> w_hi -> x_lo -> x_hi -> y -> z`,
  /// with `salt` entering through `w_lo`.
  #[inline(always)]
  fn absorb(&mut self, chunk: &[u8; CHUNK], salt: u32) {
    self.w_lo ^= fetch32(chunk, 0).rotate_right(9).wrapping_mul(KA).wrapping_add(salt ^ self.w_lo);
    self.w_hi ^= fetch32(chunk, 4).rotate_left(21).wrapping_mul(KB).wrapping_add(self.w_lo ^ self.w_hi);
    self.x_lo = self
      .x_lo
      .wrapping_add(fetch32(chunk, 8).rotate_left(15).wrapping_mul(KC).wrapping_add(self.w_hi ^ self.x_lo));
    self.x_hi = self
      .x_hi
      .wrapping_add(fetch32(chunk, 12).rotate_right(5).wrapping_mul(KD).wrapping_add(self.x_lo ^ self.x_hi));
    self.y = self
      .y
      .wrapping_add(fetch64(chunk, 16).rotate_right(29).wrapping_mul(KE).wrapping_add(self.x_hi as u64 ^ self.y));
    self.z ^= fetch64(chunk, 24).rotate_right(41).wrapping_mul(KF).wrapping_add(self.y ^ self.z);
  }

  /// The x/y/z 3-cycle. Moving a value between a simulated and a true lane is
  /// pure repacking; no arithmetic crosses the sub-register boundary here.
  #[inline(always)]
  fn rotate(&mut self) {
    let old_x = join(self.x_hi, self.x_lo);
    self.x_lo = self.y as u32;
    self.x_hi = (self.y >> 32) as u32;
    self.y = self.z;
    self.z = old_x;
  }
}

/// Hashes `data` to a 256-bit fingerprint, most-significant word first.
#[must_use]
pub fn hash256(data: &[u8]) -> [u64; 4] {
  let mut lanes = Lanes::seeded();

  let (chunks, _) = data[..tail::split(data.len(), CHUNK)].as_chunks::<CHUNK>();
  for (index, chunk) in chunks.iter().enumerate() {
    lanes.absorb(chunk, (index * CHUNK) as u32);
    lanes.rotate();
  }

  // Trailing chunk last, salted with the total length, so appending bytes
  // (zero or not) always reaches the finalizer as a fresh difference.
  let scratch = tail::padded::<CHUNK>(data);
  lanes.absorb(&scratch, data.len() as u32);

  // Sub-register pairs become whole lanes only here.
  let mut w = join(lanes.w_hi, lanes.w_lo);
  let mut x = join(lanes.x_hi, lanes.x_lo);
  let mut y = lanes.y;
  let mut z = lanes.z;

  // Cross-mix so every lane depends on all others, then the chained avalanche
  // pass over all four output words.
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

  [w, x, y, z]
}

impl FastHash for PiHash256 {
  const OUTPUT_SIZE: usize = 32;
  type Output = [u64; 4];

  #[inline]
  fn hash(data: &[u8]) -> Self::Output {
    hash256(data)
  }
}
