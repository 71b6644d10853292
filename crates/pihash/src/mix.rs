//! Avalanche mixers (**NOT CRYPTO**).
//!
//! `mix32` and `mix64` are the single-register finishing transforms behind
//! every variant's finalizer: multiply by an odd constant, rotate-xor,
//! multiply-add a shifted copy, multiply by a rotated copy, xor a shifted
//! multiple. A one-bit input change flips about half the output bits, which is
//! what makes the final lane values usable as bucket indices directly.
//!
//! They are exported so callers that already hold an integer key can reuse
//! them without going through the byte-oriented API.

/// Scrambles a 32-bit register so nearby inputs map to distant outputs.
#[inline(always)]
#[must_use]
pub const fn mix32(mut v: u32) -> u32 {
  v = v.wrapping_mul(0x2CA8_03F9);
  v ^= v.rotate_left(16);
  v ^= 0x3583_C01Fu32.wrapping_mul(v >> 11).wrapping_add(0x3450_4DB3);
  v = v.wrapping_mul(v.rotate_right(4));
  v ^= 0x243E_4223u32.wrapping_mul(v) << 7;
  v
}

/// Scrambles a 64-bit register so nearby inputs map to distant outputs.
#[inline(always)]
#[must_use]
pub const fn mix64(mut v: u64) -> u64 {
  v = v.wrapping_mul(0x483B_86D5_483B_86D5);
  v ^= v.rotate_left(31);
  v ^= 0x3AF1_DE9B_3AF1_DE9Bu64.wrapping_mul(v >> 27).wrapping_add(0x2833_0D1B_2833_0D1B);
  v = v.wrapping_mul(v.rotate_right(33));
  v ^= 0x13A7_CE59_13A7_CE59u64.wrapping_mul(v) << 37;
  v
}
