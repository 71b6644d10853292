//! Little-endian fetch layer.
//!
//! All input reaches the lane updates through these helpers, which reassemble
//! byte windows as little-endian words regardless of host byte order. Each
//! value is zero-extended to the lane width of the variant that consumes it.

#![allow(clippy::indexing_slicing)] // Fixed-size chunk parsing

/// Reads one byte at `offset`, zero-extended.
#[inline(always)]
pub(crate) fn fetch8(buf: &[u8], offset: usize) -> u32 {
  debug_assert!(offset < buf.len());
  buf[offset] as u32
}

/// Reads a little-endian `u16` at `offset`, zero-extended.
#[inline(always)]
pub(crate) fn fetch16(buf: &[u8], offset: usize) -> u64 {
  debug_assert!(offset + 2 <= buf.len());
  let mut word = [0u8; 2];
  word.copy_from_slice(&buf[offset..offset + 2]);
  u16::from_le_bytes(word) as u64
}

/// Reads a little-endian `u32` at `offset`.
#[inline(always)]
pub(crate) fn fetch32(buf: &[u8], offset: usize) -> u32 {
  debug_assert!(offset + 4 <= buf.len());
  let mut word = [0u8; 4];
  word.copy_from_slice(&buf[offset..offset + 4]);
  u32::from_le_bytes(word)
}

/// Reads a little-endian `u64` at `offset`.
#[inline(always)]
pub(crate) fn fetch64(buf: &[u8], offset: usize) -> u64 {
  debug_assert!(offset + 8 <= buf.len());
  let mut word = [0u8; 8];
  word.copy_from_slice(&buf[offset..offset + 8]);
  u64::from_le_bytes(word)
}
