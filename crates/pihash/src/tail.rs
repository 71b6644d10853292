//! Tail padding.
//!
//! Every input ends with one absorption step over a zero-padded scratch chunk,
//! so all input lengths share a single code path after padding.

#![allow(clippy::indexing_slicing)] // Bounded copy into a fixed-size scratch chunk

/// Byte length consumed by the full-chunk loop.
///
/// The `-1` bias sends a final *full* chunk to the tail handler rather than
/// the loop, so the loop only ever sees chunks followed by more input. The
/// empty input consumes nothing.
#[inline(always)]
pub(crate) const fn split(len: usize, chunk: usize) -> usize {
  debug_assert!(chunk.is_power_of_two());
  len.saturating_sub(1) & !(chunk - 1)
}

/// Copies the trailing partial (or only) chunk of `data` into a zero-padded
/// scratch chunk. For the empty input no byte is read and the scratch chunk
/// stays all-zero.
#[inline(always)]
pub(crate) fn padded<const C: usize>(data: &[u8]) -> [u8; C] {
  let mut scratch = [0u8; C];
  let rest = &data[split(data.len(), C)..];
  scratch[..rest.len()].copy_from_slice(rest);
  scratch
}
