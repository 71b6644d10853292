//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast, fixed-seed, non-cryptographic hash.
///
/// These hashes are suitable for hash tables, content fingerprints,
/// deduplication checks, and other non-adversarial settings. They are **not**
/// suitable for signatures, MACs, password hashing, or untrusted inputs where
/// collision attacks matter.
///
/// This trait is intentionally one-shot: each call hashes a complete byte
/// slice. Streaming APIs require algorithm-specific buffering and are out of
/// scope for this family, as is keyed hashing; every implementation seeds
/// itself from compiled-in constants, so equal inputs hash equally on every
/// host and in every process.
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Compute the hash of `data`.
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output;
}

#[cfg(test)]
mod tests {
  use super::*;

  struct FirstByte;

  impl FastHash for FirstByte {
    const OUTPUT_SIZE: usize = 1;
    type Output = u8;

    fn hash(data: &[u8]) -> Self::Output {
      data.first().copied().unwrap_or_default()
    }
  }

  #[test]
  fn trait_is_object_free_and_callable() {
    assert_eq!(FirstByte::OUTPUT_SIZE, 1);
    assert_eq!(<FirstByte as FastHash>::hash(b"abc"), b'a');
    assert_eq!(<FirstByte as FastHash>::hash(b""), 0);
  }
}
