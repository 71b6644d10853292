//! Fuzz target for the one-shot hash entry points.
//!
//! Tests that:
//! - No panics on arbitrary input of any length
//! - Repeated calls are deterministic
//! - The `FastHash` impls agree with the free functions

#![no_main]

use libfuzzer_sys::fuzz_target;
use pihash::{FastHash, PiHash32, PiHash64, PiHash128, PiHash256};

fuzz_target!(|data: &[u8]| {
  let h32 = pihash::hash32(data);
  let h64 = pihash::hash64(data);
  let h128 = pihash::hash128(data);
  let h256 = pihash::hash256(data);

  assert_eq!(h32, pihash::hash32(data), "hash32 nondeterministic");
  assert_eq!(h64, pihash::hash64(data), "hash64 nondeterministic");
  assert_eq!(h128, pihash::hash128(data), "hash128 nondeterministic");
  assert_eq!(h256, pihash::hash256(data), "hash256 nondeterministic");

  assert_eq!(h32, PiHash32::hash(data), "hash32 trait mismatch");
  assert_eq!(h64, PiHash64::hash(data), "hash64 trait mismatch");
  assert_eq!(h128, PiHash128::hash(data), "hash128 trait mismatch");
  assert_eq!(h256, PiHash256::hash(data), "hash256 trait mismatch");
});
