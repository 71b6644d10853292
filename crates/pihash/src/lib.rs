//! piHash: fast, fixed-seed, non-cryptographic hashes (**NOT CRYPTO**).
//!
//! Four output widths over the same four-lane design:
//!
//! | Function | Output | Chunk | Per-lane fetch |
//! |----------|--------|-------|----------------|
//! | [`hash32`] | `u32` | 4 bytes | 1 byte |
//! | [`hash64`] | `u64` | 8 bytes | 2 bytes |
//! | [`hash128`] | `[u32; 4]` | 16 bytes | 4 bytes |
//! | [`hash256`] | `[u64; 4]` | 32 bytes | 4 or 8 bytes |
//!
//! Every variant seeds four lane registers from fixed constants, runs the
//! full-chunk loop, absorbs the trailing (possibly partial) chunk from a
//! zero-padded scratch buffer salted with the total input length, and
//! finishes with a cross-lane mix followed by a chained avalanche pass. Input
//! bytes are read as little-endian words, so hashes agree across host
//! endiannesses. Multi-word outputs are most-significant lane first.
//!
//! The single-register finishing transforms are exported as [`mix::mix32`] and
//! [`mix::mix64`] for callers that already hold an integer key.
//!
//! These hashes fit hash tables, fingerprints, and deduplication in
//! non-adversarial settings. They provide no collision resistance against an
//! attacker, no keying, and no timing guarantees.
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! the workspace. Dev-only dependencies are used for property testing and
//! benchmarking.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod fetch;
mod hash32;
mod hash64;
mod hash128;
mod hash256;
pub mod mix;
mod tail;

pub use hash32::{PiHash32, hash32};
pub use hash64::{PiHash64, hash64};
pub use hash128::{PiHash128, hash128};
pub use hash256::{PiHash256, hash256};
pub use traits::FastHash;
