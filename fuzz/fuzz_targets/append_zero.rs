//! Fuzz target for trailing-zero extension of every hash width.
//!
//! Tests that:
//! - Appending 1..=8 zero bytes changes all four hashes
//! - The length-salted tail, absorbed after the loop, keeps the zero-padded
//!   window from absorbing extensions

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  zeros: u8,
}

fuzz_target!(|input: Input| {
  let zeros = usize::from(input.zeros % 8) + 1;
  let mut extended = input.data.clone();
  extended.resize(input.data.len() + zeros, 0);

  assert_ne!(
    pihash::hash32(&input.data),
    pihash::hash32(&extended),
    "hash32 ate {zeros} trailing zero byte(s)"
  );
  assert_ne!(
    pihash::hash64(&input.data),
    pihash::hash64(&extended),
    "hash64 ate {zeros} trailing zero byte(s)"
  );
  assert_ne!(
    pihash::hash128(&input.data),
    pihash::hash128(&extended),
    "hash128 ate {zeros} trailing zero byte(s)"
  );
  assert_ne!(
    pihash::hash256(&input.data),
    pihash::hash256(&extended),
    "hash256 ate {zeros} trailing zero byte(s)"
  );
});
