//! Differential fuzzing of MurmurHash3 against the `murmur3` crate.

#![no_main]

use std::io::Cursor;

use flowhash::{FastHash as _, Murmur3_32};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &[u8]| {
  let (seed, data) = match input.split_first_chunk::<4>() {
    Some((seed, data)) => (u32::from_le_bytes(*seed), data),
    None => (0, input),
  };

  let ours = Murmur3_32::hash_with_seed(seed, data);
  let reference = murmur3::murmur3_32(&mut Cursor::new(data), seed).unwrap();

  assert_eq!(
    ours, reference,
    "murmur3 differential mismatch: ours={ours:#010x}, reference={reference:#010x}, len={}",
    data.len()
  );
});
