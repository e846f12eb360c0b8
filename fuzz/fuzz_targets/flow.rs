//! Flow hashing invariants over arbitrary 13-byte keys and seeds.

#![no_main]

use flowhash::{Algorithm, FastHash as _, Murmur3_32, PACKED_LEN, PackedKey, pack};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: ([u8; PACKED_LEN], u32)| {
  let (bytes, seed) = input;
  let key = PackedKey::from_bytes(bytes);
  let flow = key.to_tuple();

  // Packing is a bijection on 13-byte keys.
  assert_eq!(pack(flow), key);

  for algo in Algorithm::ALL {
    assert_eq!(algo.hash(&flow, seed), algo.hash(&flow, seed));
  }
  assert_eq!(flow.murmur3(seed), Murmur3_32::hash_with_seed(seed, &bytes));
});
