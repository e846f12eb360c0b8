//! MurmurHash3, x86 32-bit variant (**NOT CRYPTO**).
//!
//! The flow hash is plain `murmur3_32` over the packed 13-byte key: three
//! 4-byte blocks and a 1-byte tail. The tail ladder below handles 1, 2 and 3
//! leftover bytes so [`Murmur3_32`] works on arbitrary byte slices.

use traits::FastHash;

use crate::tuple::FlowTuple;

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;
const N: u32 = 0xe654_6b64;

/// MurmurHash3 x86_32.
#[derive(Clone, Copy, Debug, Default)]
pub struct Murmur3_32;

#[inline(always)]
const fn scramble(k1: u32) -> u32 {
  k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

#[inline(always)]
const fn fmix32(mut h: u32) -> u32 {
  h ^= h >> 16;
  h = h.wrapping_mul(0x85eb_ca6b);
  h ^= h >> 13;
  h = h.wrapping_mul(0xc2b2_ae35);
  h ^= h >> 16;
  h
}

#[inline]
fn murmur3_32(seed: u32, data: &[u8]) -> u32 {
  let mut h1 = seed;

  let (blocks, tail) = data.as_chunks::<4>();
  for block in blocks {
    h1 ^= scramble(u32::from_le_bytes(*block));
    h1 = h1.rotate_left(13).wrapping_mul(5).wrapping_add(N);
  }

  // Cumulative: a 3-byte tail takes all three steps, a 2-byte tail the last two.
  let mut k1 = 0u32;
  if let Some(&byte) = tail.get(2) {
    k1 ^= u32::from(byte) << 16;
  }
  if let Some(&byte) = tail.get(1) {
    k1 ^= u32::from(byte) << 8;
  }
  if let Some(&byte) = tail.first() {
    k1 ^= u32::from(byte);
    h1 ^= scramble(k1);
  }

  h1 ^= data.len() as u32;
  fmix32(h1)
}

/// MurmurHash3 over a packed flow tuple.
#[inline]
#[must_use]
pub fn hash_flow(seed: u32, tuple: &FlowTuple) -> u32 {
  murmur3_32(seed, tuple.pack().as_bytes())
}

impl FastHash for Murmur3_32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    murmur3_32(seed, data)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tuple::PROTO_TCP;

  const REFERENCE: FlowTuple = FlowTuple::new(0xC0A8_0101, 0x0808_0808, 12345, 80, PROTO_TCP);

  #[test]
  fn flow_reference_vector() {
    assert_eq!(hash_flow(0x1234_5678, &REFERENCE), 0x549d_ed1b);
    assert_eq!(hash_flow(0, &REFERENCE), 0xf1da_6375);
  }

  #[test]
  fn flow_zero_tuple_is_not_zero() {
    assert_eq!(hash_flow(0, &FlowTuple::default()), 0xb996_0eb1);
  }

  #[test]
  fn flow_equals_bytes_hash_of_packed_key() {
    let packed = REFERENCE.pack();
    assert_eq!(
      Murmur3_32::hash_with_seed(0x1234_5678, packed.as_bytes()),
      hash_flow(0x1234_5678, &REFERENCE)
    );
  }

  #[test]
  fn known_answers() {
    assert_eq!(Murmur3_32::hash(b""), 0);
    assert_eq!(Murmur3_32::hash_with_seed(1, b""), 0x514e_28b7);
    assert_eq!(Murmur3_32::hash_with_seed(0xffff_ffff, b""), 0x81f1_6f39);
    assert_eq!(Murmur3_32::hash(b"test"), 0xba6b_d213);
    assert_eq!(Murmur3_32::hash(b"Hello, world!"), 0xc036_3e43);
    assert_eq!(Murmur3_32::hash_with_seed(1234, b"Hello, world!"), 0xfaf6_cdb3);
    assert_eq!(
      Murmur3_32::hash(b"The quick brown fox jumps over the lazy dog"),
      0x2e4f_f723
    );
  }

  #[test]
  fn tail_ladder_lengths() {
    assert_eq!(Murmur3_32::hash(b"a"), 0x3c25_69b2);
    assert_eq!(Murmur3_32::hash(b"ab"), 0x9bbf_d75f);
    assert_eq!(Murmur3_32::hash(b"abc"), 0xb3dd_93fa);
  }

  #[test]
  fn fmix32_fixes_zero() {
    assert_eq!(fmix32(0), 0);
    assert_ne!(fmix32(1), 1);
  }
}
