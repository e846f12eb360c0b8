//! Bob Jenkins' lookup3 (**NOT CRYPTO**).
//!
//! Two entry points share the same `final` avalanche:
//!
//! - [`hash_flow`] folds a packed 5-tuple. The 13-byte key is one 12-byte
//!   block plus a single tail byte added to `a`; the block goes straight to
//!   `final` without the inter-block `mix`.
//! - [`Lookup3`] implements [`FastHash`] as `hashlittle` over arbitrary
//!   byte slices, running `mix` between blocks.
//!
//! Because the flow path skips `mix`, `hash_flow(seed, t)` is **not** equal to
//! `Lookup3::hash_with_seed(seed, t.pack().as_bytes())`.

#![allow(clippy::indexing_slicing)] // Fixed-size block parsing

use traits::FastHash;

use crate::tuple::{FlowTuple, PACKED_LEN};

const INIT: u32 = 0xdead_beef;

/// lookup3 hash (`hashlittle`), 32-bit output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lookup3;

#[inline(always)]
fn mix(a: &mut u32, b: &mut u32, c: &mut u32) {
  *a = a.wrapping_sub(*c);
  *a ^= c.rotate_left(4);
  *c = c.wrapping_add(*b);

  *b = b.wrapping_sub(*a);
  *b ^= a.rotate_left(6);
  *a = a.wrapping_add(*c);

  *c = c.wrapping_sub(*b);
  *c ^= b.rotate_left(8);
  *b = b.wrapping_add(*a);

  *a = a.wrapping_sub(*c);
  *a ^= c.rotate_left(16);
  *c = c.wrapping_add(*b);

  *b = b.wrapping_sub(*a);
  *b ^= a.rotate_left(19);
  *a = a.wrapping_add(*c);

  *c = c.wrapping_sub(*b);
  *c ^= b.rotate_left(4);
  *b = b.wrapping_add(*a);
}

// Jenkins' `final`. The step order and rotate amounts are fixed.
#[inline(always)]
fn finalize(a: &mut u32, b: &mut u32, c: &mut u32) {
  *c ^= *b;
  *c = c.wrapping_sub(b.rotate_left(14));
  *a ^= *c;
  *a = a.wrapping_sub(c.rotate_left(11));
  *b ^= *a;
  *b = b.wrapping_sub(a.rotate_left(25));
  *c ^= *b;
  *c = c.wrapping_sub(b.rotate_left(16));
  *a ^= *c;
  *a = a.wrapping_sub(c.rotate_left(4));
  *b ^= *a;
  *b = b.wrapping_sub(a.rotate_left(14));
  *c ^= *b;
  *c = c.wrapping_sub(b.rotate_left(24));
}

#[inline(always)]
fn absorb(a: &mut u32, b: &mut u32, c: &mut u32, block: &[u8; 12]) {
  *a = a.wrapping_add(u32::from_le_bytes([block[0], block[1], block[2], block[3]]));
  *b = b.wrapping_add(u32::from_le_bytes([block[4], block[5], block[6], block[7]]));
  *c = c.wrapping_add(u32::from_le_bytes([block[8], block[9], block[10], block[11]]));
}

/// lookup3 over a packed flow tuple.
#[inline]
#[must_use]
pub fn hash_flow(seed: u32, tuple: &FlowTuple) -> u32 {
  let [block @ .., protocol] = tuple.pack().into_bytes();
  let mut a = INIT.wrapping_add(PACKED_LEN as u32).wrapping_add(seed);
  let mut b = a;
  let mut c = a;

  absorb(&mut a, &mut b, &mut c, &block);

  // 13 % 12 == 1: the protocol byte lands in `a`.
  a = a.wrapping_add(u32::from(protocol));

  finalize(&mut a, &mut b, &mut c);
  c
}

#[inline]
fn hashlittle(seed: u32, data: &[u8]) -> u32 {
  let mut a = INIT.wrapping_add(data.len() as u32).wrapping_add(seed);
  let mut b = a;
  let mut c = a;

  let mut rest = data;
  while rest.len() > 12 {
    let Some((block, tail)) = rest.split_first_chunk::<12>() else {
      break;
    };
    absorb(&mut a, &mut b, &mut c, block);
    mix(&mut a, &mut b, &mut c);
    rest = tail;
  }

  if rest.is_empty() {
    return c;
  }

  let mut last = [0u8; 12];
  last[..rest.len()].copy_from_slice(rest);
  absorb(&mut a, &mut b, &mut c, &last);
  finalize(&mut a, &mut b, &mut c);
  c
}

impl FastHash for Lookup3 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    hashlittle(seed, data)
  }
}
