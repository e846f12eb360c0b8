//! Naming and selecting a flow hash.
//!
//! The two algorithms are independent and equally valid; nothing here decides
//! which one a caller should prefer. [`Algorithm`] only lets the caller name
//! one at runtime, the way kernel ids are named elsewhere in the workspace.

use crate::{lookup3::Lookup3, murmur3::Murmur3_32, tuple::FlowTuple};

/// A 32-bit hash over a flow 5-tuple.
pub trait FlowHash {
  /// Stable lowercase name.
  const NAME: &'static str;

  /// Hash `tuple` under `seed`.
  #[must_use]
  fn hash_flow(seed: u32, tuple: &FlowTuple) -> u32;
}

impl FlowHash for Lookup3 {
  const NAME: &'static str = "lookup3";

  #[inline]
  fn hash_flow(seed: u32, tuple: &FlowTuple) -> u32 {
    crate::lookup3::hash_flow(seed, tuple)
  }
}

impl FlowHash for Murmur3_32 {
  const NAME: &'static str = "murmur3";

  #[inline]
  fn hash_flow(seed: u32, tuple: &FlowTuple) -> u32 {
    crate::murmur3::hash_flow(seed, tuple)
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
  Lookup3,
  Murmur3,
}

impl Algorithm {
  pub const ALL: [Self; 2] = [Self::Lookup3, Self::Murmur3];

  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Lookup3 => Lookup3::NAME,
      Self::Murmur3 => Murmur3_32::NAME,
    }
  }

  /// Look up an algorithm by name. Accepts `lookup3`/`jenkins` and
  /// `murmur3`/`murmur`, ignoring ASCII case.
  #[must_use]
  pub fn from_name(name: &str) -> Option<Self> {
    let name = name.trim();
    if name.eq_ignore_ascii_case("lookup3") || name.eq_ignore_ascii_case("jenkins") {
      Some(Self::Lookup3)
    } else if name.eq_ignore_ascii_case("murmur3") || name.eq_ignore_ascii_case("murmur") {
      Some(Self::Murmur3)
    } else {
      None
    }
  }

  #[inline]
  #[must_use]
  pub fn hash(self, tuple: &FlowTuple, seed: u32) -> u32 {
    match self {
      Self::Lookup3 => Lookup3::hash_flow(seed, tuple),
      Self::Murmur3 => Murmur3_32::hash_flow(seed, tuple),
    }
  }
}

impl core::fmt::Display for Algorithm {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn names_round_trip() {
    for algo in Algorithm::ALL {
      assert_eq!(Algorithm::from_name(algo.as_str()), Some(algo));
    }
    assert_eq!(Algorithm::from_name("JENKINS"), Some(Algorithm::Lookup3));
    assert_eq!(Algorithm::from_name(" Murmur "), Some(Algorithm::Murmur3));
    assert_eq!(Algorithm::from_name("xxh3"), None);
  }

  #[test]
  fn dispatch_matches_direct_calls() {
    let t = FlowTuple::new(0x0a00_0001, 0x0a00_0002, 443, 51515, 17);
    assert_eq!(Algorithm::Lookup3.hash(&t, 0xdead_beef), 0xe5cb_6a2f);
    assert_eq!(Algorithm::Murmur3.hash(&t, 0xdead_beef), 0x1f93_2eb2);
    assert_eq!(Algorithm::Lookup3.hash(&t, 7), t.lookup3(7));
    assert_eq!(Algorithm::Murmur3.hash(&t, 7), t.murmur3(7));
  }
}
