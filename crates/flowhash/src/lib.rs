//! 32-bit hashes over network flow 5-tuples (**NOT CRYPTO**).
//!
//! A flow's source address, destination address, source port, destination
//! port and protocol are packed into a canonical 13-byte little-endian key and
//! folded into a `u32` by one of two independent algorithms:
//!
//! - [`hash_lookup3`]: Bob Jenkins' lookup3 initialization and `final` avalanche.
//! - [`hash_murmur3`]: MurmurHash3, x86 32-bit variant.
//!
//! Both are pure and total: every input is valid, no call allocates, blocks
//! or touches shared state, so they may be called from any number of threads.
//!
//! ```
//! use flowhash::{FlowTuple, hash_lookup3, hash_murmur3};
//!
//! let lookup3 = hash_lookup3(0xC0A8_0101, 0x0808_0808, 12345, 80, 6, 0x1234_5678);
//! let murmur3 = hash_murmur3(0xC0A8_0101, 0x0808_0808, 12345, 80, 6, 0x1234_5678);
//! assert_eq!(lookup3, 0xB196_650B);
//! assert_eq!(murmur3, 0x549D_ED1B);
//!
//! let flow: FlowTuple = "192.168.1.1:12345 -> 8.8.8.8:80/tcp".parse().unwrap();
//! assert_eq!(flow.lookup3(0x1234_5678), lookup3);
//! ```
//!
//! The byte-slice forms of both algorithms are available through
//! [`FastHash`] on [`Lookup3`] and [`Murmur3_32`].
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod algorithm;
pub mod error;
pub mod lookup3;
pub mod murmur3;
pub mod tuple;

pub use algorithm::{Algorithm, FlowHash};
pub use error::ParseFlowError;
pub use lookup3::Lookup3;
pub use murmur3::Murmur3_32;
pub use traits::FastHash;
pub use tuple::{
  FlowTuple, PACKED_LEN, PROTO_GRE, PROTO_ICMP, PROTO_SCTP, PROTO_TCP, PROTO_UDP, PackedKey, pack, parse_protocol,
  protocol_name,
};

/// lookup3 hash of a flow 5-tuple.
///
/// The tuple is packed to 13 bytes; `a`, `b` and `c` start at
/// `0xdeadbeef + 13 + seed`, absorb one 12-byte block and the trailing
/// protocol byte, then run Jenkins' `final`. Returns `c`.
#[inline]
#[must_use]
pub fn hash_lookup3(src_ip: u32, dst_ip: u32, src_port: u16, dst_port: u16, protocol: u8, seed: u32) -> u32 {
  lookup3::hash_flow(seed, &FlowTuple::new(src_ip, dst_ip, src_port, dst_port, protocol))
}

/// MurmurHash3 (x86, 32-bit) of a flow 5-tuple's packed 13-byte key.
#[inline]
#[must_use]
pub fn hash_murmur3(src_ip: u32, dst_ip: u32, src_port: u16, dst_port: u16, protocol: u8, seed: u32) -> u32 {
  murmur3::hash_flow(seed, &FlowTuple::new(src_ip, dst_ip, src_port, dst_port, protocol))
}
