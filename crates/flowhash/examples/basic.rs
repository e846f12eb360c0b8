//! Hash the reference 5-tuple with both algorithms.
//!
//! Run with: `cargo run --example basic -p flowhash`

use std::net::Ipv4Addr;

use flowhash::{FastHash, FlowTuple, Murmur3_32, PROTO_TCP, hash_lookup3, hash_murmur3};

fn main() {
  let src_ip = 0xC0A8_0101; // 192.168.1.1
  let dst_ip = 0x0808_0808; // 8.8.8.8
  let src_port = 12345;
  let dst_port = 80;
  let protocol = PROTO_TCP;
  let seed = 0x1234_5678;

  let lookup3 = hash_lookup3(src_ip, dst_ip, src_port, dst_port, protocol, seed);
  println!("Jenkins lookup3 hash: 0x{lookup3:08X}");
  assert_eq!(lookup3, 0xB196_650B);

  let murmur3 = hash_murmur3(src_ip, dst_ip, src_port, dst_port, protocol, seed);
  println!("MurmurHash3 (5-tuple) = 0x{murmur3:08X}");
  assert_eq!(murmur3, 0x549D_ED1B);

  // Same flow, built from typed addresses.
  let flow = FlowTuple::from_ipv4(Ipv4Addr::new(192, 168, 1, 1), src_port, Ipv4Addr::new(8, 8, 8, 8), dst_port, protocol);
  println!("{flow}");
  assert_eq!(flow.lookup3(seed), lookup3);

  // The MurmurHash3 flow hash is the byte hash of the packed key.
  assert_eq!(Murmur3_32::hash_with_seed(seed, flow.pack().as_bytes()), murmur3);
}
