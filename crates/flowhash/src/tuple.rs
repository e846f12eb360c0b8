//! Flow 5-tuples and their canonical 13-byte packing.
//!
//! Both hashes consume the same byte sequence: every field written
//! least-significant byte first, in field order, with no padding.
//!
//! ```text
//!  0       4       8    10   12
//! +-------+-------+----+----+--+
//! |src_ip |dst_ip |sprt|dprt|pr|
//! +-------+-------+----+----+--+
//! ```
//!
//! Fields are serialized one by one with `to_le_bytes`, so the packed key is
//! identical on every target regardless of native endianness or struct layout.

#![allow(clippy::indexing_slicing)] // Fixed-size array indexing

use core::{
  fmt,
  net::{Ipv4Addr, SocketAddrV4},
  str::FromStr,
};

use crate::error::ParseFlowError;

/// Length of a packed flow key in bytes.
pub const PACKED_LEN: usize = 13;

/// Internet Control Message Protocol.
pub const PROTO_ICMP: u8 = 1;
/// Transmission Control Protocol.
pub const PROTO_TCP: u8 = 6;
/// User Datagram Protocol.
pub const PROTO_UDP: u8 = 17;
/// Generic Routing Encapsulation.
pub const PROTO_GRE: u8 = 47;
/// Stream Control Transmission Protocol.
pub const PROTO_SCTP: u8 = 132;

const PROTOCOL_NAMES: [(u8, &str); 5] = [
  (PROTO_ICMP, "icmp"),
  (PROTO_TCP, "tcp"),
  (PROTO_UDP, "udp"),
  (PROTO_GRE, "gre"),
  (PROTO_SCTP, "sctp"),
];

/// The identifying fields of an IPv4 network flow.
///
/// Addresses are held as their numeric value, so `192.168.1.1` is
/// `0xC0A8_0101`. Two tuples with equal fields are interchangeable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FlowTuple {
  pub src_ip: u32,
  pub dst_ip: u32,
  pub src_port: u16,
  pub dst_port: u16,
  pub protocol: u8,
}

impl FlowTuple {
  #[inline]
  #[must_use]
  pub const fn new(src_ip: u32, dst_ip: u32, src_port: u16, dst_port: u16, protocol: u8) -> Self {
    Self {
      src_ip,
      dst_ip,
      src_port,
      dst_port,
      protocol,
    }
  }

  /// Build a tuple from typed IPv4 endpoints.
  #[inline]
  #[must_use]
  pub const fn from_ipv4(src: Ipv4Addr, src_port: u16, dst: Ipv4Addr, dst_port: u16, protocol: u8) -> Self {
    Self::new(src.to_bits(), dst.to_bits(), src_port, dst_port, protocol)
  }

  #[inline]
  #[must_use]
  pub const fn src_addr(&self) -> Ipv4Addr {
    Ipv4Addr::from_bits(self.src_ip)
  }

  #[inline]
  #[must_use]
  pub const fn dst_addr(&self) -> Ipv4Addr {
    Ipv4Addr::from_bits(self.dst_ip)
  }

  /// Pack this tuple into its canonical 13-byte key.
  #[inline]
  #[must_use]
  pub const fn pack(&self) -> PackedKey {
    pack(*self)
  }

  /// lookup3 hash of this tuple. See [`crate::hash_lookup3`].
  #[inline]
  #[must_use]
  pub fn lookup3(&self, seed: u32) -> u32 {
    crate::lookup3::hash_flow(seed, self)
  }

  /// MurmurHash3 hash of this tuple. See [`crate::hash_murmur3`].
  #[inline]
  #[must_use]
  pub fn murmur3(&self, seed: u32) -> u32 {
    crate::murmur3::hash_flow(seed, self)
  }
}

/// A flow tuple serialized to exactly [`PACKED_LEN`] bytes.
///
/// Every 13-byte array decodes to exactly one tuple and vice versa, so
/// [`PackedKey::from_bytes`] accepts any input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PackedKey([u8; PACKED_LEN]);

impl PackedKey {
  #[inline]
  #[must_use]
  pub const fn from_bytes(bytes: [u8; PACKED_LEN]) -> Self {
    Self(bytes)
  }

  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; PACKED_LEN] {
    &self.0
  }

  #[inline]
  #[must_use]
  pub const fn into_bytes(self) -> [u8; PACKED_LEN] {
    self.0
  }

  /// Decode the key back into the tuple it was packed from.
  #[inline]
  #[must_use]
  pub const fn to_tuple(&self) -> FlowTuple {
    let b = &self.0;
    FlowTuple {
      src_ip: u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
      dst_ip: u32::from_le_bytes([b[4], b[5], b[6], b[7]]),
      src_port: u16::from_le_bytes([b[8], b[9]]),
      dst_port: u16::from_le_bytes([b[10], b[11]]),
      protocol: b[12],
    }
  }
}

/// Serialize `tuple` into its canonical little-endian 13-byte key.
#[inline]
#[must_use]
pub const fn pack(tuple: FlowTuple) -> PackedKey {
  let s = tuple.src_ip.to_le_bytes();
  let d = tuple.dst_ip.to_le_bytes();
  let sp = tuple.src_port.to_le_bytes();
  let dp = tuple.dst_port.to_le_bytes();
  PackedKey([
    s[0],
    s[1],
    s[2],
    s[3],
    d[0],
    d[1],
    d[2],
    d[3],
    sp[0],
    sp[1],
    dp[0],
    dp[1],
    tuple.protocol,
  ])
}

impl AsRef<[u8]> for PackedKey {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl From<FlowTuple> for PackedKey {
  #[inline]
  fn from(tuple: FlowTuple) -> Self {
    pack(tuple)
  }
}

impl From<PackedKey> for FlowTuple {
  #[inline]
  fn from(key: PackedKey) -> Self {
    key.to_tuple()
  }
}

/// Well-known name for an IP protocol number, if it has one.
#[must_use]
pub fn protocol_name(protocol: u8) -> Option<&'static str> {
  PROTOCOL_NAMES
    .iter()
    .find(|(number, _)| *number == protocol)
    .map(|(_, name)| *name)
}

/// Parse a protocol given by name (`tcp`, `UDP`, ...) or decimal number.
pub fn parse_protocol(s: &str) -> Result<u8, ParseFlowError> {
  let s = s.trim();
  if let Some((number, _)) = PROTOCOL_NAMES.iter().find(|(_, name)| name.eq_ignore_ascii_case(s)) {
    return Ok(*number);
  }
  s.parse().map_err(|_| ParseFlowError::InvalidProtocol)
}

fn parse_endpoint(s: &str) -> Result<SocketAddrV4, ParseFlowError> {
  s.trim().parse().map_err(|_| ParseFlowError::InvalidEndpoint)
}

/// Renders as `SRC:PORT -> DST:PORT/PROTO`.
impl fmt::Display for FlowTuple {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}:{} -> {}:{}/",
      self.src_addr(),
      self.src_port,
      self.dst_addr(),
      self.dst_port
    )?;
    match protocol_name(self.protocol) {
      Some(name) => f.write_str(name),
      None => write!(f, "{}", self.protocol),
    }
  }
}

/// Parses the [`Display`](fmt::Display) form, e.g. `10.0.0.1:5353 -> 10.0.0.2:53/udp`.
impl FromStr for FlowTuple {
  type Err = ParseFlowError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (src, rest) = s.split_once("->").ok_or(ParseFlowError::MissingArrow)?;
    let (dst, protocol) = rest.rsplit_once('/').ok_or(ParseFlowError::MissingProtocol)?;

    let src = parse_endpoint(src)?;
    let dst = parse_endpoint(dst)?;
    let protocol = parse_protocol(protocol)?;

    Ok(Self::from_ipv4(*src.ip(), src.port(), *dst.ip(), dst.port(), protocol))
  }
}
