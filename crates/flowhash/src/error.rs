//! Errors raised while parsing flows from text.
//!
//! Hashing itself is total and never fails; only the textual
//! `SRC:PORT -> DST:PORT/PROTO` form can be malformed.

use core::fmt;

/// A flow string could not be parsed.
///
/// # Examples
///
/// ```
/// use flowhash::{FlowTuple, ParseFlowError};
///
/// let err = "10.0.0.1:53 10.0.0.2:53/udp".parse::<FlowTuple>().unwrap_err();
/// assert_eq!(err, ParseFlowError::MissingArrow);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseFlowError {
  /// No `->` between the source and destination endpoints.
  MissingArrow,
  /// No `/PROTO` suffix after the destination endpoint.
  MissingProtocol,
  /// An endpoint is not a valid `IPV4:PORT` pair.
  InvalidEndpoint,
  /// The protocol is neither a known name nor a number in `0..=255`.
  InvalidProtocol,
}

impl ParseFlowError {
  /// Short, static description of the failure.
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::MissingArrow => "missing `->` between endpoints",
      Self::MissingProtocol => "missing `/PROTO` after destination",
      Self::InvalidEndpoint => "invalid IPv4 endpoint",
      Self::InvalidProtocol => "invalid protocol",
    }
  }
}

impl fmt::Display for ParseFlowError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl core::error::Error for ParseFlowError {}
