//! The flow text parser never panics, and whatever it accepts re-renders to
//! a string that parses back to the same flow.

#![no_main]

use flowhash::FlowTuple;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
  if let Ok(flow) = input.parse::<FlowTuple>() {
    let rendered = flow.to_string();
    assert_eq!(rendered.parse::<FlowTuple>(), Ok(flow));
  }
});
