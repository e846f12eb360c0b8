//! Core hashing traits for flowhash.
//!
//! This crate holds the trait surface that every hash in the workspace
//! conforms to. It is `no_std` compatible and has zero dependencies.
//!
//! | Trait | Purpose | Implementors |
//! |-------|---------|--------------|
//! | [`FastHash`] | One-shot non-cryptographic hashing of byte slices | lookup3, MurmurHash3 |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod fast_hash;

pub use fast_hash::FastHash;
