//! Checksum traits for the paracrc workspace.
//!
//! This crate holds the streaming interface that every fixed-parameter CRC
//! type in `paracrc` implements. It is `no_std` compatible and has zero
//! dependencies.
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Streaming, non-cryptographic checksums | CRC-8, CRC-16/X-25, CRC-32, CRC-64/XZ |
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

mod checksum;

pub use checksum::Checksum;
