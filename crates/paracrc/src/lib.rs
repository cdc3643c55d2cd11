//! Parameterized CRC engine.
//!
//! One algorithmic core reproduces any CRC variant described by the Rocksoft
//! model (see the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/)):
//! width, polynomial, initial value, final XOR and independent input/output
//! reflection. Each parameter set can run bit-serially (no tables) or through a
//! 256-entry lookup table; both paths produce identical output.
//!
//! # Layers
//!
//! | Item | Role |
//! |------|------|
//! | [`CrcParams`] | Raw, catalog-style parameter set (`u64` fields) |
//! | [`Algorithm<R>`] | Validated parameter set bound to a register type |
//! | [`Crc<R>`] | Ready-to-use engine owning its table (if any) |
//! | [`LazyCrc<R>`] | `static`-friendly engine, table built once on first use (`std`) |
//! | [`Crc16X25`], [`Crc32IsoHdlc`], ... | Fixed variants with compile-time tables |
//! | [`crc8`], [`crc16`], [`crc32`], [`crc64`] | One-shot entry point per width |
//!
//! `R` is one of `u8`, `u16`, `u32`, `u64` (see [`Register`]).
//!
//! # Example
//!
//! ```rust
//! use paracrc::{Crc, CrcParams, crc16, crc32};
//!
//! assert_eq!(crc16(b"123456789"), 0x906E);
//! assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
//!
//! // Any parameter set, validated at construction.
//! let params = CrcParams::new(16, 0x1021).unwrap().with_reflection(false, false);
//! let xmodem = Crc::<u16>::new(&params).unwrap();
//! assert_eq!(xmodem.checksum(b"123456789"), 0x31C3);
//!
//! // Streaming
//! let mut digest = xmodem.digest();
//! digest.update(b"1234");
//! digest.update(b"56789");
//! assert_eq!(digest.finalize(), 0x31C3);
//! ```
//!
//! # no_std Support
//!
//! The crate is `no_std` compatible. Disable the `std` feature for embedded use;
//! only [`LazyCrc`] and the environment-driven [`config`] need it.
//!
//! # Not Cryptographic
//!
//! CRCs detect accidental corruption. They offer no collision or preimage
//! resistance.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod common;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

pub mod catalog;
pub mod config;
mod engine;
pub mod error;
mod params;
mod register;
mod variants;

pub use common::reflect::{reflect_byte, reflect_register};
pub use common::tables::{CrcTable, build_table8, build_table16, build_table32, build_table64};
#[cfg(feature = "std")]
pub use engine::LazyCrc;
pub use engine::{
  Crc, Crc8, Crc16, Crc32, Crc64, Digest, build_table, checksum, checksum_params, compute_bitserial, compute_tabledriven,
};
pub use error::{ConfigError, Error};
pub use params::{Algorithm, CrcParams};
pub use register::{Register, Width};
pub use variants::{
  Crc8MaximDow, Crc8Smbus, Crc16Arc, Crc16CcittFalse, Crc16Kermit, Crc16Modbus, Crc16X25, Crc16Xmodem, Crc32Bzip2,
  Crc32IsoHdlc, Crc32Iscsi, Crc32Mpeg2, Crc64Ecma182, Crc64Xz, crc8, crc16, crc32, crc64,
};
// Re-export traits for convenience
pub use traits::Checksum;
