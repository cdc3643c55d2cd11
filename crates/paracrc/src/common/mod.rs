//! Shared CRC building blocks.
//!
//! - Bit reflection helpers
//! - Bit-serial reference computation (the source of truth)
//! - Const-fn lookup table generation
//! - Table-driven byte-at-a-time computation

pub mod portable;
pub mod reference;
pub mod reflect;
pub mod tables;
