//! Table-driven CRC computation, one byte per lookup.
//!
//! Each iteration replaces eight single-bit division steps with one table
//! lookup and two shifts:
//!
//! ```text
//! index = byte ^ top_byte(reg)
//! reg   = table[index] ^ (reg << 8)
//! ```
//!
//! Correctness depends entirely on the table having been generated for the
//! same polynomial and width (see [`tables`](super::tables)).

use super::{reflect::reflect_byte, tables::CrcTable};
use crate::register::Register;

/// Fold `data` into `reg` using `table`.
///
/// Returns the raw register; the caller applies output reflection and the
/// final XOR.
#[inline]
#[must_use]
pub fn update<R: Register>(mut reg: R, table: &CrcTable<R>, reflect_in: bool, data: &[u8]) -> R {
  for &byte in data {
    let byte = if reflect_in { reflect_byte(byte) } else { byte };
    let index = byte ^ reg.top_byte();
    reg = table.entry(index) ^ reg.shift_byte_out();
  }
  reg
}
