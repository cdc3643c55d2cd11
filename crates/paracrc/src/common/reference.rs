//! Bit-serial reference computation.
//!
//! This is the canonical "source of truth" for every parameter set. It
//! processes one bit per step, mirroring polynomial division over GF(2)
//! directly:
//!
//! 1. XOR the (optionally reflected) input byte into the top byte of the register.
//! 2. Eight times: shift left by one; if a set bit fell off the top, XOR in the
//!    polynomial.
//!
//! The table-driven path in [`portable`](super::portable) must produce results
//! identical to this one for every width, parameter set and input.

use super::reflect::reflect_byte;
use crate::register::Register;

macro_rules! define_divide_step {
  ($($name:ident: $ty:ty),* $(,)?) => {$(
    /// One polynomial-division step on a register of this width.
    ///
    /// Bits shifted out past the top of the register are discarded.
    #[inline]
    #[must_use]
    pub const fn $name(reg: $ty, poly: $ty) -> $ty {
      if reg >> (<$ty>::BITS - 1) != 0 { (reg << 1) ^ poly } else { reg << 1 }
    }
  )*};
}

define_divide_step!(divide_step8: u8, divide_step16: u16, divide_step32: u32, divide_step64: u64);

/// Fold `data` into `reg` one bit at a time.
///
/// Returns the raw register; the caller applies output reflection and the
/// final XOR.
#[inline]
#[must_use]
pub fn update<R: Register>(mut reg: R, poly: R, reflect_in: bool, data: &[u8]) -> R {
  for &byte in data {
    let byte = if reflect_in { reflect_byte(byte) } else { byte };
    reg = reg ^ R::from_top_byte(byte);
    for _ in 0..8 {
      reg = reg.divide_step(poly);
    }
  }
  reg
}
