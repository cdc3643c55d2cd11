//! Bit reflection (bit-order reversal).
//!
//! "Reflected" CRCs process bits least-significant first. The engine always
//! runs MSB-first internally and reflects at the edges: each input byte on the
//! way in (`reflect_in`) and the whole register on the way out (`reflect_out`).
//!
//! Both helpers use portable shift/mask stages. A register reflection is a full
//! bit reversal across the register width, which is *not* the same thing as a
//! byte swap.

use crate::register::Width;

/// Reverse the 8 bits of `value` (bit 0 ↔ bit 7, bit 1 ↔ bit 6, ...).
#[inline]
#[must_use]
pub const fn reflect_byte(value: u8) -> u8 {
  let v = value.rotate_left(4);
  let v = ((v & 0xCC) >> 2) | ((v & 0x33) << 2);
  ((v & 0xAA) >> 1) | ((v & 0x55) << 1)
}

/// Reverse the low `width` bits of `value`.
///
/// Bits above `width` are ignored, and the result never has them set.
#[inline]
#[must_use]
pub const fn reflect_register(value: u64, width: Width) -> u64 {
  let mut v = value & width.mask();
  v = ((v >> 1) & 0x5555_5555_5555_5555) | ((v & 0x5555_5555_5555_5555) << 1);
  v = ((v >> 2) & 0x3333_3333_3333_3333) | ((v & 0x3333_3333_3333_3333) << 2);
  v = ((v >> 4) & 0x0F0F_0F0F_0F0F_0F0F) | ((v & 0x0F0F_0F0F_0F0F_0F0F) << 4);
  v = ((v >> 8) & 0x00FF_00FF_00FF_00FF) | ((v & 0x00FF_00FF_00FF_00FF) << 8);
  v = ((v >> 16) & 0x0000_FFFF_0000_FFFF) | ((v & 0x0000_FFFF_0000_FFFF) << 16);
  v = v.rotate_left(32);
  v >> (64 - width.bits())
}
