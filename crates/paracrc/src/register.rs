//! Register widths and the integer types that carry them.

use core::fmt::Debug;
use core::ops::BitXor;

use crate::common::{reference, reflect::reflect_register, tables};

/// Supported CRC register widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::FromRepr, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Width {
  #[strum(to_string = "8")]
  Bits8 = 8,
  #[strum(to_string = "16")]
  Bits16 = 16,
  #[strum(to_string = "32")]
  Bits32 = 32,
  #[strum(to_string = "64")]
  Bits64 = 64,
}

impl Width {
  /// Width in bits.
  #[inline]
  #[must_use]
  pub const fn bits(self) -> u32 {
    self as u32
  }

  /// Mask selecting the low `bits()` bits of a `u64`.
  #[inline]
  #[must_use]
  pub const fn mask(self) -> u64 {
    match self {
      Self::Bits64 => u64::MAX,
      other => (1u64 << other.bits()) - 1,
    }
  }
}

mod sealed {
  pub trait Sealed {}
}

/// An unsigned integer usable as a CRC register.
///
/// Implemented for `u8`, `u16`, `u32` and `u64` only. Every engine entry point
/// is generic over `R: Register`, so each width compiles to its own
/// specialized code with no runtime width checks in the byte loop.
///
/// The methods are the handful of width-dependent primitives the algorithms
/// need; all shifts discard bits that leave the register.
pub trait Register:
  sealed::Sealed + Copy + Eq + Default + Debug + Send + Sync + 'static + BitXor<Output = Self>
{
  /// Register width.
  const WIDTH: Width;

  /// Keep the low `WIDTH` bits of `value`.
  fn truncate(value: u64) -> Self;

  /// Zero-extend to `u64`.
  fn widen(self) -> u64;

  /// `byte` aligned to the most-significant byte of the register.
  fn from_top_byte(byte: u8) -> Self;

  /// The most-significant byte of the register.
  fn top_byte(self) -> u8;

  /// Shift left by one byte; for an 8-bit register this yields zero.
  fn shift_byte_out(self) -> Self;

  /// One polynomial-division step (see [`reference`](crate::compute_bitserial)).
  fn divide_step(self, poly: Self) -> Self;

  /// Reverse the bit order across the full register width.
  fn reflect(self) -> Self;

  /// The 256 table entries for `poly`.
  fn build_table(poly: Self) -> [Self; 256];
}

macro_rules! impl_register {
  ($($ty:ty => $width:ident, $step:path, $build:path;)*) => {$(
    impl sealed::Sealed for $ty {}

    impl Register for $ty {
      const WIDTH: Width = Width::$width;

      #[inline]
      fn truncate(value: u64) -> Self {
        value as $ty
      }

      #[inline]
      fn widen(self) -> u64 {
        u64::from(self)
      }

      #[inline]
      fn from_top_byte(byte: u8) -> Self {
        <$ty>::from(byte) << (<$ty>::BITS - 8)
      }

      #[inline]
      fn top_byte(self) -> u8 {
        (self >> (<$ty>::BITS - 8)) as u8
      }

      #[inline]
      fn shift_byte_out(self) -> Self {
        self.checked_shl(8).unwrap_or(0)
      }

      #[inline]
      fn divide_step(self, poly: Self) -> Self {
        $step(self, poly)
      }

      #[inline]
      fn reflect(self) -> Self {
        reflect_register(u64::from(self), Width::$width) as $ty
      }

      #[inline]
      fn build_table(poly: Self) -> [Self; 256] {
        $build(poly)
      }
    }
  )*};
}

impl_register! {
  u8 => Bits8, reference::divide_step8, tables::build_table8;
  u16 => Bits16, reference::divide_step16, tables::build_table16;
  u32 => Bits32, reference::divide_step32, tables::build_table32;
  u64 => Bits64, reference::divide_step64, tables::build_table64;
}
