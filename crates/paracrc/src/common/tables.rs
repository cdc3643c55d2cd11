//! Const-fn CRC lookup table generation.
//!
//! Entry `i` of a table is the register obtained by placing byte `i` in the
//! most-significant byte of an otherwise zero register and running eight
//! division steps. Nothing else is baked in: initial value, reflection and the
//! final XOR are applied when the table is used, so one table serves every
//! parameter set that shares a width and polynomial.
//!
//! | Width | Table size |
//! |-------|------------|
//! | 8-bit | 256 B |
//! | 16-bit | 512 B |
//! | 32-bit | 1 KiB |
//! | 64-bit | 2 KiB |

// All indexing uses loop indices bounded by 256 or a `u8` index into a 256-entry array.
#![allow(clippy::indexing_slicing)]

use super::reference::{divide_step8, divide_step16, divide_step32, divide_step64};
use crate::register::Register;

macro_rules! define_table_builder {
  ($($name:ident: $ty:ty => $step:ident),* $(,)?) => {$(
    /// Generate the 256-entry lookup table for `poly` at this width.
    ///
    /// Usable in `const` context, so fixed variants embed their tables in the binary.
    #[must_use]
    pub const fn $name(poly: $ty) -> [$ty; 256] {
      let mut table = [0; 256];
      let mut index = 0usize;
      while index < 256 {
        let mut rem = (index as $ty) << (<$ty>::BITS - 8);
        let mut bit = 0;
        while bit < 8 {
          rem = $step(rem, poly);
          bit += 1;
        }
        table[index] = rem;
        index += 1;
      }
      table
    }
  )*};
}

define_table_builder!(
  build_table8: u8 => divide_step8,
  build_table16: u16 => divide_step16,
  build_table32: u32 => divide_step32,
  build_table64: u64 => divide_step64,
);

/// A 256-entry CRC lookup table.
///
/// Immutable once constructed. A table built with [`CrcTable::new`] (or
/// [`build_table`](crate::build_table)) is a pure function of the polynomial
/// and width, so it may be shared freely between threads and computations.
#[derive(Clone, PartialEq, Eq)]
pub struct CrcTable<R> {
  entries: [R; 256],
}

impl<R: Register> CrcTable<R> {
  /// Generate the table for `poly`.
  #[must_use]
  pub fn new(poly: R) -> Self {
    #[cfg(feature = "defmt")]
    defmt::trace!("paracrc: building {}-bit table for poly {:#x}", R::WIDTH.bits(), poly.widen());

    Self { entries: R::build_table(poly) }
  }
}

impl<R> CrcTable<R> {
  /// Wrap caller-supplied entries.
  ///
  /// The entries are not checked. They must have been generated exactly as
  /// [`CrcTable::new`] does for the polynomial they will be used with;
  /// anything else silently produces wrong checksums.
  #[inline]
  #[must_use]
  pub const fn from_entries(entries: [R; 256]) -> Self {
    Self { entries }
  }

  /// All 256 entries.
  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &[R; 256] {
    &self.entries
  }
}

impl<R: Copy> CrcTable<R> {
  /// Entry for byte value `index`.
  #[inline]
  #[must_use]
  pub fn entry(&self, index: u8) -> R {
    self.entries[usize::from(index)]
  }
}

impl<R: Register> core::fmt::Debug for CrcTable<R> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("CrcTable")
      .field("width", &R::WIDTH)
      .field("entry1", &self.entries[1])
      .field("entry128", &self.entries[128])
      .finish_non_exhaustive()
  }
}
