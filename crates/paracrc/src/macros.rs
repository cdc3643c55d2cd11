//! Internal macros for fixed CRC variant generation.
//!
//! Every fixed variant (CRC-16/X-25, CRC-32/ISO-HDLC, ...) has the same shape
//! and differs only in its register type and parameter set, so one macro
//! stamps them all out.

/// Generate a fixed CRC variant type with its `Checksum` implementation.
///
/// This macro creates:
/// - The struct definition with `state: $reg` and the register it resets to
/// - `PARAMS` and `ALGORITHM` associated constants
/// - A compile-time check that the parameters fit the register
/// - A `static` lookup table generated at compile time
/// - `table()` and `mode()` accessors
/// - `Checksum` trait implementation
///
/// # Arguments
///
/// - `$name`: The type name (e.g., `Crc16X25`)
/// - `$reg`: The register type (`u8`, `u16`, `u32` or `u64`)
/// - `$params`: A `CrcParams` constant of the same width
/// - `$build`: The const table builder for that width (e.g., `build_table16`)
macro_rules! define_crc_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident: $reg:ty {
      params: $params:expr,
      table: $build:path,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    $vis struct $name {
      state: $reg,
      start: $reg,
    }

    const _: () = {
      let params: $crate::CrcParams = $params;
      assert!(params.width as u32 == <$reg>::BITS, "parameter width does not match register");
      assert!(params.polynomial <= <$reg>::MAX as u64, "polynomial does not fit register");
      assert!(params.initial <= <$reg>::MAX as u64, "initial value does not fit register");
      assert!(params.xor_out <= <$reg>::MAX as u64, "xor_out does not fit register");
    };

    impl $name {
      /// Raw parameter set.
      pub const PARAMS: $crate::CrcParams = $params;

      /// Validated algorithm.
      pub const ALGORITHM: $crate::Algorithm<$reg> = $crate::Algorithm::from_parts(
        Self::PARAMS.polynomial as $reg,
        Self::PARAMS.initial as $reg,
        Self::PARAMS.xor_out as $reg,
        Self::PARAMS.reflect_in,
        Self::PARAMS.reflect_out,
        Self::PARAMS.use_table,
      );

      /// The lookup table, generated at compile time.
      #[inline]
      #[must_use]
      pub fn table() -> &'static $crate::CrcTable<$reg> {
        static TABLE: $crate::CrcTable<$reg> =
          $crate::CrcTable::from_entries($build($name::PARAMS.polynomial as $reg));
        &TABLE
      }

      /// The path `update` takes under the current configuration.
      #[inline]
      #[must_use]
      pub fn mode() -> $crate::config::Mode {
        $crate::config::mode(Self::PARAMS.use_table)
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        <Self as $crate::Checksum>::new()
      }
    }

    impl $crate::Checksum for $name {
      const OUTPUT_SIZE: usize = core::mem::size_of::<$reg>();
      type Output = $reg;

      #[inline]
      fn new() -> Self {
        let start = Self::ALGORITHM.initial();
        Self { state: start, start }
      }

      #[inline]
      fn with_initial(initial: $reg) -> Self {
        Self { state: initial, start: initial }
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        let alg = &Self::ALGORITHM;
        self.state = match Self::mode() {
          $crate::config::Mode::Table => {
            $crate::common::portable::update(self.state, Self::table(), alg.reflect_in(), data)
          }
          $crate::config::Mode::Bitwise => {
            $crate::common::reference::update(self.state, alg.polynomial(), alg.reflect_in(), data)
          }
        };
      }

      #[inline]
      fn finalize(&self) -> $reg {
        Self::ALGORITHM.finish(self.state)
      }

      #[inline]
      fn reset(&mut self) {
        self.state = self.start;
      }
    }
  };
}
