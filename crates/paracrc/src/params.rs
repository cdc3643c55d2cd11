//! CRC algorithm parameters.
//!
//! [`CrcParams`] is the raw, catalog-style description of a CRC variant
//! following the conventions of the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/). It stores
//! every value in a `u64` so one type covers all widths. [`Algorithm<R>`] is the
//! validated form, bound to a register type, that the engine actually runs.

use crate::{
  error::{ConfigError, Error},
  register::{Register, Width},
};

/// CRC algorithm parameters.
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC (8, 16, 32 or 64)
/// - `polynomial`: The generator polynomial in normal form (without the implicit high bit)
/// - `initial`: Register value before the first input byte
/// - `xor_out`: Value XORed into the register after output reflection
/// - `reflect_in`: If true, reflect each input byte before processing
/// - `reflect_out`: If true, reflect the final register before `xor_out`
/// - `use_table`: Compute through a 256-entry lookup table instead of bit by bit
///
/// `use_table` never changes the result, only the speed/memory trade-off.
///
/// Any bit pattern of the right width is a legal polynomial, initial value or
/// XOR mask (including zero and all-ones). Values with bits above `width` are
/// rejected when the parameters are validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CrcParams {
  /// Width in bits (8, 16, 32 or 64).
  pub width: u8,
  /// Generator polynomial (normal form, without implicit high bit).
  pub polynomial: u64,
  /// Initial value for the CRC register.
  pub initial: u64,
  /// XOR value applied to the final CRC.
  pub xor_out: u64,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
  /// Use the table-driven path.
  pub use_table: bool,
}

impl CrcParams {
  /// CRC-8/SMBUS - SMBus PEC, ATM HEC
  pub const CRC8_SMBUS: Self = Self::normal(8, 0x07, 0x00, 0x00);

  /// CRC-8/MAXIM-DOW - 1-Wire, iButton
  pub const CRC8_MAXIM_DOW: Self = Self::reflected(8, 0x31, 0x00, 0x00);

  /// CRC-8/ROHC - Robust Header Compression
  pub const CRC8_ROHC: Self = Self::reflected(8, 0x07, 0xFF, 0x00);

  /// CRC-16/ARC - ARC, LHA, legacy IBM protocols
  pub const CRC16_ARC: Self = Self::reflected(16, 0x8005, 0x0000, 0x0000);

  /// CRC-16/IBM-3740, better known as CRC-16/CCITT-FALSE
  pub const CRC16_IBM_3740: Self = Self::normal(16, 0x1021, 0xFFFF, 0x0000);

  /// CRC-16/IBM-SDLC, better known as CRC-16/X-25 - HDLC, X.25, PPP FCS
  pub const CRC16_IBM_SDLC: Self = Self::reflected(16, 0x1021, 0xFFFF, 0xFFFF);

  /// CRC-16/XMODEM - XMODEM, ZMODEM, Bluetooth
  pub const CRC16_XMODEM: Self = Self::normal(16, 0x1021, 0x0000, 0x0000);

  /// CRC-16/KERMIT - Kermit, Bluetooth HCI
  pub const CRC16_KERMIT: Self = Self::reflected(16, 0x1021, 0x0000, 0x0000);

  /// CRC-16/MODBUS - Modbus RTU
  pub const CRC16_MODBUS: Self = Self::reflected(16, 0x8005, 0xFFFF, 0x0000);

  /// CRC-16/USB - USB data packets
  pub const CRC16_USB: Self = Self::reflected(16, 0x8005, 0xFFFF, 0xFFFF);

  /// CRC-16/RIELLO - reflected, with an asymmetric initial value
  pub const CRC16_RIELLO: Self = Self::reflected(16, 0x1021, 0xB2AA, 0x0000);

  /// CRC-32/ISO-HDLC - Ethernet, gzip, zip, PNG
  pub const CRC32_ISO_HDLC: Self = Self::reflected(32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF);

  /// CRC-32/ISCSI (CRC-32C, Castagnoli) - iSCSI, SCTP, ext4, Btrfs
  pub const CRC32_ISCSI: Self = Self::reflected(32, 0x1EDC_6F41, 0xFFFF_FFFF, 0xFFFF_FFFF);

  /// CRC-32/BZIP2 - bzip2, AAL5
  pub const CRC32_BZIP2: Self = Self::normal(32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF);

  /// CRC-32/MPEG-2 - MPEG-2 transport streams
  pub const CRC32_MPEG2: Self = Self::normal(32, 0x04C1_1DB7, 0xFFFF_FFFF, 0x0000_0000);

  /// CRC-32/CKSUM - POSIX `cksum` (without the length suffix)
  pub const CRC32_CKSUM: Self = Self::normal(32, 0x04C1_1DB7, 0x0000_0000, 0xFFFF_FFFF);

  /// CRC-64/ECMA-182 - ECMA-182 tape cartridges
  pub const CRC64_ECMA_182: Self = Self::normal(64, 0x42F0_E1EB_A9EA_3693, 0, 0);

  /// CRC-64/XZ - XZ Utils, 7-Zip
  pub const CRC64_XZ: Self = Self::reflected(64, 0x42F0_E1EB_A9EA_3693, u64::MAX, u64::MAX);

  /// CRC-64/GO-ISO - Go `hash/crc64` ISO table
  pub const CRC64_GO_ISO: Self = Self::reflected(64, 0x1B, u64::MAX, u64::MAX);

  /// CRC-64/NVME - NVMe specification
  pub const CRC64_NVME: Self = Self::reflected(64, 0xAD93_D235_94C9_3659, u64::MAX, u64::MAX);

  const fn normal(width: u8, polynomial: u64, initial: u64, xor_out: u64) -> Self {
    Self { width, polynomial, initial, xor_out, reflect_in: false, reflect_out: false, use_table: true }
  }

  const fn reflected(width: u8, polynomial: u64, initial: u64, xor_out: u64) -> Self {
    Self { width, polynomial, initial, xor_out, reflect_in: true, reflect_out: true, use_table: true }
  }

  /// Start a parameter set for `width` bits and `polynomial`.
  ///
  /// Defaults: zero initial value, zero final XOR, no reflection, table-driven.
  ///
  /// # Errors
  ///
  /// [`Error::InvalidConfiguration`] if `width` is not 8, 16, 32 or 64, or if
  /// `polynomial` does not fit in `width` bits.
  pub fn new(width: u8, polynomial: u64) -> Result<Self, Error> {
    let params = Self::normal(width, polynomial, 0, 0);
    params.validate()?;
    Ok(params)
  }

  /// Set the initial register value.
  #[must_use]
  pub const fn with_initial(mut self, initial: u64) -> Self {
    self.initial = initial;
    self
  }

  /// Set the final XOR value.
  #[must_use]
  pub const fn with_xor_out(mut self, xor_out: u64) -> Self {
    self.xor_out = xor_out;
    self
  }

  /// Set input and output reflection independently.
  #[must_use]
  pub const fn with_reflection(mut self, reflect_in: bool, reflect_out: bool) -> Self {
    self.reflect_in = reflect_in;
    self.reflect_out = reflect_out;
    self
  }

  /// Choose between the table-driven and bit-serial paths.
  #[must_use]
  pub const fn with_table(mut self, use_table: bool) -> Self {
    self.use_table = use_table;
    self
  }

  /// Check that the parameters describe a supported CRC and return its width.
  ///
  /// # Errors
  ///
  /// [`Error::InvalidConfiguration`] if the width is unsupported or any value has
  /// bits set above the width.
  pub fn validate(&self) -> Result<Width, Error> {
    let width = Width::from_repr(self.width).ok_or(ConfigError::UnsupportedWidth(self.width))?;
    let mask = width.mask();
    for (field, value) in [("polynomial", self.polynomial), ("initial", self.initial), ("xor_out", self.xor_out)] {
      if value & !mask != 0 {
        return Err(ConfigError::ValueOutOfRange { field, value, width }.into());
      }
    }
    Ok(width)
  }
}

/// A validated parameter set bound to register type `R`.
///
/// Holding an `Algorithm<R>` proves the parameters fit the register, so the
/// engine never re-checks them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Algorithm<R> {
  polynomial: R,
  initial: R,
  xor_out: R,
  reflect_in: bool,
  reflect_out: bool,
  use_table: bool,
}

impl<R: Register> Algorithm<R> {
  /// Validate `params` for register type `R`.
  ///
  /// # Errors
  ///
  /// [`Error::InvalidConfiguration`] if the parameters are invalid or their
  /// width differs from `R`'s.
  pub fn new(params: &CrcParams) -> Result<Self, Error> {
    let found = params.validate()?;
    if found != R::WIDTH {
      return Err(ConfigError::WidthMismatch { expected: R::WIDTH, found }.into());
    }
    Ok(Self {
      polynomial: R::truncate(params.polynomial),
      initial: R::truncate(params.initial),
      xor_out: R::truncate(params.xor_out),
      reflect_in: params.reflect_in,
      reflect_out: params.reflect_out,
      use_table: params.use_table,
    })
  }

  /// Back to the raw parameter form.
  #[must_use]
  pub fn params(&self) -> CrcParams {
    CrcParams {
      width: R::WIDTH as u8,
      polynomial: self.polynomial.widen(),
      initial: self.initial.widen(),
      xor_out: self.xor_out.widen(),
      reflect_in: self.reflect_in,
      reflect_out: self.reflect_out,
      use_table: self.use_table,
    }
  }

  /// Apply output reflection and the final XOR to a raw register.
  #[inline]
  #[must_use]
  pub fn finish(&self, reg: R) -> R {
    let reg = if self.reflect_out { reg.reflect() } else { reg };
    reg ^ self.xor_out
  }
}

impl<R: Copy> Algorithm<R> {
  /// Assemble an algorithm from values already typed for `R`.
  ///
  /// Infallible: every value of `R` is a legal polynomial, initial value and
  /// XOR mask.
  #[must_use]
  pub const fn from_parts(
    polynomial: R,
    initial: R,
    xor_out: R,
    reflect_in: bool,
    reflect_out: bool,
    use_table: bool,
  ) -> Self {
    Self { polynomial, initial, xor_out, reflect_in, reflect_out, use_table }
  }

  /// Generator polynomial.
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> R {
    self.polynomial
  }

  /// Initial register value.
  #[inline]
  #[must_use]
  pub const fn initial(&self) -> R {
    self.initial
  }

  /// Final XOR value.
  #[inline]
  #[must_use]
  pub const fn xor_out(&self) -> R {
    self.xor_out
  }

  /// Whether input bytes are reflected.
  #[inline]
  #[must_use]
  pub const fn reflect_in(&self) -> bool {
    self.reflect_in
  }

  /// Whether the final register is reflected.
  #[inline]
  #[must_use]
  pub const fn reflect_out(&self) -> bool {
    self.reflect_out
  }

  /// Whether the table-driven path is requested.
  #[inline]
  #[must_use]
  pub const fn use_table(&self) -> bool {
    self.use_table
  }

  /// The same algorithm with the path preference replaced.
  #[must_use]
  pub const fn with_table(mut self, use_table: bool) -> Self {
    self.use_table = use_table;
    self
  }
}

impl<R: Register> TryFrom<&CrcParams> for Algorithm<R> {
  type Error = Error;

  fn try_from(params: &CrcParams) -> Result<Self, Error> {
    Self::new(params)
  }
}
