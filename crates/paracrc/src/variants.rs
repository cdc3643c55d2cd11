//! Fixed CRC variants with compile-time tables.
//!
//! Each type is a streaming [`Checksum`] whose parameters and lookup table are
//! baked in at compile time. The width entry points [`crc8`], [`crc16`],
//! [`crc32`] and [`crc64`] compute one-shot checksums with the default variant
//! for their width.

use traits::Checksum;

use crate::{
  common::tables::{build_table8, build_table16, build_table32, build_table64},
  params::CrcParams,
};

define_crc_type! {
  /// CRC-8/SMBUS (poly 0x07, unreflected). The default 8-bit variant.
  pub struct Crc8Smbus: u8 {
    params: CrcParams::CRC8_SMBUS,
    table: build_table8,
  }
}

define_crc_type! {
  /// CRC-8/MAXIM-DOW (poly 0x31, reflected), used by 1-Wire devices.
  pub struct Crc8MaximDow: u8 {
    params: CrcParams::CRC8_MAXIM_DOW,
    table: build_table8,
  }
}

define_crc_type! {
  /// CRC-16/ARC (poly 0x8005, reflected).
  pub struct Crc16Arc: u16 {
    params: CrcParams::CRC16_ARC,
    table: build_table16,
  }
}

define_crc_type! {
  /// CRC-16/CCITT-FALSE, catalogued as CRC-16/IBM-3740 (poly 0x1021, init 0xFFFF, unreflected).
  pub struct Crc16CcittFalse: u16 {
    params: CrcParams::CRC16_IBM_3740,
    table: build_table16,
  }
}

define_crc_type! {
  /// CRC-16/X-25, catalogued as CRC-16/IBM-SDLC. The default 16-bit variant.
  ///
  /// Poly 0x1021, init and final XOR 0xFFFF, both reflections. This is the
  /// HDLC/PPP frame check sequence.
  pub struct Crc16X25: u16 {
    params: CrcParams::CRC16_IBM_SDLC,
    table: build_table16,
  }
}

define_crc_type! {
  /// CRC-16/XMODEM (poly 0x1021, init 0, unreflected).
  pub struct Crc16Xmodem: u16 {
    params: CrcParams::CRC16_XMODEM,
    table: build_table16,
  }
}

define_crc_type! {
  /// CRC-16/KERMIT (poly 0x1021, init 0, reflected).
  pub struct Crc16Kermit: u16 {
    params: CrcParams::CRC16_KERMIT,
    table: build_table16,
  }
}

define_crc_type! {
  /// CRC-16/MODBUS (poly 0x8005, init 0xFFFF, reflected).
  pub struct Crc16Modbus: u16 {
    params: CrcParams::CRC16_MODBUS,
    table: build_table16,
  }
}

define_crc_type! {
  /// CRC-32/ISO-HDLC, the "CRC-32" of Ethernet, gzip and PNG. The default 32-bit variant.
  pub struct Crc32IsoHdlc: u32 {
    params: CrcParams::CRC32_ISO_HDLC,
    table: build_table32,
  }
}

define_crc_type! {
  /// CRC-32/ISCSI (CRC-32C, Castagnoli polynomial 0x1EDC6F41).
  pub struct Crc32Iscsi: u32 {
    params: CrcParams::CRC32_ISCSI,
    table: build_table32,
  }
}

define_crc_type! {
  /// CRC-32/BZIP2 (poly 0x04C11DB7, unreflected, inverted).
  pub struct Crc32Bzip2: u32 {
    params: CrcParams::CRC32_BZIP2,
    table: build_table32,
  }
}

define_crc_type! {
  /// CRC-32/MPEG-2 (poly 0x04C11DB7, unreflected, no final XOR).
  pub struct Crc32Mpeg2: u32 {
    params: CrcParams::CRC32_MPEG2,
    table: build_table32,
  }
}

define_crc_type! {
  /// CRC-64/ECMA-182 (unreflected, no init or final XOR).
  pub struct Crc64Ecma182: u64 {
    params: CrcParams::CRC64_ECMA_182,
    table: build_table64,
  }
}

define_crc_type! {
  /// CRC-64/XZ (ECMA polynomial, reflected, inverted). The default 64-bit variant.
  pub struct Crc64Xz: u64 {
    params: CrcParams::CRC64_XZ,
    table: build_table64,
  }
}

/// CRC-8/SMBUS of `data`.
#[inline]
#[must_use]
pub fn crc8(data: &[u8]) -> u8 {
  Crc8Smbus::checksum(data)
}

/// CRC-16/X-25 of `data`.
#[inline]
#[must_use]
pub fn crc16(data: &[u8]) -> u16 {
  Crc16X25::checksum(data)
}

/// CRC-32/ISO-HDLC of `data`.
#[inline]
#[must_use]
pub fn crc32(data: &[u8]) -> u32 {
  Crc32IsoHdlc::checksum(data)
}

/// CRC-64/XZ of `data`.
#[inline]
#[must_use]
pub fn crc64(data: &[u8]) -> u64 {
  Crc64Xz::checksum(data)
}
