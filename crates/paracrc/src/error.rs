//! Error types for parameter validation and table access.
//!
//! CRC computation itself never fails: once a parameter set is validated, every
//! input (including the empty one) has a checksum. Errors only surface while a
//! configuration is being turned into an engine.

use thiserror::Error;

use crate::register::Width;

/// Errors returned by `paracrc`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
  /// The parameter set cannot describe a supported CRC.
  #[error("invalid CRC configuration: {0}")]
  InvalidConfiguration(#[from] ConfigError),

  /// A table-driven computation was requested before its lookup table was built.
  #[error("CRC lookup table has not been initialized")]
  TableNotInitialized,
}

/// Why a parameter set was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum ConfigError {
  /// Only 8, 16, 32 and 64-bit registers are supported.
  #[error("unsupported width of {0} bits (expected 8, 16, 32 or 64)")]
  UnsupportedWidth(u8),

  /// A polynomial, initial value or XOR mask has bits above the register width.
  #[error("{field} {value:#x} does not fit in {width} bits")]
  ValueOutOfRange {
    /// Name of the offending field.
    field: &'static str,
    /// The rejected value.
    value: u64,
    /// Width of the parameter set.
    width: Width,
  },

  /// The parameter set's width does not match the register type it is bound to.
  #[error("{found}-bit parameter set cannot drive a {expected}-bit register")]
  WidthMismatch {
    /// Width of the register type.
    expected: Width,
    /// Width declared by the parameter set.
    found: Width,
  },
}
