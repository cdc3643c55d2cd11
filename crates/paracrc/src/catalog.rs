//! Named CRC parameter sets.
//!
//! Names and check values follow the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/). Each entry's
//! `check` is the CRC of the ASCII string `"123456789"`.
//!
//! ```rust
//! let entry = paracrc::catalog::find("crc-16/x-25").unwrap();
//! assert_eq!(entry.name, "CRC-16/IBM-SDLC");
//! assert_eq!(entry.compute(b"123456789"), Ok(0x906E));
//! ```

use crate::{engine::checksum_params, error::Error, params::CrcParams};

/// Input over which every catalog check value is computed.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// A named parameter set with its published check value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CatalogEntry {
  /// Catalogue name.
  pub name: &'static str,
  /// Other names the same parameter set is known by.
  pub aliases: &'static [&'static str],
  /// The parameters.
  pub params: CrcParams,
  /// CRC of [`CHECK_INPUT`], zero-extended.
  pub check: u64,
}

impl CatalogEntry {
  /// Whether `name` matches this entry's name or an alias, ignoring ASCII case.
  #[must_use]
  pub fn matches(&self, name: &str) -> bool {
    self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
  }

  /// CRC of `data` under this entry's parameters, zero-extended.
  ///
  /// # Errors
  ///
  /// [`Error::InvalidConfiguration`] if the entry's parameters do not validate.
  pub fn compute(&self, data: &[u8]) -> Result<u64, Error> {
    checksum_params(&self.params, data)
  }

  /// Recompute the check value and compare it with the published one.
  #[must_use]
  pub fn verify(&self) -> bool {
    checksum_params(&self.params, CHECK_INPUT) == Ok(self.check)
  }
}

const fn entry(
  name: &'static str,
  aliases: &'static [&'static str],
  params: CrcParams,
  check: u64,
) -> CatalogEntry {
  CatalogEntry { name, aliases, params, check }
}

/// Every named parameter set.
pub const CATALOG: &[CatalogEntry] = &[
  entry("CRC-8/SMBUS", &["CRC-8"], CrcParams::CRC8_SMBUS, 0xF4),
  entry("CRC-8/MAXIM-DOW", &["CRC-8/MAXIM", "DOW-CRC"], CrcParams::CRC8_MAXIM_DOW, 0xA1),
  entry("CRC-8/ROHC", &[], CrcParams::CRC8_ROHC, 0xD0),
  entry("CRC-16/ARC", &["ARC", "CRC-16", "CRC-16/LHA", "CRC-IBM"], CrcParams::CRC16_ARC, 0xBB3D),
  entry("CRC-16/IBM-3740", &["CRC-16/AUTOSAR", "CRC-16/CCITT-FALSE"], CrcParams::CRC16_IBM_3740, 0x29B1),
  entry(
    "CRC-16/IBM-SDLC",
    &["CRC-16/ISO-HDLC", "CRC-16/ISO-IEC-14443-3-B", "CRC-16/X-25", "CRC-B", "X-25"],
    CrcParams::CRC16_IBM_SDLC,
    0x906E,
  ),
  entry(
    "CRC-16/XMODEM",
    &["CRC-16/ACORN", "CRC-16/LTE", "CRC-16/V-41-MSB", "XMODEM", "ZMODEM"],
    CrcParams::CRC16_XMODEM,
    0x31C3,
  ),
  entry(
    "CRC-16/KERMIT",
    &["CRC-16/BLUETOOTH", "CRC-16/CCITT", "CRC-16/CCITT-TRUE", "CRC-16/V-41-LSB", "CRC-CCITT", "KERMIT"],
    CrcParams::CRC16_KERMIT,
    0x2189,
  ),
  entry("CRC-16/MODBUS", &["MODBUS"], CrcParams::CRC16_MODBUS, 0x4B37),
  entry("CRC-16/USB", &[], CrcParams::CRC16_USB, 0xB4C8),
  entry("CRC-16/RIELLO", &[], CrcParams::CRC16_RIELLO, 0x63D0),
  entry(
    "CRC-32/ISO-HDLC",
    &["CRC-32", "CRC-32/ADCCP", "CRC-32/V-42", "CRC-32/XZ", "PKZIP"],
    CrcParams::CRC32_ISO_HDLC,
    0xCBF4_3926,
  ),
  entry(
    "CRC-32/ISCSI",
    &["CRC-32/BASE91-C", "CRC-32/CASTAGNOLI", "CRC-32/INTERLAKEN", "CRC-32C"],
    CrcParams::CRC32_ISCSI,
    0xE306_9283,
  ),
  entry("CRC-32/BZIP2", &["CRC-32/AAL5", "CRC-32/DECT-B", "B-CRC-32"], CrcParams::CRC32_BZIP2, 0xFC89_1918),
  entry("CRC-32/MPEG-2", &[], CrcParams::CRC32_MPEG2, 0x0376_E6E7),
  entry("CRC-32/CKSUM", &["CKSUM", "CRC-32/POSIX"], CrcParams::CRC32_CKSUM, 0x765E_7680),
  entry("CRC-64/ECMA-182", &["CRC-64"], CrcParams::CRC64_ECMA_182, 0x6C40_DF5F_0B49_7347),
  entry("CRC-64/XZ", &["CRC-64/GO-ECMA"], CrcParams::CRC64_XZ, 0x995D_C9BB_DF19_39FA),
  entry("CRC-64/GO-ISO", &[], CrcParams::CRC64_GO_ISO, 0xB909_56C7_75A4_1001),
  entry("CRC-64/NVME", &[], CrcParams::CRC64_NVME, 0xAE8B_1486_0A79_9888),
];

/// Look up a parameter set by catalogue name or alias, ignoring ASCII case.
#[must_use]
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
  let name = name.trim();
  CATALOG.iter().find(|entry| entry.matches(name))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Algorithm, ConfigError, build_table, compute_bitserial, compute_tabledriven, register::Width};

  fn run_both<R: crate::Register>(params: &CrcParams, data: &[u8]) -> (u64, u64) {
    let alg = Algorithm::<R>::new(params).unwrap();
    (compute_bitserial(&alg, data).widen(), compute_tabledriven(&alg, &build_table(&alg), data).widen())
  }

  #[test]
  fn every_entry_validates_and_verifies() {
    for entry in CATALOG {
      assert!(entry.params.validate().is_ok(), "{}", entry.name);
      assert!(entry.verify(), "{}", entry.name);
      assert_eq!(entry.compute(CHECK_INPUT), Ok(entry.check), "{}", entry.name);
    }
  }

  #[test]
  fn every_entry_agrees_across_paths() {
    const DEADBEEF: &[u8] = &[0xDE, 0xAD, 0xBE, 0xEF];
    const EMPTY: &[u8] = &[];
    for entry in CATALOG {
      for input in [CHECK_INPUT, DEADBEEF, EMPTY] {
        let (bit, table) = match entry.params.validate().unwrap() {
          Width::Bits8 => run_both::<u8>(&entry.params, input),
          Width::Bits16 => run_both::<u16>(&entry.params, input),
          Width::Bits32 => run_both::<u32>(&entry.params, input),
          Width::Bits64 => run_both::<u64>(&entry.params, input),
        };
        assert_eq!(bit, table, "{} over {input:02X?}", entry.name);
      }
    }
  }

  #[test]
  fn names_are_unique() {
    for (i, a) in CATALOG.iter().enumerate() {
      for b in CATALOG.iter().skip(i + 1) {
        assert!(!b.matches(a.name), "{} shadows {}", a.name, b.name);
        for alias in a.aliases {
          assert!(!b.matches(alias), "alias {alias} of {} shadows {}", a.name, b.name);
        }
      }
    }
  }

  #[test]
  fn find_is_case_insensitive_and_follows_aliases() {
    assert_eq!(find("crc-32/iso-hdlc").map(|e| e.check), Some(0xCBF4_3926));
    assert_eq!(find("CRC-32C").map(|e| e.name), Some("CRC-32/ISCSI"));
    assert_eq!(find(" x-25 ").map(|e| e.name), Some("CRC-16/IBM-SDLC"));
    assert_eq!(find("crc-16/ccitt-false").map(|e| e.params), Some(CrcParams::CRC16_IBM_3740));
    assert!(find("CRC-24/OPENPGP").is_none());
    assert!(find("").is_none());
  }

  #[test]
  fn invalid_entry_reports_configuration_error() {
    let entry = CatalogEntry {
      name: "CRC-24/BOGUS",
      aliases: &[],
      params: CrcParams { width: 24, ..CrcParams::CRC16_USB },
      check: 0,
    };
    assert_eq!(
      entry.compute(CHECK_INPUT),
      Err(Error::InvalidConfiguration(ConfigError::UnsupportedWidth(24)))
    );
    assert!(!entry.verify());

    let entry = CatalogEntry { params: CrcParams::CRC8_SMBUS.with_initial(0x1FF), ..entry };
    assert!(matches!(entry.compute(&[]), Err(Error::InvalidConfiguration(ConfigError::ValueOutOfRange { .. }))));
  }

  #[test]
  fn deadbeef_under_default_set() {
    let entry = find("CRC-16/X-25").unwrap();
    assert_eq!(entry.compute(&[0xDE, 0xAD, 0xBE, 0xEF]), Ok(0xE5CB));
  }
}
