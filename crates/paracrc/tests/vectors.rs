//! Known-answer and differential tests.
//!
//! Catalog check values, the mixed-reflection configurations the named
//! standards never use, and a cross-check against the `crc` crate for both
//! catalog and random parameter sets.

use paracrc::{
  Algorithm, Crc, CrcParams, Width, build_table,
  catalog::{CATALOG, CHECK_INPUT},
  checksum_params, compute_bitserial, compute_tabledriven, crc8, crc16, crc32, crc64,
};
use proptest::prelude::*;

const DEADBEEF: &[u8] = &[0xDE, 0xAD, 0xBE, 0xEF];

fn both_paths<R: paracrc::Register>(alg: &Algorithm<R>, data: &[u8]) -> R {
  let bit = compute_bitserial(alg, data);
  assert_eq!(bit, compute_tabledriven(alg, &build_table(alg), data), "paths disagree for {alg:?}");
  bit
}

// Known vectors

#[test]
fn headline_vectors() {
  assert_eq!(crc16(CHECK_INPUT), 0x906E);
  assert_eq!(crc32(CHECK_INPUT), 0xCBF4_3926);

  let xmodem = Algorithm::<u16>::new(&CrcParams::CRC16_XMODEM).unwrap();
  assert_eq!(both_paths(&xmodem, CHECK_INPUT), 0x31C3);
}

#[test]
fn deadbeef_under_default_configuration() {
  let x25 = Algorithm::<u16>::new(&CrcParams::CRC16_IBM_SDLC).unwrap();
  assert_eq!(both_paths(&x25, DEADBEEF), 0xE5CB);
  assert_eq!(crc16(DEADBEEF), 0xE5CB);
}

#[test]
fn deadbeef_per_width() {
  assert_eq!(crc8(DEADBEEF), 0xCA);
  assert_eq!(crc32(DEADBEEF), 0x7C9C_A35A);
  assert_eq!(crc64(DEADBEEF), 0x0886_AA2D_9E73_EEE4);
}

#[test]
fn catalog_check_values() {
  for entry in CATALOG {
    assert_eq!(checksum_params(&entry.params, CHECK_INPUT), Ok(entry.check), "{}", entry.name);
    assert_eq!(
      checksum_params(&entry.params.with_table(false), CHECK_INPUT),
      Ok(entry.check),
      "{} (bitwise)",
      entry.name
    );
  }
}

#[test]
fn input_reflection_only() {
  let params = CrcParams::new(16, 0x1021).unwrap().with_initial(0x1234).with_reflection(true, false);
  let alg = Algorithm::<u16>::new(&params).unwrap();
  assert_eq!(both_paths(&alg, CHECK_INPUT), 0x4DAC);

  let params = CrcParams::new(32, 0x04C1_1DB7).unwrap().with_initial(0xFFFF_FFFF).with_reflection(true, false);
  let alg = Algorithm::<u32>::new(&params).unwrap();
  assert_eq!(both_paths(&alg, CHECK_INPUT), 0x9B63_D02C);
}

#[test]
fn output_reflection_only() {
  let params = CrcParams::new(16, 0x1021).unwrap().with_initial(0x1234).with_reflection(false, true);
  let alg = Algorithm::<u16>::new(&params).unwrap();
  assert_eq!(both_paths(&alg, CHECK_INPUT), 0xD7B7);

  let params = CrcParams::new(8, 0x07).unwrap().with_initial(0xA5).with_xor_out(0x5A).with_reflection(false, true);
  let alg = Algorithm::<u8>::new(&params).unwrap();
  assert_eq!(both_paths(&alg, CHECK_INPUT), 0xB0);
}

#[test]
fn empty_input_returns_finished_initial() {
  let params = CrcParams::new(16, 0x1021)
    .unwrap()
    .with_initial(0x1234)
    .with_xor_out(0x00FF)
    .with_reflection(true, true);
  let crc = Crc::<u16>::new(&params).unwrap();
  assert_eq!(crc.checksum(&[]), 0x2CB7);
  assert_eq!(crc.digest().finalize(), 0x2CB7);
}

#[test]
fn rejects_unsupported_configurations() {
  assert!(CrcParams::new(24, 0x864CFB).is_err());
  assert!(Crc::<u32>::new(&CrcParams::CRC64_XZ).is_err());
  assert!(checksum_params(&CrcParams::CRC8_SMBUS.with_xor_out(0x1FF), CHECK_INPUT).is_err());
}

// Differential against the `crc` crate

macro_rules! assert_matches_crc_crate {
  ($data:expr; $($reg:ty: $theirs:ident => $ours:ident),* $(,)?) => {$(
    assert_eq!(
      u64::from(crc::Crc::<$reg>::new(&crc::$theirs).checksum($data)),
      checksum_params(&CrcParams::$ours, $data).unwrap(),
      "{} over {:02X?}",
      stringify!($ours),
      $data
    );
  )*};
}

#[test]
fn matches_crc_crate_for_catalog() {
  let inputs: [&[u8]; 4] = [b"", CHECK_INPUT, DEADBEEF, b"The quick brown fox jumps over the lazy dog"];

  for data in inputs {
    assert_matches_crc_crate!(data;
      u8: CRC_8_SMBUS => CRC8_SMBUS,
      u8: CRC_8_MAXIM_DOW => CRC8_MAXIM_DOW,
      u8: CRC_8_ROHC => CRC8_ROHC,
      u16: CRC_16_ARC => CRC16_ARC,
      u16: CRC_16_IBM_3740 => CRC16_IBM_3740,
      u16: CRC_16_IBM_SDLC => CRC16_IBM_SDLC,
      u16: CRC_16_XMODEM => CRC16_XMODEM,
      u16: CRC_16_KERMIT => CRC16_KERMIT,
      u16: CRC_16_MODBUS => CRC16_MODBUS,
      u16: CRC_16_USB => CRC16_USB,
      u16: CRC_16_RIELLO => CRC16_RIELLO,
      u32: CRC_32_ISO_HDLC => CRC32_ISO_HDLC,
      u32: CRC_32_ISCSI => CRC32_ISCSI,
      u32: CRC_32_BZIP2 => CRC32_BZIP2,
      u32: CRC_32_MPEG_2 => CRC32_MPEG2,
      u32: CRC_32_CKSUM => CRC32_CKSUM,
      u64: CRC_64_ECMA_182 => CRC64_ECMA_182,
      u64: CRC_64_XZ => CRC64_XZ,
      u64: CRC_64_GO_ISO => CRC64_GO_ISO,
    );
  }
}

/// Leak a `crc` crate algorithm description; `crc::Crc::new` wants `'static`.
fn crc_crate_alg16(alg: &Algorithm<u16>) -> &'static crc::Algorithm<u16> {
  Box::leak(Box::new(crc::Algorithm {
    width: 16,
    poly: alg.polynomial(),
    init: alg.initial(),
    refin: alg.reflect_in(),
    refout: alg.reflect_out(),
    xorout: alg.xor_out(),
    check: 0,
    residue: 0,
  }))
}

fn crc_crate_alg32(alg: &Algorithm<u32>) -> &'static crc::Algorithm<u32> {
  Box::leak(Box::new(crc::Algorithm {
    width: 32,
    poly: alg.polynomial(),
    init: alg.initial(),
    refin: alg.reflect_in(),
    refout: alg.reflect_out(),
    xorout: alg.xor_out(),
    check: 0,
    residue: 0,
  }))
}

fn arb_flags() -> impl Strategy<Value = (bool, bool, bool)> {
  (any::<bool>(), any::<bool>(), any::<bool>())
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(128))]

  #[test]
  fn matches_crc_crate_random_16(
    poly in any::<u16>(),
    init in any::<u16>(),
    xor_out in any::<u16>(),
    (reflect_in, reflect_out, use_table) in arb_flags(),
    data in prop::collection::vec(any::<u8>(), 0..512),
  ) {
    let alg = Algorithm::from_parts(poly, init, xor_out, reflect_in, reflect_out, use_table);
    let expected = crc::Crc::<u16>::new(crc_crate_alg16(&alg)).checksum(&data);
    prop_assert_eq!(Crc::from_algorithm(alg).checksum(&data), expected);
    prop_assert_eq!(compute_bitserial(&alg, &data), expected);
  }

  #[test]
  fn matches_crc_crate_random_32(
    poly in any::<u32>(),
    init in any::<u32>(),
    xor_out in any::<u32>(),
    (reflect_in, reflect_out, use_table) in arb_flags(),
    data in prop::collection::vec(any::<u8>(), 0..512),
  ) {
    let alg = Algorithm::from_parts(poly, init, xor_out, reflect_in, reflect_out, use_table);
    let expected = crc::Crc::<u32>::new(crc_crate_alg32(&alg)).checksum(&data);
    prop_assert_eq!(Crc::from_algorithm(alg).checksum(&data), expected);
    prop_assert_eq!(compute_tabledriven(&alg, &build_table(&alg), &data), expected);
  }

  #[test]
  fn width_erased_paths_agree(
    width in prop::sample::select(vec![Width::Bits8, Width::Bits16, Width::Bits32, Width::Bits64]),
    poly in any::<u64>(),
    init in any::<u64>(),
    (reflect_in, reflect_out, use_table) in arb_flags(),
    data in prop::collection::vec(any::<u8>(), 0..256),
  ) {
    let mask = width.mask();
    let params = CrcParams::new(width.bits() as u8, poly & mask)
      .unwrap()
      .with_initial(init & mask)
      .with_xor_out(!init & mask)
      .with_reflection(reflect_in, reflect_out)
      .with_table(use_table);
    let erased = checksum_params(&params, &data).unwrap();
    prop_assert_eq!(erased & !mask, 0);
    prop_assert_eq!(erased, checksum_params(&params.with_table(!use_table), &data).unwrap());
  }
}
