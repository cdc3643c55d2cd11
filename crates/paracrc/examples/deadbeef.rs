//! Compute the CRC of a fixed four-byte sample both ways.
//!
//! Run with: `cargo run --example deadbeef -p paracrc`
//!
//! Set `PARACRC_FORCE=bitwise` (or `table`) to override the path the fixed
//! variants take; the printed checksums do not change.

use paracrc::{
  Algorithm, Checksum, Crc, Crc16X25, CrcParams, build_table, catalog, compute_bitserial, compute_tabledriven, config,
};

const SAMPLE: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];

fn main() {
  println!("=== paracrc sample ===\n");
  println!("path override: {}", config::get().force.as_str());

  // CRC-16, poly 0x1021, init/xor 0xFFFF, both reflections (X-25).
  let alg = match Algorithm::<u16>::new(&CrcParams::CRC16_IBM_SDLC) {
    Ok(alg) => alg,
    Err(err) => {
      eprintln!("invalid parameters: {err}");
      std::process::exit(1);
    }
  };

  let bitwise = compute_bitserial(&alg, &SAMPLE);
  let table = compute_tabledriven(&alg, &build_table(&alg), &SAMPLE);
  println!("bit-serial:   0x{bitwise:04X}");
  println!("table-driven: 0x{table:04X}");
  assert_eq!(bitwise, table);
  assert_eq!(bitwise, 0xE5CB);

  let mut hasher = Crc16X25::new();
  hasher.update(&SAMPLE[..2]);
  hasher.update(&SAMPLE[2..]);
  println!("streaming:    0x{:04X} ({})", hasher.finalize(), Crc16X25::mode().as_str());

  let engine = Crc::from_algorithm(alg);
  println!("engine:       0x{:04X} ({})\n", engine.checksum(&SAMPLE), engine.mode().as_str());

  println!("--- catalog over {SAMPLE:02X?} ---\n");
  for entry in catalog::CATALOG {
    let width = usize::from(entry.params.width / 4);
    match entry.compute(&SAMPLE) {
      Ok(crc) => println!("{:<16} 0x{crc:0width$X}", entry.name),
      Err(err) => println!("{:<16} {err}", entry.name),
    }
  }
}
