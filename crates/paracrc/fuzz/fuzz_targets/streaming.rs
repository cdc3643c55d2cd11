//! Fuzz target for the streaming APIs.
//!
//! Arbitrary sequences of update calls must produce the one-shot result.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use paracrc::{Checksum, Crc, Crc16X25, Crc32IsoHdlc, CrcParams};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let chunks = split(&input.data, &input.chunk_sizes);

  let mut hasher = Crc16X25::new();
  for chunk in &chunks {
    hasher.update(chunk);
  }
  assert_eq!(hasher.finalize(), Crc16X25::checksum(&input.data), "Crc16X25 streaming mismatch");

  let mut hasher = Crc32IsoHdlc::new();
  hasher.update_vectored(&chunks);
  assert_eq!(hasher.finalize(), Crc32IsoHdlc::checksum(&input.data), "Crc32IsoHdlc vectored mismatch");

  let Ok(engine) = Crc::<u64>::new(&CrcParams::CRC64_NVME) else {
    panic!("catalog parameters must validate");
  };
  let mut digest = engine.digest();
  for chunk in &chunks {
    digest.update(chunk);
  }
  assert_eq!(digest.finalize(), engine.checksum(&input.data), "CRC-64/NVME digest mismatch");
});

fn split<'a>(data: &'a [u8], sizes: &[u8]) -> Vec<&'a [u8]> {
  let mut out = Vec::new();
  let mut rest = data;
  let mut i = 0;
  while !rest.is_empty() {
    let size = sizes.get(i % sizes.len().max(1)).copied().map_or(1, usize::from).max(1);
    let (head, tail) = rest.split_at(size.min(rest.len()));
    out.push(head);
    rest = tail;
    i += 1;
  }
  out
}
