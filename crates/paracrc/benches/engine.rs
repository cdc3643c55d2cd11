//! Bit-serial vs table-driven throughput.
//!
//! Compares the two paths of the parameterized engine, a fixed variant with
//! a compile-time table, and the `crc` crate as an external baseline.
//!
//! Run all:
//!   cargo bench -p paracrc
//!
//! Run one width:
//!   cargo bench -p paracrc -- engine/crc32

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use paracrc::{Algorithm, Checksum, Crc, CrcParams, Crc16X25, Crc32IsoHdlc, Crc64Xz, Register, compute_bitserial};

const SIZES: [usize; 4] = [16, 256, 4096, 65536];

fn bench_width<R: Register, C: Checksum<Output = R>>(
  c: &mut Criterion,
  name: &str,
  params: &CrcParams,
  baseline: impl Fn(&[u8]) -> R,
) {
  let mut group = c.benchmark_group(format!("engine/{name}"));
  let alg = Algorithm::<R>::new(params).unwrap();
  let table = Crc::from_algorithm(alg.with_table(true));

  for size in SIZES {
    let data: Vec<u8> = (0..size).map(|i| (i as u8).wrapping_mul(31)).collect();
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("bitwise", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(compute_bitserial(&alg, data)));
    });

    group.bench_with_input(BenchmarkId::new("table", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(table.checksum(data)));
    });

    group.bench_with_input(BenchmarkId::new("fixed", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(C::checksum(data)));
    });

    group.bench_with_input(BenchmarkId::new("crc", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(baseline(data)));
    });
  }

  group.finish();
}

fn engine_crc16(c: &mut Criterion) {
  let baseline = crc::Crc::<u16>::new(&crc::CRC_16_IBM_SDLC);
  bench_width::<u16, Crc16X25>(c, "crc16", &CrcParams::CRC16_IBM_SDLC, |data| baseline.checksum(data));
}

fn engine_crc32(c: &mut Criterion) {
  let baseline = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
  bench_width::<u32, Crc32IsoHdlc>(c, "crc32", &CrcParams::CRC32_ISO_HDLC, |data| baseline.checksum(data));
}

fn engine_crc64(c: &mut Criterion) {
  let baseline = crc::Crc::<u64>::new(&crc::CRC_64_XZ);
  bench_width::<u64, Crc64Xz>(c, "crc64", &CrcParams::CRC64_XZ, |data| baseline.checksum(data));
}

fn table_build(c: &mut Criterion) {
  let mut group = c.benchmark_group("engine/table_build");
  group.bench_function("crc16", |b| {
    b.iter(|| core::hint::black_box(paracrc::CrcTable::<u16>::new(core::hint::black_box(0x1021))));
  });
  group.bench_function("crc64", |b| {
    b.iter(|| core::hint::black_box(paracrc::CrcTable::<u64>::new(core::hint::black_box(0x42F0_E1EB_A9EA_3693))));
  });
  group.finish();
}

criterion_group!(benches, engine_crc16, engine_crc32, engine_crc64, table_build);
criterion_main!(benches);
