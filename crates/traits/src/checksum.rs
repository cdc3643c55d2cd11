//! Non-cryptographic checksum traits.
//!
//! - **Performance**: Zero-cost abstractions, inline-friendly
//! - **Streaming**: Incremental updates for large data

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// Provides the core interface for checksum computation with support for
/// incremental updates and streaming data.
///
/// # Usage
///
/// ```rust,ignore
/// use paracrc::{Checksum, Crc32IsoHdlc};
///
/// // One-shot (fastest for data already in memory)
/// let crc = Crc32IsoHdlc::checksum(b"hello world");
///
/// // Streaming (for incremental or large data)
/// let mut hasher = Crc32IsoHdlc::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
/// - splitting the input across any number of `update()` calls must not change
///   the result
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  ///
  /// - CRC-8: 1
  /// - CRC-16: 2
  /// - CRC-32: 4
  /// - CRC-64: 8
  const OUTPUT_SIZE: usize;

  /// The checksum output type (`u8`, `u16`, `u32` or `u64` for CRCs).
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the algorithm's initial register value.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher whose register starts at `initial` instead of the
  /// algorithm's standard initial value.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the hasher, allowing further updates.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }
}
