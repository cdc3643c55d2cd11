//! The CRC engine.
//!
//! Free functions expose the two algorithms directly:
//!
//! - [`compute_bitserial`]: one bit per step, no precomputation (the reference)
//! - [`compute_tabledriven`]: one byte per step through a [`CrcTable`]
//!
//! [`Crc<R>`] bundles a validated parameter set with its table (when the
//! table-driven path is selected) so repeated checksums pay for table
//! generation once. [`LazyCrc<R>`] does the same for `static` items, building
//! the table on first use behind a one-time initialization barrier.

use crate::{
  common::{portable, reference, tables::CrcTable},
  config::{self, Mode},
  error::Error,
  params::{Algorithm, CrcParams},
  register::{Register, Width},
};

/// Build the lookup table for `alg`'s polynomial.
///
/// Depends only on the polynomial and width, never on the initial value,
/// final XOR or reflection flags.
#[inline]
#[must_use]
pub fn build_table<R: Register>(alg: &Algorithm<R>) -> CrcTable<R> {
  CrcTable::new(alg.polynomial())
}

/// Compute the CRC of `data` bit by bit.
///
/// This is the canonical path every other path is checked against.
#[inline]
#[must_use]
pub fn compute_bitserial<R: Register>(alg: &Algorithm<R>, data: &[u8]) -> R {
  alg.finish(reference::update(alg.initial(), alg.polynomial(), alg.reflect_in(), data))
}

/// Compute the CRC of `data` through `table`.
///
/// `table` must have been generated for `alg`'s polynomial (see
/// [`build_table`]); it is not checked.
#[inline]
#[must_use]
pub fn compute_tabledriven<R: Register>(alg: &Algorithm<R>, table: &CrcTable<R>, data: &[u8]) -> R {
  alg.finish(portable::update(alg.initial(), table, alg.reflect_in(), data))
}

/// One-shot CRC of `data`, dispatching on `alg.use_table()`.
///
/// The table-driven path builds a throwaway table on every call; use [`Crc`]
/// to amortize it over many inputs.
#[must_use]
pub fn checksum<R: Register>(alg: &Algorithm<R>, data: &[u8]) -> R {
  match config::mode(alg.use_table()) {
    Mode::Table => compute_tabledriven(alg, &build_table(alg), data),
    Mode::Bitwise => compute_bitserial(alg, data),
  }
}

/// One-shot CRC of `data` for a parameter set whose width is only known at
/// runtime. The result is zero-extended to `u64`.
///
/// # Errors
///
/// [`Error::InvalidConfiguration`] if `params` does not validate.
pub fn checksum_params(params: &CrcParams, data: &[u8]) -> Result<u64, Error> {
  let crc = match params.validate()? {
    Width::Bits8 => checksum(&Algorithm::<u8>::new(params)?, data).widen(),
    Width::Bits16 => checksum(&Algorithm::<u16>::new(params)?, data).widen(),
    Width::Bits32 => checksum(&Algorithm::<u32>::new(params)?, data).widen(),
    Width::Bits64 => checksum(&Algorithm::<u64>::new(params)?, data).widen(),
  };
  Ok(crc)
}

/// A configured CRC engine.
///
/// Owns its lookup table when the table-driven path is selected, so a `Crc`
/// can never run table-driven without a table. Immutable after construction
/// and therefore `Send + Sync`.
#[derive(Clone, Debug)]
pub struct Crc<R: Register> {
  alg: Algorithm<R>,
  table: Option<CrcTable<R>>,
}

/// 8-bit engine.
pub type Crc8 = Crc<u8>;
/// 16-bit engine.
pub type Crc16 = Crc<u16>;
/// 32-bit engine.
pub type Crc32 = Crc<u32>;
/// 64-bit engine.
pub type Crc64 = Crc<u64>;

impl<R: Register> Crc<R> {
  /// Validate `params` and build the engine, generating the table eagerly if
  /// the table-driven path is selected.
  ///
  /// # Errors
  ///
  /// [`Error::InvalidConfiguration`] if `params` is invalid or not `R`'s width.
  pub fn new(params: &CrcParams) -> Result<Self, Error> {
    Ok(Self::from_algorithm(Algorithm::new(params)?))
  }

  /// Build the engine for an already validated algorithm.
  #[must_use]
  pub fn from_algorithm(alg: Algorithm<R>) -> Self {
    let table = match config::mode(alg.use_table()) {
      Mode::Table => Some(build_table(&alg)),
      Mode::Bitwise => None,
    };
    Self { alg, table }
  }

  /// Build a table-driven engine around a caller-supplied table.
  ///
  /// The table is trusted: it must have been generated for `alg`'s
  /// polynomial. A bitwise force override still bypasses it.
  #[must_use]
  pub fn with_table(alg: Algorithm<R>, table: CrcTable<R>) -> Self {
    let table = match config::get().force {
      config::Force::Bitwise => None,
      config::Force::Auto | config::Force::Table => Some(table),
    };
    Self { alg, table }
  }

  /// The algorithm this engine runs.
  #[inline]
  #[must_use]
  pub const fn algorithm(&self) -> &Algorithm<R> {
    &self.alg
  }

  /// The lookup table, if the engine is table-driven.
  #[inline]
  #[must_use]
  pub const fn table(&self) -> Option<&CrcTable<R>> {
    self.table.as_ref()
  }

  /// The path this engine takes.
  #[inline]
  #[must_use]
  pub const fn mode(&self) -> Mode {
    if self.table.is_some() { Mode::Table } else { Mode::Bitwise }
  }

  /// Compute the CRC of `data`.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> R {
    self.alg.finish(self.update_raw(self.alg.initial(), data))
  }

  /// Start a streaming computation.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> Digest<'_, R> {
    Digest { crc: self, state: self.alg.initial() }
  }

  #[inline]
  fn update_raw(&self, reg: R, data: &[u8]) -> R {
    match &self.table {
      Some(table) => portable::update(reg, table, self.alg.reflect_in(), data),
      None => reference::update(reg, self.alg.polynomial(), self.alg.reflect_in(), data),
    }
  }
}

/// Streaming CRC state borrowed from a [`Crc`].
///
/// Feeding the input through any number of [`update`](Self::update) calls
/// gives the same result as a single [`Crc::checksum`].
#[derive(Clone, Debug)]
pub struct Digest<'a, R: Register> {
  crc: &'a Crc<R>,
  state: R,
}

impl<R: Register> Digest<'_, R> {
  /// Fold more data into the running register.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.state = self.crc.update_raw(self.state, data);
  }

  /// The CRC of everything fed so far. Does not consume or modify the state.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> R {
    self.crc.alg.finish(self.state)
  }

  /// Forget all input.
  #[inline]
  pub fn reset(&mut self) {
    self.state = self.crc.alg.initial();
  }
}

/// A CRC engine whose table is built at most once, on first use.
///
/// `LazyCrc::new` is `const`, so the engine can live in a `static` and be
/// shared across threads. Table construction sits behind a
/// [`OnceLock`](std::sync::OnceLock): concurrent first calls block until a
/// single builder finishes, and every later call reads the finished table
/// without synchronization cost beyond an atomic load.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct LazyCrc<R: Register> {
  alg: Algorithm<R>,
  table: std::sync::OnceLock<CrcTable<R>>,
}

#[cfg(feature = "std")]
impl<R: Register> LazyCrc<R> {
  /// Wrap `alg`; nothing is computed until first use.
  #[must_use]
  pub const fn new(alg: Algorithm<R>) -> Self {
    Self { alg, table: std::sync::OnceLock::new() }
  }

  /// The algorithm this engine runs.
  #[inline]
  #[must_use]
  pub const fn algorithm(&self) -> &Algorithm<R> {
    &self.alg
  }

  /// Build the table now (if not already built) and return it.
  ///
  /// Call at startup to keep table generation off the first checksum.
  pub fn init(&self) -> &CrcTable<R> {
    self.table.get_or_init(|| build_table(&self.alg))
  }

  /// Install a caller-supplied table.
  ///
  /// # Errors
  ///
  /// Returns the table back if one was already installed or built.
  pub fn install(&self, table: CrcTable<R>) -> Result<(), CrcTable<R>> {
    self.table.set(table)
  }

  /// Whether the table exists yet.
  #[inline]
  #[must_use]
  pub fn is_initialized(&self) -> bool {
    self.table.get().is_some()
  }

  /// The table, without building it.
  ///
  /// # Errors
  ///
  /// [`Error::TableNotInitialized`] if neither [`init`](Self::init),
  /// [`install`](Self::install) nor a table-driven checksum has run yet.
  pub fn table(&self) -> Result<&CrcTable<R>, Error> {
    self.table.get().ok_or(Error::TableNotInitialized)
  }

  /// Compute the CRC of `data`, building the table first if the table-driven
  /// path is selected and the table does not exist yet.
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> R {
    match config::mode(self.alg.use_table()) {
      Mode::Table => compute_tabledriven(&self.alg, self.init(), data),
      Mode::Bitwise => compute_bitserial(&self.alg, data),
    }
  }

  /// Compute the CRC of `data` without ever building the table.
  ///
  /// # Errors
  ///
  /// [`Error::TableNotInitialized`] if the table-driven path is selected and
  /// the table has not been initialized yet.
  pub fn try_checksum(&self, data: &[u8]) -> Result<R, Error> {
    match config::mode(self.alg.use_table()) {
      Mode::Table => Ok(compute_tabledriven(&self.alg, self.table()?, data)),
      Mode::Bitwise => Ok(compute_bitserial(&self.alg, data)),
    }
  }
}
