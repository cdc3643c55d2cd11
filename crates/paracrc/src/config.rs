//! Runtime configuration (path overrides).
//!
//! A parameter set's `use_table` flag picks the bit-serial or table-driven
//! path. For diagnostics and benchmarking the choice can be overridden
//! process-wide through the environment:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `PARACRC_FORCE` | `auto` (default), `bitwise` / `reference` / `bitserial`, `table` / `tabledriven` |
//!
//! Both paths produce identical checksums, so an override only changes speed
//! and memory use. The environment is read once and cached for the life of the
//! process. Without the `std` feature the configuration is always `auto`.

/// Forced path selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Force {
  /// Follow each parameter set's `use_table` flag.
  #[default]
  Auto,
  /// Always use the bit-serial reference path (slow, no tables).
  Bitwise,
  /// Always use the table-driven path.
  Table,
}

impl Force {
  /// Canonical `PARACRC_FORCE` spelling.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Bitwise => "bitwise",
      Self::Table => "table",
    }
  }

  /// Parse an override value. Unknown or empty values yield `None`.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }

    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("bitwise")
      || value.eq_ignore_ascii_case("reference")
      || value.eq_ignore_ascii_case("bitserial")
    {
      return Some(Self::Bitwise);
    }
    if value.eq_ignore_ascii_case("table") || value.eq_ignore_ascii_case("tabledriven") {
      return Some(Self::Table);
    }

    None
  }
}

/// Computation path actually taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
  /// Bit-serial reference path.
  Bitwise,
  /// Table-driven path.
  Table,
}

impl Mode {
  /// Resolve a parameter set's `use_table` flag against `force`.
  #[inline]
  #[must_use]
  pub const fn resolve(use_table: bool, force: Force) -> Self {
    match force {
      Force::Bitwise => Self::Bitwise,
      Force::Table => Self::Table,
      Force::Auto if use_table => Self::Table,
      Force::Auto => Self::Bitwise,
    }
  }

  /// Lowercase name of the path.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Bitwise => "bitwise",
      Self::Table => "table",
    }
  }
}

/// Process-wide configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CrcConfig {
  /// Requested force mode.
  pub force: Force,
}

impl CrcConfig {
  /// Mode for a parameter set with the given `use_table` flag.
  #[inline]
  #[must_use]
  pub const fn mode(&self, use_table: bool) -> Mode {
    Mode::resolve(use_table, self.force)
  }
}

#[cfg(feature = "std")]
fn read_env() -> CrcConfig {
  let force = std::env::var("PARACRC_FORCE").ok().and_then(|v| Force::parse(&v)).unwrap_or_default();

  #[cfg(feature = "defmt")]
  if force != Force::Auto {
    defmt::debug!("paracrc: PARACRC_FORCE={}", force.as_str());
  }

  CrcConfig { force }
}

/// Cached process-wide configuration.
#[inline]
#[must_use]
pub fn get() -> CrcConfig {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<CrcConfig> = OnceLock::new();
    *CACHED.get_or_init(read_env)
  }

  #[cfg(not(feature = "std"))]
  {
    CrcConfig::default()
  }
}

/// Mode the process-wide configuration selects for `use_table`.
#[inline]
#[must_use]
pub fn mode(use_table: bool) -> Mode {
  get().mode(use_table)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_accepts_aliases() {
    assert_eq!(Force::parse("auto"), Some(Force::Auto));
    assert_eq!(Force::parse(" Bitwise "), Some(Force::Bitwise));
    assert_eq!(Force::parse("REFERENCE"), Some(Force::Bitwise));
    assert_eq!(Force::parse("bitserial"), Some(Force::Bitwise));
    assert_eq!(Force::parse("table"), Some(Force::Table));
    assert_eq!(Force::parse("TableDriven"), Some(Force::Table));
  }

  #[test]
  fn parse_rejects_garbage() {
    assert_eq!(Force::parse(""), None);
    assert_eq!(Force::parse("   "), None);
    assert_eq!(Force::parse("slice8"), None);
  }

  #[test]
  fn as_str_roundtrips() {
    for force in [Force::Auto, Force::Bitwise, Force::Table] {
      assert_eq!(Force::parse(force.as_str()), Some(force));
    }
  }

  #[test]
  fn resolve_honors_force() {
    assert_eq!(Mode::resolve(true, Force::Auto), Mode::Table);
    assert_eq!(Mode::resolve(false, Force::Auto), Mode::Bitwise);
    assert_eq!(Mode::resolve(true, Force::Bitwise), Mode::Bitwise);
    assert_eq!(Mode::resolve(false, Force::Table), Mode::Table);
  }

  #[test]
  fn mode_names() {
    assert_eq!(Mode::Bitwise.as_str(), "bitwise");
    assert_eq!(Mode::Table.as_str(), Force::Table.as_str());
  }

  #[test]
  fn get_is_stable() {
    assert_eq!(get(), get());
  }
}
