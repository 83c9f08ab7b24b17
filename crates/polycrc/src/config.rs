//! Runtime configuration for engine selection.
//!
//! The only knob is the lane count used by [`crate::DynCrc`]:
//! - `Auto` picks slice-by-16, the fastest portable strategy
//! - anything else is honored as requested
//!
//! # Environment
//!
//! With the `std` feature, `POLYCRC_FORCE` is read once per process:
//!
//! | Value | Effect |
//! |-------|--------|
//! | `auto` | default selection |
//! | `bytewise`, `table`, `slice1` | one table, one byte per step |
//! | `slice8` | slice-by-8 |
//! | `slice16` | slice-by-16 |
//!
//! Unrecognized values are ignored.

/// Table strategy of an engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lanes {
  /// One 256-entry table, one byte per step.
  Bytewise,
  /// Eight tables, eight bytes per step.
  Slice8,
  /// Sixteen tables, sixteen bytes per step.
  Slice16,
}

impl Lanes {
  /// Number of tables (and bytes per step).
  #[must_use]
  pub const fn count(self) -> usize {
    match self {
      Self::Bytewise => 1,
      Self::Slice8 => 8,
      Self::Slice16 => 16,
    }
  }

  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Bytewise => "bytewise",
      Self::Slice8 => "slice8",
      Self::Slice16 => "slice16",
    }
  }
}

/// Forced lane selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LaneForce {
  /// Use the default selector.
  #[default]
  Auto,
  /// Force byte-wise engines.
  Bytewise,
  /// Force slice-by-8 engines.
  Slice8,
  /// Force slice-by-16 engines.
  Slice16,
}

impl LaneForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Bytewise => "bytewise",
      Self::Slice8 => "slice8",
      Self::Slice16 => "slice16",
    }
  }

  /// Parse an override value (case-insensitive, surrounding whitespace ignored).
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("bytewise") || value.eq_ignore_ascii_case("table") || value.eq_ignore_ascii_case("slice1")
    {
      return Some(Self::Bytewise);
    }
    if value.eq_ignore_ascii_case("slice8") {
      return Some(Self::Slice8);
    }
    if value.eq_ignore_ascii_case("slice16") {
      return Some(Self::Slice16);
    }
    None
  }
}

/// Effective configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
  /// Requested force mode (environment).
  pub requested_force: LaneForce,
  /// Lane count new dynamic engines use.
  pub lanes: Lanes,
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: LaneForce,
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  const VAR: &str = "POLYCRC_FORCE";

  let force = match std::env::var(VAR) {
    Ok(value) if !value.trim().is_empty() => {
      let parsed = LaneForce::parse(&value);
      #[cfg(feature = "tracing")]
      match parsed {
        Some(force) => tracing::debug!(var = VAR, force = force.as_str(), "crc lane override"),
        None => tracing::debug!(var = VAR, value = value.as_str(), "ignoring unrecognized crc lane override"),
      }
      parsed
    }
    _ => None,
  };

  Overrides { force: force.unwrap_or_default() }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

/// Resolve a force mode to a lane count.
#[inline]
#[must_use]
pub const fn resolve(force: LaneForce) -> Lanes {
  match force {
    LaneForce::Auto | LaneForce::Slice16 => Lanes::Slice16,
    LaneForce::Slice8 => Lanes::Slice8,
    LaneForce::Bytewise => Lanes::Bytewise,
  }
}

/// Get the effective configuration.
#[inline]
#[must_use]
pub fn get() -> Config {
  let requested_force = overrides().force;
  Config { requested_force, lanes: resolve(requested_force) }
}
