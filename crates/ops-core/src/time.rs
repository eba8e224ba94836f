//! Session time model and configuration.
//!
//! # Design
//!
//! The only time-dependent behaviour in the engine is cosmetic: a scenario
//! run is "processed" for a fixed delay before its result is surfaced, and
//! the KPI feed regenerates on an interval.  Both are driven by a logical
//! millisecond counter held in [`SessionClock`], which the host advances
//! explicitly.  No wall clock is ever read, so tests control time exactly.

use std::fmt;

use crate::{OpsError, OpsResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute session time in milliseconds since session start.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> Tick {
        Tick(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed from `earlier` to `self`, or 0 if `earlier` is
    /// later.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        self.offset(rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── SessionClock ──────────────────────────────────────────────────────────────

/// Monotonic logical clock owned by a session.
#[derive(Clone, Debug, Default)]
pub struct SessionClock {
    now: Tick,
}

impl SessionClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.now
    }

    /// Advance by `ms` milliseconds.
    #[inline]
    pub fn advance_by(&mut self, ms: u64) -> Tick {
        self.now = self.now.offset(ms);
        self.now
    }

    /// Move to `tick`.  Moving backwards is ignored; the clock never rewinds.
    #[inline]
    pub fn advance_to(&mut self, tick: Tick) -> Tick {
        self.now = self.now.max(tick);
        self.now
    }
}

impl fmt::Display for SessionClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.now.0 / 1_000;
        write!(f, "{} ({:02}:{:02}.{:03})", self.now, secs / 60, secs % 60, self.now.0 % 1_000)
    }
}

// ── SessionConfig ─────────────────────────────────────────────────────────────

/// Default processing delay before a scenario result is surfaced.
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 2_500;

/// Default KPI dashboard refresh interval.
pub const DEFAULT_KPI_REFRESH_INTERVAL_MS: u64 = 10_000;

/// Top-level session configuration.
///
/// Typically loaded from a JSON file by the application crate.  Every field
/// has a default, so a partial (or empty) JSON object is valid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Cosmetic delay between starting a scenario run and surfacing its
    /// result.  `0` completes the run on the next clock advance.
    pub processing_delay_ms: u64,

    /// How often the KPI dashboard regenerates its snapshot.
    pub kpi_refresh_interval_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed:                    42,
            processing_delay_ms:     DEFAULT_PROCESSING_DELAY_MS,
            kpi_refresh_interval_ms: DEFAULT_KPI_REFRESH_INTERVAL_MS,
        }
    }
}

impl SessionConfig {
    /// Reject configurations that would make a component spin.
    pub fn validate(&self) -> OpsResult<()> {
        if self.kpi_refresh_interval_ms == 0 {
            return Err(OpsError::Config(
                "kpi_refresh_interval_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
