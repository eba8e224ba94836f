//! Randomness as an explicit collaborator.
//!
//! Nothing in the workspace reads an ambient RNG.  Every operation that draws
//! random numbers takes a `&mut impl RangeSource`, so tests can substitute a
//! scripted or constant source and reproduce results exactly.
//!
//! [`SimRng`] is the production source: a `SmallRng` seeded from
//! `SessionConfig::seed`.  The same seed always produces the same sequence
//! of draws.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RangeSource ───────────────────────────────────────────────────────────────

/// A uniform integer generator over an inclusive range.
pub trait RangeSource {
    /// Draw a value uniformly from `min..=max`.
    ///
    /// Callers guarantee `min <= max`.
    fn int_in_range(&mut self, min: i64, max: i64) -> i64;
}

impl<R: RangeSource + ?Sized> RangeSource for &mut R {
    #[inline]
    fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        (**self).int_in_range(min, max)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Session-level deterministic RNG.
///
/// Used only in single-threaded contexts.  A component that needs its own
/// independent stream (e.g. the KPI feed next to the scenario session) takes
/// a [`child`](Self::child) so the two never interleave draws.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

impl RangeSource for SimRng {
    #[inline]
    fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        debug_assert!(min <= max, "empty range {min}..={max}");
        self.0.gen_range(min..=max.max(min))
    }
}

// ── Test sources ──────────────────────────────────────────────────────────────

/// Always returns the lower bound of the requested range.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinSource;

impl RangeSource for MinSource {
    #[inline]
    fn int_in_range(&mut self, min: i64, _max: i64) -> i64 {
        min
    }
}

/// Always returns the upper bound of the requested range.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxSource;

impl RangeSource for MaxSource {
    #[inline]
    fn int_in_range(&mut self, _min: i64, max: i64) -> i64 {
        max
    }
}

/// Replays a fixed script of draws, clamped into each requested range, and
/// records every range it was asked for.
///
/// Once the script runs out the lower bound is returned.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    script:    std::collections::VecDeque<i64>,
    requested: Vec<(i64, i64)>,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = i64>) -> Self {
        Self { script: script.into_iter().collect(), requested: Vec::new() }
    }

    /// Every `(min, max)` pair requested so far, in call order.
    pub fn requested(&self) -> &[(i64, i64)] {
        &self.requested
    }
}

impl RangeSource for ScriptedSource {
    fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        self.requested.push((min, max));
        match self.script.pop_front() {
            Some(v) => v.clamp(min, max.max(min)),
            None => min,
        }
    }
}
