//! Priority-weighted throughput scoring.
//!
//! # Model
//!
//! ```text
//! contribution = weight(category) × speed × max(0, 1 − delay / 60)
//! score        = Σ contribution
//! ideal        = Σ weight(category) × speed            (delay ignored)
//! percentage   = round(score / ideal × 100), clamped to 0..=100
//! ```
//!
//! A train sixty or more minutes late contributes nothing.  The percentage is
//! defined as 0 when the ideal is 0 (empty fleet or every weight 0).

use ops_core::{CategoryTable, TrainCategory};

use crate::{Fleet, FleetMember};

/// Delay at which a train's penalty-adjusted contribution reaches zero.
pub const FULL_PENALTY_DELAY_MIN: f64 = 60.0;

// ── PriorityWeights ───────────────────────────────────────────────────────────

/// Per-category integer priority weights.
///
/// A category with no entry weighs 0: its trains contribute nothing to either
/// the score or the ideal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PriorityWeights(pub CategoryTable<u32>);

impl PriorityWeights {
    /// A table with no entries; every train weighs 0.
    pub fn empty() -> Self {
        Self(CategoryTable::new())
    }

    pub fn with(self, category: TrainCategory, weight: u32) -> Self {
        Self(self.0.with(category, weight))
    }

    #[inline]
    pub fn weight(&self, category: TrainCategory) -> u32 {
        self.0.get_or(category, 0)
    }
}

impl Default for PriorityWeights {
    /// Express 10, Special 7, Local 4, Freight 2.
    fn default() -> Self {
        Self::empty()
            .with(TrainCategory::Express, 10)
            .with(TrainCategory::Local, 4)
            .with(TrainCategory::Freight, 2)
            .with(TrainCategory::Special, 7)
    }
}

// ── Scoring ───────────────────────────────────────────────────────────────────

/// `max(0, 1 − delay/60)`.
#[inline]
pub fn delay_penalty(delay_min: u32) -> f64 {
    (1.0 - f64::from(delay_min) / FULL_PENALTY_DELAY_MIN).max(0.0)
}

#[inline]
fn contribution(member: &FleetMember, weights: &PriorityWeights, penalty: f64) -> f64 {
    f64::from(weights.weight(member.category)) * f64::from(member.speed_kmh) * penalty
}

/// Delay-penalised weighted throughput score of `fleet`.
pub fn score(fleet: &Fleet, weights: &PriorityWeights) -> f64 {
    fleet
        .iter()
        .map(|m| contribution(m, weights, delay_penalty(m.delay_min)))
        .sum()
}

/// The score `fleet` would reach with every train on time.
pub fn max_score(fleet: &Fleet, weights: &PriorityWeights) -> f64 {
    fleet.iter().map(|m| contribution(m, weights, 1.0)).sum()
}

/// Normalise `score` against `ideal` as a whole percentage in `0..=100`.
pub fn percentage(score: f64, ideal: f64) -> u32 {
    if ideal <= 0.0 {
        return 0;
    }
    (score / ideal * 100.0).round().clamp(0.0, 100.0) as u32
}

// ── ThroughputScorer ──────────────────────────────────────────────────────────

/// Scores fleets against a fixed ideal.
///
/// The ideal is computed once from the baseline fleet, so a degraded
/// simulated fleet is measured against the same undelayed reference.
#[derive(Clone, Debug)]
pub struct ThroughputScorer {
    weights: PriorityWeights,
    ideal:   f64,
}

impl ThroughputScorer {
    pub fn new(baseline: &Fleet, weights: PriorityWeights) -> Self {
        let ideal = max_score(baseline, &weights);
        Self { weights, ideal }
    }

    pub fn weights(&self) -> &PriorityWeights {
        &self.weights
    }

    /// The undelayed baseline score used as the denominator.
    pub fn ideal(&self) -> f64 {
        self.ideal
    }

    pub fn score(&self, fleet: &Fleet) -> f64 {
        score(fleet, &self.weights)
    }

    /// Throughput of `fleet` as a percentage of the baseline ideal.
    pub fn percentage(&self, fleet: &Fleet) -> u32 {
        percentage(self.score(fleet), self.ideal)
    }
}
