//! Per-scenario perturbation profiles.

use ops_core::{CategoryTable, DeltaRange, TrainCategory};

use crate::{ScenarioError, ScenarioKind, ScenarioResult};

/// Factor applied when a category has no entry in a factor table.
pub const NEUTRAL_FACTOR: f64 = 1.0;

/// Perturbation bounds and per-category multipliers for one scenario.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioImpactProfile {
    /// Added to punctuality (percentage points).
    pub punctuality:         DeltaRange,
    /// Added to average delay and, with a halved upper bound, to each train's
    /// delay (minutes).
    pub delay:               DeltaRange,
    /// Added to utilization (percentage points).
    pub utilization:         DeltaRange,
    /// Multiplies each train's speed.
    pub speed_factor:        CategoryTable<f64>,
    /// Multiplies each category's baseline delay.
    pub delay_impact_factor: CategoryTable<f64>,
}

impl ScenarioImpactProfile {
    #[inline]
    pub fn speed_factor(&self, category: TrainCategory) -> f64 {
        self.speed_factor.get_or(category, NEUTRAL_FACTOR)
    }

    #[inline]
    pub fn delay_impact_factor(&self, category: TrainCategory) -> f64 {
        self.delay_impact_factor.get_or(category, NEUTRAL_FACTOR)
    }

    /// Bounds for the per-train delay increase, drawn against a halved
    /// upper bound `half = floor(max / 2)`.
    ///
    /// | Case                     | Range                    |
    /// |--------------------------|--------------------------|
    /// | `half >= min`            | `[min, half]`            |
    /// | `half + 1 <= min - 1`    | `[half + 1, min - 1]`    |
    /// | otherwise                | `[min, min]`             |
    ///
    /// When the halved bound falls below `min` the draw lands strictly
    /// between the two bounds, so a reversed range never adds more than
    /// `min - 1` minutes.
    pub fn per_train_delay(&self) -> DeltaRange {
        let min = self.delay.min();
        let half = self.delay.max().div_euclid(2);
        if half >= min {
            DeltaRange::fixed(min, half)
        } else if half + 1 < min {
            DeltaRange::fixed(half + 1, min - 1)
        } else {
            DeltaRange::fixed(min, min)
        }
    }

    /// Check that every factor is finite and strictly positive.
    pub fn validate(&self) -> ScenarioResult<()> {
        let tables = [("speed_factor", &self.speed_factor), ("delay_impact_factor", &self.delay_impact_factor)];
        for (name, table) in tables {
            for (category, factor) in table.iter() {
                if !(factor.is_finite() && factor > 0.0) {
                    return Err(ScenarioError::InvalidProfile(format!(
                        "{name} for {category} must be positive, got {factor}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// The built-in profile for `kind`.
    pub fn builtin(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::Delay => profile((-20, -12), (10, 18), (8, 15), [0.8, 0.9, 1.0], [1.8, 1.3, 1.1]),
            ScenarioKind::Breakdown => profile((-30, -20), (15, 25), (15, 20), [0.6, 0.7, 0.5], [2.5, 1.8, 1.5]),
            ScenarioKind::Weather => profile((-25, -15), (12, 20), (10, 18), [0.7, 0.7, 0.6], [1.5, 2.0, 2.2]),
            ScenarioKind::Maintenance => profile((-22, -14), (14, 22), (12, 18), [0.75, 0.8, 0.6], [1.9, 1.9, 1.9]),
            ScenarioKind::Signal => profile((-35, -25), (20, 30), (18, 25), [0.5, 0.6, 0.6], [2.8, 2.2, 1.8]),
            ScenarioKind::Passenger => profile((-15, -8), (8, 15), (5, 10), [0.9, 0.95, 1.0], [1.4, 1.1, 1.0]),
        }
    }
}

/// Built-in profiles only carry Express / Local / Freight factors; Special
/// falls back to [`NEUTRAL_FACTOR`].
fn profile(
    punctuality: (i64, i64),
    delay:       (i64, i64),
    utilization: (i64, i64),
    speed:       [f64; 3],
    impact:      [f64; 3],
) -> ScenarioImpactProfile {
    let table = |[express, local, freight]: [f64; 3]| {
        CategoryTable::new()
            .with(TrainCategory::Express, express)
            .with(TrainCategory::Local, local)
            .with(TrainCategory::Freight, freight)
    };
    ScenarioImpactProfile {
        punctuality:         DeltaRange::fixed(punctuality.0, punctuality.1),
        delay:               DeltaRange::fixed(delay.0, delay.1),
        utilization:         DeltaRange::fixed(utilization.0, utilization.1),
        speed_factor:        table(speed),
        delay_impact_factor: table(impact),
    }
}
