//! Scenario evaluation.
//!
//! # Steps
//!
//! ```text
//! ① Simulated fleet — each train: speed × speed_factor (rounded),
//!                     delay + draw(per_train_delay), see ScenarioImpactProfile
//! ② Throughput      — simulated fleet against the baseline ideal
//! ③ Headline        — punctuality + draw(punctuality), floored at 0
//!                     average delay + draw(delay)
//!                     utilization + draw(utilization), capped at 100
//! ④ Category delays — round(before × delay_impact_factor) + draw(1 ..= 5)
//! ⑤ Trend           — before + draw(punctuality), floored at 50
//! ⑥ Recommendations — fixed list for the scenario
//! ```
//!
//! Draws happen in exactly this order (fleet members, categories and trend
//! points each in sequence), so a scripted [`RangeSource`] reproduces a
//! result exactly.

use log::debug;

use ops_core::{DeltaRange, RangeSource};
use ops_fleet::{Fleet, PriorityWeights, ThroughputScorer};

use crate::{
    AfterMetrics, BaselineMetrics, DelayComparison, ScenarioImpactProfile, ScenarioKind,
    ScenarioResult, SimulationResult, TrendComparison, recommendations,
};

/// Lowest value a simulated trend point can take.
pub const TREND_FLOOR: i64 = 50;

/// Extra minutes added to every simulated category delay.
pub const CATEGORY_DELAY_JITTER: DeltaRange = DeltaRange::fixed(1, 5);

/// Holds the read-only baseline of a session and evaluates scenarios against
/// it.
#[derive(Clone, Debug)]
pub struct Evaluator {
    fleet:    Fleet,
    scorer:   ThroughputScorer,
    baseline: BaselineMetrics,
}

impl Evaluator {
    /// Evaluator over `fleet` with the reference baseline metrics.
    pub fn new(fleet: Fleet, weights: PriorityWeights) -> Self {
        let scorer = ThroughputScorer::new(&fleet, weights);
        let baseline = BaselineMetrics::reference(&fleet, &scorer);
        Self { fleet, scorer, baseline }
    }

    /// Evaluator with explicitly supplied baseline metrics.
    pub fn with_baseline(fleet: Fleet, weights: PriorityWeights, baseline: BaselineMetrics) -> Self {
        let scorer = ThroughputScorer::new(&fleet, weights);
        Self { fleet, scorer, baseline }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn scorer(&self) -> &ThroughputScorer {
        &self.scorer
    }

    pub fn baseline(&self) -> &BaselineMetrics {
        &self.baseline
    }

    /// Evaluate `kind` with its built-in profile.
    pub fn evaluate<R: RangeSource + ?Sized>(&self, kind: ScenarioKind, rng: &mut R) -> SimulationResult {
        let profile = ScenarioImpactProfile::builtin(kind);
        evaluate(kind, &self.fleet, &self.baseline, &profile, &self.scorer, rng)
    }

    /// Evaluate a scenario given by its string identifier.
    pub fn evaluate_id<R: RangeSource + ?Sized>(&self, id: &str, rng: &mut R) -> ScenarioResult<SimulationResult> {
        let kind: ScenarioKind = id.parse()?;
        Ok(self.evaluate(kind, rng))
    }

    /// Evaluate `kind` with a caller-supplied profile.
    pub fn evaluate_with<R: RangeSource + ?Sized>(
        &self,
        kind:    ScenarioKind,
        profile: &ScenarioImpactProfile,
        rng:     &mut R,
    ) -> ScenarioResult<SimulationResult> {
        profile.validate()?;
        Ok(evaluate(kind, &self.fleet, &self.baseline, profile, &self.scorer, rng))
    }
}

/// Apply `profile` to the baseline and produce a result.
///
/// `baseline_fleet` and `baseline` are only read; the simulated fleet is a
/// new snapshot.
pub fn evaluate<R: RangeSource + ?Sized>(
    kind:           ScenarioKind,
    baseline_fleet: &Fleet,
    baseline:       &BaselineMetrics,
    profile:        &ScenarioImpactProfile,
    scorer:         &ThroughputScorer,
    rng:            &mut R,
) -> SimulationResult {
    // ── ① Simulated fleet ─────────────────────────────────────────────────
    let per_train_delay = profile.per_train_delay();
    let simulated = baseline_fleet.derive(|m| {
        let speed = (f64::from(m.speed_kmh) * profile.speed_factor(m.category)).round();
        let delay = i64::from(m.delay_min) + per_train_delay.draw(rng);
        (speed.max(0.0) as u32, clamp_minutes(delay))
    });

    // ── ② Throughput ──────────────────────────────────────────────────────
    let throughput_percentage = i64::from(scorer.percentage(&simulated));

    // ── ③ Headline metrics ────────────────────────────────────────────────
    let after = AfterMetrics {
        punctuality:   (baseline.punctuality + profile.punctuality.draw(rng)).max(0),
        average_delay: baseline.average_delay + profile.delay.draw(rng),
        throughput_percentage,
        utilization:   (baseline.utilization + profile.utilization.draw(rng)).min(100),
    };

    // ── ④ Category delays ─────────────────────────────────────────────────
    let delays_by_category = baseline
        .delays_by_category
        .iter()
        .map(|row| {
            let scaled = (row.before as f64 * profile.delay_impact_factor(row.category)).round() as i64;
            DelayComparison {
                category: row.category,
                before:   row.before,
                after:    scaled + CATEGORY_DELAY_JITTER.draw(rng),
            }
        })
        .collect();

    // ── ⑤ Trend ───────────────────────────────────────────────────────────
    let punctuality_trend = baseline
        .punctuality_trend
        .iter()
        .map(|p| TrendComparison {
            label:  p.label.clone(),
            before: p.before,
            after:  (p.before + profile.punctuality.draw(rng)).max(TREND_FLOOR),
        })
        .collect();

    debug!(
        "evaluated {kind}: throughput {}% -> {}%",
        baseline.throughput_percentage, after.throughput_percentage
    );

    SimulationResult {
        scenario:           kind,
        scenario_title:     kind.title().to_owned(),
        before:             baseline.clone(),
        after,
        delays_by_category,
        punctuality_trend,
        recommendations:    recommendations(kind).iter().map(|s| (*s).to_owned()).collect(),
    }
}

fn clamp_minutes(delay: i64) -> u32 {
    u32::try_from(delay.max(0)).unwrap_or(u32::MAX)
}
