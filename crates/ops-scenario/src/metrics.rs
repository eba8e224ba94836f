//! Baseline and simulated metric snapshots.

use ops_core::TrainCategory;
use ops_fleet::{Fleet, ThroughputScorer};

use crate::ScenarioKind;

// ── Baseline ──────────────────────────────────────────────────────────────────

/// Baseline delay for one train category (minutes).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryDelay {
    pub category: TrainCategory,
    pub before:   i64,
}

/// One labelled point on the punctuality trend (percent).
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrendPoint {
    pub label:  String,
    pub before: i64,
}

/// The undisturbed reference state a scenario is compared against.
///
/// Built once per session and never mutated.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaselineMetrics {
    pub punctuality:           i64,
    pub average_delay:         i64,
    pub throughput_percentage: i64,
    pub utilization:           i64,
    pub delays_by_category:    Vec<CategoryDelay>,
    pub punctuality_trend:     Vec<TrendPoint>,
}

impl BaselineMetrics {
    /// The operations-centre reference baseline, with throughput measured
    /// from `fleet` by `scorer`.
    pub fn reference(fleet: &Fleet, scorer: &ThroughputScorer) -> Self {
        let trend = [("08:00", 95), ("10:00", 92), ("12:00", 90), ("14:00", 88), ("16:00", 91), ("18:00", 89)];
        Self {
            punctuality:           92,
            average_delay:         8,
            throughput_percentage: i64::from(scorer.percentage(fleet)),
            utilization:           76,
            delays_by_category: vec![
                CategoryDelay { category: TrainCategory::Express, before: 6 },
                CategoryDelay { category: TrainCategory::Local,   before: 5 },
                CategoryDelay { category: TrainCategory::Freight, before: 15 },
            ],
            punctuality_trend: trend
                .into_iter()
                .map(|(label, before)| TrendPoint { label: label.to_owned(), before })
                .collect(),
        }
    }

    pub fn value(&self, metric: Metric) -> i64 {
        match metric {
            Metric::Punctuality  => self.punctuality,
            Metric::AverageDelay => self.average_delay,
            Metric::Throughput   => self.throughput_percentage,
            Metric::Utilization  => self.utilization,
        }
    }
}

// ── Simulated ─────────────────────────────────────────────────────────────────

/// Headline metrics after a scenario is applied.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AfterMetrics {
    /// Never below 0.
    pub punctuality:           i64,
    pub average_delay:         i64,
    /// Always within `0..=100`.
    pub throughput_percentage: i64,
    /// Never above 100.
    pub utilization:           i64,
}

impl AfterMetrics {
    pub fn value(&self, metric: Metric) -> i64 {
        match metric {
            Metric::Punctuality  => self.punctuality,
            Metric::AverageDelay => self.average_delay,
            Metric::Throughput   => self.throughput_percentage,
            Metric::Utilization  => self.utilization,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DelayComparison {
    pub category: TrainCategory,
    pub before:   i64,
    pub after:    i64,
}

#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrendComparison {
    pub label:  String,
    pub before: i64,
    /// Never below 50.
    pub after:  i64,
}

/// Everything one scenario evaluation produces.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    pub scenario:           ScenarioKind,
    pub scenario_title:     String,
    pub before:             BaselineMetrics,
    pub after:              AfterMetrics,
    pub delays_by_category: Vec<DelayComparison>,
    pub punctuality_trend:  Vec<TrendComparison>,
    pub recommendations:    Vec<String>,
}

impl SimulationResult {
    /// Before/after change for one headline metric.
    pub fn delta(&self, metric: Metric) -> MetricDelta {
        MetricDelta::new(metric, self.before.value(metric), self.after.value(metric))
    }

    /// Changes for all headline metrics, in display order.
    pub fn deltas(&self) -> [MetricDelta; 4] {
        Metric::ALL.map(|m| self.delta(m))
    }
}

// ── Deltas ────────────────────────────────────────────────────────────────────

/// A headline metric shown on the comparison panel.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    Punctuality,
    AverageDelay,
    Throughput,
    Utilization,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Punctuality,
        Metric::AverageDelay,
        Metric::Throughput,
        Metric::Utilization,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Punctuality  => "Punctuality",
            Metric::AverageDelay => "Avg Delay",
            Metric::Throughput   => "Throughput",
            Metric::Utilization  => "Utilization",
        }
    }

    /// Unit suffix appended to formatted values.
    pub fn unit(self) -> &'static str {
        match self {
            Metric::AverageDelay => " min",
            _ => "%",
        }
    }

    pub fn lower_is_better(self) -> bool {
        matches!(self, Metric::AverageDelay)
    }
}

/// Direction of a change, judged by whether the metric improved.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trend {
    Improved,
    Worsened,
    Unchanged,
}

impl Trend {
    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Improved  => "improved",
            Trend::Worsened  => "worsened",
            Trend::Unchanged => "unchanged",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricDelta {
    pub metric: Metric,
    pub before: i64,
    pub after:  i64,
}

impl MetricDelta {
    pub fn new(metric: Metric, before: i64, after: i64) -> Self {
        Self { metric, before, after }
    }

    #[inline]
    pub fn change(&self) -> i64 {
        self.after - self.before
    }

    pub fn trend(&self) -> Trend {
        let change = self.change();
        if change == 0 {
            return Trend::Unchanged;
        }
        let improved = if self.metric.lower_is_better() { change < 0 } else { change > 0 };
        if improved { Trend::Improved } else { Trend::Worsened }
    }

    /// Signed change with unit: `"+5%"`, `"-3 min"`, `"0%"`.
    pub fn formatted_change(&self) -> String {
        let change = self.change();
        let sign = if change > 0 { "+" } else { "" };
        format!("{sign}{change}{}", self.metric.unit())
    }
}
