//! Flat row types written by the CSV backend.

use ops_core::{RunId, TrainCategory};
use ops_scenario::{Metric, ScenarioKind, SimulationResult, Trend};

/// One headline metric of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricRow {
    pub run:      u32,
    pub scenario: ScenarioKind,
    pub metric:   Metric,
    pub before:   i64,
    pub after:    i64,
    pub change:   i64,
    pub trend:    Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDelayRow {
    pub run:      u32,
    pub scenario: ScenarioKind,
    pub category: TrainCategory,
    pub before:   i64,
    pub after:    i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendRow {
    pub run:      u32,
    pub scenario: ScenarioKind,
    pub label:    String,
    pub before:   i64,
    pub after:    i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRow {
    pub run:      u32,
    pub scenario: ScenarioKind,
    /// 1-based position in the action plan.
    pub rank:     usize,
    pub text:     String,
}

pub fn metric_rows(run: RunId, r: &SimulationResult) -> Vec<MetricRow> {
    r.deltas()
        .iter()
        .map(|d| MetricRow {
            run:      run.0,
            scenario: r.scenario,
            metric:   d.metric,
            before:   d.before,
            after:    d.after,
            change:   d.change(),
            trend:    d.trend(),
        })
        .collect()
}

pub fn category_delay_rows(run: RunId, r: &SimulationResult) -> Vec<CategoryDelayRow> {
    r.delays_by_category
        .iter()
        .map(|d| CategoryDelayRow {
            run:      run.0,
            scenario: r.scenario,
            category: d.category,
            before:   d.before,
            after:    d.after,
        })
        .collect()
}

pub fn trend_rows(run: RunId, r: &SimulationResult) -> Vec<TrendRow> {
    r.punctuality_trend
        .iter()
        .map(|p| TrendRow {
            run:      run.0,
            scenario: r.scenario,
            label:    p.label.clone(),
            before:   p.before,
            after:    p.after,
        })
        .collect()
}

pub fn recommendation_rows(run: RunId, r: &SimulationResult) -> Vec<RecommendationRow> {
    r.recommendations
        .iter()
        .enumerate()
        .map(|(i, text)| RecommendationRow {
            run:      run.0,
            scenario: r.scenario,
            rank:     i + 1,
            text:     text.clone(),
        })
        .collect()
}
