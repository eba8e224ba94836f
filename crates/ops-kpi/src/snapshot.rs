//! One generated KPI dashboard snapshot.
//!
//! Every figure is drawn from a [`RangeSource`] in a fixed order:
//!
//! ```text
//! headline   punctuality, average delay, throughput, utilization
//! trend      punctuality per point (12 for Today, 7 otherwise)
//! delays     per category: delay, count      (Express, Local, Freight)
//! sections   share per category              (Express, Local, Freight, Special)
//! hourly     per hour: trains, efficiency    (8:00 … 19:00)
//! ```

use ops_core::{DeltaRange, RangeSource, TrainCategory};

use crate::TimeRange;
use crate::range::hour_label;

/// Punctuality target line drawn on the trend chart (percent).
pub const PUNCTUALITY_TARGET: i64 = 90;

/// Hourly train capacity of the network.
pub const HOURLY_CAPACITY: i64 = 30;

/// Hours covered by the throughput table.
pub const HOURLY_ROWS: usize = 12;

const HEADLINE_PUNCTUALITY: DeltaRange = DeltaRange::fixed(85, 94);
const HEADLINE_DELAY:       DeltaRange = DeltaRange::fixed(6, 10);
const HEADLINE_THROUGHPUT:  DeltaRange = DeltaRange::fixed(22, 25);
const HEADLINE_UTILIZATION: DeltaRange = DeltaRange::fixed(70, 84);

const TREND_PUNCTUALITY: DeltaRange = DeltaRange::fixed(80, 94);

/// (category, delay range, count range)
const DELAY_PROFILES: [(TrainCategory, DeltaRange, DeltaRange); 3] = [
    (TrainCategory::Express, DeltaRange::fixed(3, 7),   DeltaRange::fixed(15, 24)),
    (TrainCategory::Local,   DeltaRange::fixed(5, 12),  DeltaRange::fixed(20, 34)),
    (TrainCategory::Freight, DeltaRange::fixed(10, 21), DeltaRange::fixed(5, 12)),
];

const SECTION_SHARES: [(TrainCategory, DeltaRange); 4] = [
    (TrainCategory::Express, DeltaRange::fixed(40, 49)),
    (TrainCategory::Local,   DeltaRange::fixed(30, 39)),
    (TrainCategory::Freight, DeltaRange::fixed(15, 19)),
    (TrainCategory::Special, DeltaRange::fixed(3, 5)),
];

const HOURLY_TRAINS:     DeltaRange = DeltaRange::fixed(18, 23);
const HOURLY_EFFICIENCY: DeltaRange = DeltaRange::fixed(70, 89);

// ── Rows ──────────────────────────────────────────────────────────────────────

/// Headline KPI cards.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeadlineKpis {
    pub punctuality:   i64,
    pub average_delay: i64,
    /// Trains per hour.
    pub throughput:    i64,
    pub utilization:   i64,
}

#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PunctualityPoint {
    pub label:       String,
    pub punctuality: i64,
    pub target:      i64,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DelayByType {
    pub category: TrainCategory,
    /// Average delay in minutes.
    pub delay:    i64,
    /// Number of delayed trains.
    pub count:    i64,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionShare {
    pub category: TrainCategory,
    pub value:    i64,
}

#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourlyThroughput {
    pub hour:       String,
    pub trains:     i64,
    pub capacity:   i64,
    pub efficiency: i64,
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KpiSnapshot {
    pub range:               TimeRange,
    pub headline:            HeadlineKpis,
    pub punctuality_trend:   Vec<PunctualityPoint>,
    pub delays_by_type:      Vec<DelayByType>,
    pub section_utilization: Vec<SectionShare>,
    pub hourly_throughput:   Vec<HourlyThroughput>,
}

impl KpiSnapshot {
    /// Draw a fresh snapshot for `range`.
    pub fn generate<R: RangeSource + ?Sized>(range: TimeRange, rng: &mut R) -> Self {
        let headline = HeadlineKpis {
            punctuality:   HEADLINE_PUNCTUALITY.draw(rng),
            average_delay: HEADLINE_DELAY.draw(rng),
            throughput:    HEADLINE_THROUGHPUT.draw(rng),
            utilization:   HEADLINE_UTILIZATION.draw(rng),
        };

        let punctuality_trend = (0..range.trend_len())
            .map(|i| PunctualityPoint {
                label:       range.trend_label(i),
                punctuality: TREND_PUNCTUALITY.draw(rng),
                target:      PUNCTUALITY_TARGET,
            })
            .collect();

        let delays_by_type = DELAY_PROFILES
            .iter()
            .map(|&(category, delay, count)| DelayByType {
                category,
                delay: delay.draw(rng),
                count: count.draw(rng),
            })
            .collect();

        let section_utilization = SECTION_SHARES
            .iter()
            .map(|&(category, share)| SectionShare { category, value: share.draw(rng) })
            .collect();

        let hourly_throughput = (0..HOURLY_ROWS)
            .map(|i| HourlyThroughput {
                hour:       hour_label(i),
                trains:     HOURLY_TRAINS.draw(rng),
                capacity:   HOURLY_CAPACITY,
                efficiency: HOURLY_EFFICIENCY.draw(rng),
            })
            .collect();

        Self {
            range,
            headline,
            punctuality_trend,
            delays_by_type,
            section_utilization,
            hourly_throughput,
        }
    }

    /// Mean of the trend points, rounded; `None` for an empty trend.
    pub fn mean_trend_punctuality(&self) -> Option<i64> {
        if self.punctuality_trend.is_empty() {
            return None;
        }
        let sum: i64 = self.punctuality_trend.iter().map(|p| p.punctuality).sum();
        let n = self.punctuality_trend.len() as f64;
        Some((sum as f64 / n).round() as i64)
    }

    /// Total trains across the hourly throughput table.
    pub fn total_hourly_trains(&self) -> i64 {
        self.hourly_throughput.iter().map(|h| h.trains).sum()
    }
}
