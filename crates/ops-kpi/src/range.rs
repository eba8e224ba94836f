//! Dashboard time window.

use std::fmt;
use std::str::FromStr;

use crate::KpiError;

/// Window the punctuality trend covers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeRange {
    /// Hourly points from 8:00 to 19:00.
    #[default]
    Today,
    /// Daily points `Day 1` … `Day 7`.
    Week,
    /// Same seven daily points as [`TimeRange::Week`].
    Month,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Today, TimeRange::Week, TimeRange::Month];

    pub fn id(self) -> &'static str {
        match self {
            TimeRange::Today => "today",
            TimeRange::Week  => "week",
            TimeRange::Month => "month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Today => "Today",
            TimeRange::Week  => "This Week",
            TimeRange::Month => "This Month",
        }
    }

    /// Number of points on the punctuality trend.
    pub fn trend_len(self) -> usize {
        match self {
            TimeRange::Today => 12,
            TimeRange::Week | TimeRange::Month => 7,
        }
    }

    /// Axis label of trend point `i`.
    pub fn trend_label(self, i: usize) -> String {
        match self {
            TimeRange::Today => hour_label(i),
            TimeRange::Week | TimeRange::Month => format!("Day {}", i + 1),
        }
    }
}

/// `"8:00"` for `i = 0`, `"19:00"` for `i = 11`.
pub(crate) fn hour_label(i: usize) -> String {
    format!("{}:00", 8 + i)
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TimeRange {
    type Err = KpiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeRange::ALL
            .into_iter()
            .find(|r| r.id() == s)
            .ok_or_else(|| KpiError::UnknownTimeRange(s.to_owned()))
    }
}
