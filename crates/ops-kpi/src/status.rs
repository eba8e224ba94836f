//! Colour bands for KPI values.

/// Good / Warning / Critical band of a KPI value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KpiStatus {
    Good,
    Warning,
    Critical,
}

impl KpiStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            KpiStatus::Good     => "good",
            KpiStatus::Warning  => "warning",
            KpiStatus::Critical => "critical",
        }
    }
}

impl std::fmt::Display for KpiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `≥ 90` Good, `≥ 80` Warning, otherwise Critical.
pub fn punctuality_status(percent: i64) -> KpiStatus {
    if percent >= 90 {
        KpiStatus::Good
    } else if percent >= 80 {
        KpiStatus::Warning
    } else {
        KpiStatus::Critical
    }
}

/// `≤ 5` Good, `≤ 10` Warning, otherwise Critical.
pub fn delay_status(minutes: i64) -> KpiStatus {
    if minutes <= 5 {
        KpiStatus::Good
    } else if minutes <= 10 {
        KpiStatus::Warning
    } else {
        KpiStatus::Critical
    }
}
