//! Delay banding for individual trains.

use crate::FleetMember;

/// Delay above which a train is shown as delayed.
pub const DELAYED_ABOVE_MIN: u32 = 5;

/// Delay above which a train is shown as critical.
pub const CRITICAL_ABOVE_MIN: u32 = 15;

/// How late a train is running, banded for display.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrainStatus {
    OnTime,
    /// Late, but within the delayed threshold.
    Minor,
    Delayed,
    Critical,
}

impl TrainStatus {
    pub fn from_delay(delay_min: u32) -> Self {
        match delay_min {
            0 => TrainStatus::OnTime,
            d if d > CRITICAL_ABOVE_MIN => TrainStatus::Critical,
            d if d > DELAYED_ABOVE_MIN => TrainStatus::Delayed,
            _ => TrainStatus::Minor,
        }
    }

    pub fn of(member: &FleetMember) -> Self {
        Self::from_delay(member.delay_min)
    }

    /// `true` for statuses that should draw an operator's attention.
    pub fn needs_attention(self) -> bool {
        matches!(self, TrainStatus::Delayed | TrainStatus::Critical)
    }
}

/// Timeline label for a delay: `"On time"` or `"-12m"`.
pub fn delay_label(delay_min: u32) -> String {
    if delay_min == 0 {
        "On time".to_owned()
    } else {
        format!("-{delay_min}m")
    }
}
