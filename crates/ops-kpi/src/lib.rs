//! `ops-kpi` — the operations KPI dashboard.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`range`]    | `TimeRange` (Today / Week / Month)                           |
//! | [`snapshot`] | `KpiSnapshot` and its rows, generated from a `RangeSource`   |
//! | [`feed`]     | `KpiFeed`, refresh on interval or range change               |
//! | [`status`]   | `KpiStatus` bands for punctuality and delay                  |
//! | [`error`]    | `KpiError`, `KpiResult<T>`                                   |

pub mod error;
pub mod feed;
pub mod range;
pub mod snapshot;
pub mod status;

#[cfg(test)]
mod tests;

pub use error::{KpiError, KpiResult};
pub use feed::KpiFeed;
pub use range::TimeRange;
pub use snapshot::{
    DelayByType, HOURLY_CAPACITY, HOURLY_ROWS, HeadlineKpis, HourlyThroughput, KpiSnapshot,
    PUNCTUALITY_TARGET, PunctualityPoint, SectionShare,
};
pub use status::{KpiStatus, delay_status, punctuality_status};
