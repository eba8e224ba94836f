//! `ops-output` — scenario result export.
//!
//! | Backend  | Files created                                                        |
//! |----------|----------------------------------------------------------------------|
//! | CSV      | `metrics.csv`, `delays_by_category.csv`, `punctuality_trend.csv`, `recommendations.csv` |
//! | JSON     | `result.json`                                                        |
//!
//! Both backends implement [`ResultWriter`] and are driven by
//! [`SessionOutputObserver`], which implements `ops_session::SessionObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ops_output::{CsvWriter, SessionOutputObserver};
//!
//! let mut obs = SessionOutputObserver::new(CsvWriter::new(Path::new("./output"))?);
//! session.run_to_completion("weather", &mut obs)?;
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::{JsonWriter, RunRecord};
pub use observer::SessionOutputObserver;
pub use row::{CategoryDelayRow, MetricRow, RecommendationRow, TrendRow};
pub use writer::ResultWriter;
