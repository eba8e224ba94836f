//! `ops-scenario` — what-if scenario evaluation.
//!
//! # Crate layout
//!
//! | Module              | Contents                                                   |
//! |---------------------|------------------------------------------------------------|
//! | [`kind`]            | `ScenarioKind` (closed set), catalog text                  |
//! | [`profile`]         | `ScenarioImpactProfile` and the built-in profiles          |
//! | [`recommendations`] | Fixed per-scenario action plans                            |
//! | [`metrics`]         | `BaselineMetrics`, `AfterMetrics`, `SimulationResult`, deltas |
//! | [`evaluator`]       | `Evaluator` and the `evaluate` function                    |
//! | [`error`]           | `ScenarioError`, `ScenarioResult<T>`                       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ops_core::SimRng;
//! use ops_fleet::{Fleet, PriorityWeights};
//! use ops_scenario::Evaluator;
//!
//! let evaluator = Evaluator::new(Fleet::reference(), PriorityWeights::default());
//! let result = evaluator.evaluate_id("weather", &mut SimRng::new(42))?;
//! println!("{}: throughput {}%", result.scenario_title, result.after.throughput_percentage);
//! ```

pub mod error;
pub mod evaluator;
pub mod kind;
pub mod metrics;
pub mod profile;
pub mod recommendations;


pub use error::{ScenarioError, ScenarioResult};
pub use evaluator::{Evaluator, evaluate};
pub use kind::{CatalogEntry, ScenarioKind};
pub use metrics::{
    AfterMetrics, BaselineMetrics, CategoryDelay, DelayComparison, Metric, MetricDelta,
    SimulationResult, Trend, TrendComparison, TrendPoint,
};
pub use profile::ScenarioImpactProfile;
pub use recommendations::recommendations;
