//! `ops-core` — foundational types for the rail operations what-if engine.
//!
//! This crate is a dependency of every other `ops-*` crate.  It has no
//! `ops-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ids`]      | `TrainId`, `RunId`                                       |
//! | [`category`] | `TrainCategory`, `CategoryTable<T>`                      |
//! | [`range`]    | `DeltaRange` (inclusive perturbation bounds)             |
//! | [`time`]     | `Tick`, `SessionClock`, `SessionConfig`                  |
//! | [`rng`]      | `RangeSource` trait, `SimRng`, stub sources for tests    |
//! | [`error`]    | `OpsError`, `OpsResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required for JSON config loading and result export.        |

pub mod category;
pub mod error;
pub mod ids;
pub mod range;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use category::{CategoryTable, TrainCategory};
pub use error::{OpsError, OpsResult};
pub use ids::{RunId, TrainId};
pub use range::DeltaRange;
pub use rng::{MaxSource, MinSource, RangeSource, ScriptedSource, SimRng};
pub use time::{SessionClock, SessionConfig, Tick};
