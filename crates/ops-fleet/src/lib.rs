//! `ops-fleet` — fleet snapshots and throughput scoring.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`member`] | `FleetMember`, `Fleet` (ordered snapshot, unique ids)         |
//! | [`scorer`] | `PriorityWeights`, `score`, `max_score`, `ThroughputScorer`   |
//! | [`loader`] | CSV fleet loading                                             |
//! | [`status`] | `TrainStatus` delay banding and timeline labels               |
//! | [`error`]  | `FleetError`, `FleetResult<T>`                                |

pub mod error;
pub mod loader;
pub mod member;
pub mod scorer;
pub mod status;


pub use error::{FleetError, FleetResult};
pub use loader::{load_fleet_csv, load_fleet_reader};
pub use member::{Fleet, FleetMember};
pub use scorer::{PriorityWeights, ThroughputScorer, delay_penalty, max_score, percentage, score};
pub use status::{TrainStatus, delay_label};
