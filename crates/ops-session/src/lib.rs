//! `ops-session` — the what-if run session.
//!
//! A [`Session`] holds the read-only baseline and at most one pending run.
//! Starting a run discards any run still pending; the result surfaces once
//! the session clock has advanced past the processing delay.  Hosts drive
//! the clock explicitly, so nothing here sleeps or spawns.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`session`]  | `Session`, `PendingRun`                                     |
//! | [`builder`]  | `SessionBuilder`                                            |
//! | [`observer`] | `SessionObserver`, `Notification`, `LogObserver`, `Tee`     |
//! | [`error`]    | `SessionError`, `SessionResult<T>`                          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ops_core::SessionConfig;
//! use ops_session::{LogObserver, SessionBuilder};
//!
//! let mut session = SessionBuilder::new(SessionConfig::default()).build()?;
//! session.run_to_completion("signal", &mut LogObserver)?;
//! let result = session.current_result().unwrap();
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod session;

#[cfg(test)]
mod tests;

pub use builder::SessionBuilder;
pub use error::{SessionError, SessionResult};
pub use observer::{LogObserver, NoopObserver, Notification, SessionObserver, Severity, Tee};
pub use session::{PendingRun, Session};
