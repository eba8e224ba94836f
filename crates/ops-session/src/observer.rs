//! Session observer trait and notification events.

use log::{Level, log};

use ops_core::RunId;
use ops_scenario::SimulationResult;

/// How a notification should be presented.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info    => "info",
            Severity::Success => "success",
            Severity::Error   => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-facing message emitted by the session.  Rendering and lifetime
/// belong to the host.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notification {
    pub severity: Severity,
    pub title:    String,
    pub message:  String,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { severity, title: title.into(), message: message.into() }
    }
}

/// Callbacks invoked by [`Session`][crate::Session] as runs start, complete
/// or are discarded.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SessionObserver {
    /// A notification for the operator.
    fn on_notification(&mut self, _notification: &Notification) {}

    /// A run completed and its result is now the session's current result.
    fn on_result(&mut self, _run: RunId, _result: &SimulationResult) {}

    /// A pending run was discarded before completing, either by a newer run,
    /// a cancel or a reset.
    fn on_discarded(&mut self, _run: RunId) {}
}

/// A [`SessionObserver`] that does nothing.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}

/// Forwards notifications to the `log` facade under the `ops::notify` target.
pub struct LogObserver;

impl SessionObserver for LogObserver {
    fn on_notification(&mut self, n: &Notification) {
        let level = match n.severity {
            Severity::Info | Severity::Success => Level::Info,
            Severity::Error => Level::Warn,
        };
        log!(target: "ops::notify", level, "[{}] {}: {}", n.severity, n.title, n.message);
    }

    fn on_discarded(&mut self, run: RunId) {
        log!(target: "ops::notify", Level::Debug, "{run} discarded");
    }
}

/// Fan a session's callbacks out to two observers.
pub struct Tee<A, B>(pub A, pub B);

impl<A: SessionObserver, B: SessionObserver> SessionObserver for Tee<A, B> {
    fn on_notification(&mut self, n: &Notification) {
        self.0.on_notification(n);
        self.1.on_notification(n);
    }

    fn on_result(&mut self, run: RunId, result: &SimulationResult) {
        self.0.on_result(run, result);
        self.1.on_result(run, result);
    }

    fn on_discarded(&mut self, run: RunId) {
        self.0.on_discarded(run);
        self.1.on_discarded(run);
    }
}
