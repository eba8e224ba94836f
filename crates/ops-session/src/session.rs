//! The scenario run session.
//!
//! # Run lifecycle
//!
//! ```text
//! run(id)        ─ parse id ── unknown ──▶ Error notification, Err, state unchanged
//!                      │
//!                      ▼
//!             discard pending run (if any)
//!             Info "Simulation Started"
//!             pending = { run, scenario, due = now + processing_delay }
//!
//! advance(..)    ─ now ≥ due ──▶ evaluate, current = result,
//!                                Success "Simulation Complete"
//!
//! cancel()       ─ pending discarded; current untouched
//! reset()        ─ pending discarded; current cleared; Info "Simulation Reset"
//! ```
//!
//! At most one run is pending.  The processing delay is cosmetic: the
//! evaluation itself is synchronous and happens when the delay elapses.

use log::{debug, info, warn};

use ops_core::{RangeSource, RunId, SessionClock, SessionConfig, SimRng, Tick};
use ops_scenario::{Evaluator, ScenarioKind, SimulationResult};

use crate::{Notification, SessionObserver, SessionResult, Severity};

/// A run that has started but not yet surfaced its result.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PendingRun {
    pub run:      RunId,
    pub scenario: ScenarioKind,
    pub due:      Tick,
}

/// Owns the read-only baseline, the session clock and RNG, the pending run
/// and the current result.
///
/// Build with [`SessionBuilder`][crate::SessionBuilder].
pub struct Session<R: RangeSource = SimRng> {
    pub(crate) config:    SessionConfig,
    pub(crate) clock:     SessionClock,
    pub(crate) evaluator: Evaluator,
    pub(crate) rng:       R,
    pub(crate) last_run:  RunId,
    pub(crate) pending:   Option<PendingRun>,
    pub(crate) current:   Option<SimulationResult>,
}

impl<R: RangeSource> Session<R> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn pending(&self) -> Option<&PendingRun> {
        self.pending.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// The most recently completed result, if any.
    pub fn current_result(&self) -> Option<&SimulationResult> {
        self.current.as_ref()
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Start a run for the scenario identified by `id`.
    ///
    /// An unknown id is reported to `obs` as an error notification and
    /// returned as [`ScenarioError::InvalidScenario`][ops_scenario::ScenarioError];
    /// the pending run and current result are left as they were.
    pub fn run<O: SessionObserver + ?Sized>(&mut self, id: &str, obs: &mut O) -> SessionResult<RunId> {
        let kind = match id.parse::<ScenarioKind>() {
            Ok(kind) => kind,
            Err(e) => {
                warn!("rejected scenario run: {e}");
                obs.on_notification(&Notification::new(
                    Severity::Error,
                    "Simulation Failed",
                    format!("Unknown scenario {id:?}."),
                ));
                return Err(e.into());
            }
        };
        Ok(self.run_kind(kind, obs))
    }

    /// Start a run for `kind`, superseding any pending run.
    pub fn run_kind<O: SessionObserver + ?Sized>(&mut self, kind: ScenarioKind, obs: &mut O) -> RunId {
        self.discard_pending(obs);

        self.last_run = self.last_run.next();
        let pending = PendingRun {
            run:      self.last_run,
            scenario: kind,
            due:      self.clock.now() + self.config.processing_delay_ms,
        };
        debug!("{} started for {kind}, due at {}", pending.run, pending.due);
        self.pending = Some(pending);

        obs.on_notification(&Notification::new(
            Severity::Info,
            "Simulation Started",
            format!("Running {} scenario...", kind.title()),
        ));
        pending.run
    }

    /// Advance the clock by `ms` and complete the pending run if it is due.
    ///
    /// Returns the run that completed, if any.
    pub fn advance_by<O: SessionObserver + ?Sized>(&mut self, ms: u64, obs: &mut O) -> Option<RunId> {
        self.clock.advance_by(ms);
        self.poll(obs)
    }

    /// Advance the clock to `tick` and complete the pending run if it is due.
    pub fn advance_to<O: SessionObserver + ?Sized>(&mut self, tick: Tick, obs: &mut O) -> Option<RunId> {
        self.clock.advance_to(tick);
        self.poll(obs)
    }

    /// Start a run and advance the clock by the processing delay so it
    /// completes.  The result is then available from [`current_result`].
    ///
    /// [`current_result`]: Session::current_result
    pub fn run_to_completion<O: SessionObserver + ?Sized>(&mut self, id: &str, obs: &mut O) -> SessionResult<RunId> {
        let run = self.run(id, obs)?;
        let delay = self.config.processing_delay_ms;
        let completed = self.advance_by(delay, obs);
        debug_assert_eq!(completed, Some(run));
        Ok(run)
    }

    /// Discard the pending run without touching the current result.
    pub fn cancel<O: SessionObserver + ?Sized>(&mut self, obs: &mut O) -> Option<RunId> {
        self.discard_pending(obs)
    }

    /// Clear the current result and any pending run.
    pub fn reset<O: SessionObserver + ?Sized>(&mut self, obs: &mut O) {
        self.discard_pending(obs);
        self.current = None;
        obs.on_notification(&Notification::new(
            Severity::Info,
            "Simulation Reset",
            "Ready for a new scenario.",
        ));
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn poll<O: SessionObserver + ?Sized>(&mut self, obs: &mut O) -> Option<RunId> {
        let pending = self.pending.filter(|p| p.due <= self.clock.now())?;
        self.pending = None;

        let result = self.evaluator.evaluate(pending.scenario, &mut self.rng);
        info!(
            "{} complete: {} punctuality {}% -> {}%",
            pending.run, pending.scenario, result.before.punctuality, result.after.punctuality
        );
        obs.on_result(pending.run, &result);
        self.current = Some(result);

        obs.on_notification(&Notification::new(
            Severity::Success,
            "Simulation Complete",
            "Results are ready for analysis.",
        ));
        Some(pending.run)
    }

    fn discard_pending<O: SessionObserver + ?Sized>(&mut self, obs: &mut O) -> Option<RunId> {
        let pending = self.pending.take()?;
        debug!("{} discarded before completion", pending.run);
        obs.on_discarded(pending.run);
        Some(pending.run)
    }
}
