//! Unit tests for ops-session.

use ops_core::{MinSource, RunId, SessionConfig};
use ops_scenario::SimulationResult;

use crate::{Notification, Session, SessionBuilder, SessionObserver, Severity};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Records every callback in arrival order.
#[derive(Default)]
struct Recorder {
    notifications: Vec<Notification>,
    results:       Vec<RunId>,
    discarded:     Vec<RunId>,
}

impl Recorder {
    fn titles(&self) -> Vec<&str> {
        self.notifications.iter().map(|n| n.title.as_str()).collect()
    }
}

impl SessionObserver for Recorder {
    fn on_notification(&mut self, n: &Notification) {
        self.notifications.push(n.clone());
    }

    fn on_result(&mut self, run: RunId, _result: &SimulationResult) {
        self.results.push(run);
    }

    fn on_discarded(&mut self, run: RunId) {
        self.discarded.push(run);
    }
}

fn min_session(delay_ms: u64) -> Session<MinSource> {
    let config = SessionConfig { processing_delay_ms: delay_ms, ..SessionConfig::default() };
    SessionBuilder::new(config).rng(MinSource).build().unwrap()
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use ops_core::{OpsError, SessionConfig};
    use ops_fleet::{Fleet, PriorityWeights};

    use crate::{SessionBuilder, SessionError};

    #[test]
    fn defaults_to_reference_baseline() {
        let session = SessionBuilder::new(SessionConfig::default()).build().unwrap();
        assert_eq!(session.evaluator().fleet(), &Fleet::reference());
        assert_eq!(session.evaluator().baseline().throughput_percentage, 94);
        assert!(!session.is_running());
        assert!(session.current_result().is_none());
        assert_eq!(session.now().0, 0);
    }

    #[test]
    fn zero_refresh_interval_rejected() {
        let config = SessionConfig { kpi_refresh_interval_ms: 0, ..SessionConfig::default() };
        let result = SessionBuilder::new(config).build();
        assert!(matches!(result, Err(SessionError::Config(OpsError::Config(_)))));
    }

    #[test]
    fn empty_fleet_gives_zero_throughput_baseline() {
        let session = SessionBuilder::new(SessionConfig::default())
            .fleet(Fleet::empty())
            .weights(PriorityWeights::default())
            .build()
            .unwrap();
        assert_eq!(session.evaluator().baseline().throughput_percentage, 0);
    }
}

// ── Run lifecycle ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use ops_core::{RunId, Tick};
    use ops_scenario::ScenarioKind;

    use super::{Recorder, min_session};
    use crate::{SessionError, Severity};

    #[test]
    fn result_surfaces_after_processing_delay() {
        let mut session = min_session(2_500);
        let mut rec = Recorder::default();

        let run = session.run("delay", &mut rec).unwrap();
        assert!(session.is_running());
        assert_eq!(session.pending().unwrap().due, Tick(2_500));
        assert_eq!(rec.notifications[0].severity, Severity::Info);
        assert_eq!(rec.notifications[0].message, "Running Express Train Delay (20 min) scenario...");

        assert_eq!(session.advance_by(2_499, &mut rec), None);
        assert!(session.current_result().is_none());

        assert_eq!(session.advance_by(1, &mut rec), Some(run));
        assert!(!session.is_running());
        let result = session.current_result().unwrap();
        assert_eq!(result.scenario, ScenarioKind::Delay);
        assert_eq!(result.after.punctuality, 72);
        assert_eq!(rec.results, vec![run]);
        assert_eq!(rec.titles(), ["Simulation Started", "Simulation Complete"]);
        assert_eq!(rec.notifications[1].message, "Results are ready for analysis.");
    }

    #[test]
    fn zero_delay_completes_on_next_advance() {
        let mut session = min_session(0);
        let mut rec = Recorder::default();
        let run = session.run("weather", &mut rec).unwrap();
        assert_eq!(session.advance_by(0, &mut rec), Some(run));
        assert!(session.current_result().is_some());
    }

    #[test]
    fn advance_to_past_due_completes() {
        let mut session = min_session(2_500);
        let mut rec = Recorder::default();
        let run = session.run("signal", &mut rec).unwrap();
        assert_eq!(session.advance_to(Tick(10_000), &mut rec), Some(run));
        assert_eq!(session.now(), Tick(10_000));
    }

    #[test]
    fn newer_run_supersedes_pending() {
        let mut session = min_session(2_500);
        let mut rec = Recorder::default();

        let first = session.run("delay", &mut rec).unwrap();
        session.advance_by(1_000, &mut rec);
        let second = session.run("breakdown", &mut rec).unwrap();
        assert_ne!(first, second);
        assert_eq!(rec.discarded, vec![first]);

        // The first run would have been due at 2_500; nothing surfaces then.
        assert_eq!(session.advance_to(Tick(2_500), &mut rec), None);
        assert_eq!(session.advance_to(Tick(3_500), &mut rec), Some(second));

        assert_eq!(rec.results, vec![second]);
        assert_eq!(session.current_result().unwrap().scenario, ScenarioKind::Breakdown);
    }

    #[test]
    fn unknown_id_leaves_state_unchanged() {
        let mut session = min_session(2_500);
        let mut rec = Recorder::default();
        let run = session.run("delay", &mut rec).unwrap();

        let err = session.run("not-a-scenario", &mut rec).unwrap_err();
        assert!(matches!(err, SessionError::Scenario(_)));
        assert_eq!(session.pending().map(|p| p.run), Some(run));
        assert!(rec.discarded.is_empty());

        let failed = rec.notifications.last().unwrap();
        assert_eq!(failed.severity, Severity::Error);
        assert_eq!(failed.title, "Simulation Failed");
    }

    #[test]
    fn cancel_keeps_current_result() {
        let mut session = min_session(100);
        let mut rec = Recorder::default();
        session.run_to_completion("passenger", &mut rec).unwrap();

        let pending = session.run("maintenance", &mut rec).unwrap();
        assert_eq!(session.cancel(&mut rec), Some(pending));
        assert_eq!(session.cancel(&mut rec), None);
        assert!(!session.is_running());
        assert_eq!(session.current_result().unwrap().scenario, ScenarioKind::Passenger);

        assert_eq!(session.advance_by(1_000, &mut rec), None);
    }

    #[test]
    fn reset_clears_result_and_pending() {
        let mut session = min_session(100);
        let mut rec = Recorder::default();
        session.run_to_completion("delay", &mut rec).unwrap();
        let pending = session.run("signal", &mut rec).unwrap();

        session.reset(&mut rec);
        assert!(session.current_result().is_none());
        assert!(!session.is_running());
        assert_eq!(rec.discarded, vec![pending]);

        let last = rec.notifications.last().unwrap();
        assert_eq!(last.severity, Severity::Info);
        assert_eq!(last.title, "Simulation Reset");
        assert_eq!(last.message, "Ready for a new scenario.");
    }

    #[test]
    fn run_ids_increase() {
        let mut session = min_session(0);
        let mut rec = Recorder::default();
        let a = session.run_to_completion("delay", &mut rec).unwrap();
        let b = session.run_to_completion("delay", &mut rec).unwrap();
        assert_eq!(a, RunId(1));
        assert_eq!(b, RunId(2));
    }

    #[test]
    fn seeded_sessions_agree() {
        use ops_core::SessionConfig;
        use crate::{NoopObserver, SessionBuilder};

        let config = SessionConfig { seed: 9, ..SessionConfig::default() };
        let mut a = SessionBuilder::new(config.clone()).build().unwrap();
        let mut b = SessionBuilder::new(config).build().unwrap();
        a.run_to_completion("weather", &mut NoopObserver).unwrap();
        b.run_to_completion("weather", &mut NoopObserver).unwrap();
        assert_eq!(a.current_result(), b.current_result());
    }
}

// ── Observers ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observers {
    use super::{Recorder, min_session};
    use crate::{LogObserver, Tee};

    #[test]
    fn tee_forwards_to_both() {
        let mut session = min_session(0);
        let mut tee = Tee(Recorder::default(), Recorder::default());
        session.run_to_completion("delay", &mut tee).unwrap();
        assert_eq!(tee.0.titles(), tee.1.titles());
        assert_eq!(tee.0.results.len(), 1);
        assert_eq!(tee.1.results.len(), 1);
    }

    #[test]
    fn log_observer_accepts_every_event() {
        let mut session = min_session(0);
        session.run_to_completion("delay", &mut LogObserver).unwrap();
        session.run("delay", &mut LogObserver).unwrap();
        session.reset(&mut LogObserver);
        assert!(session.run("bogus", &mut LogObserver).is_err());
    }
}

#[test]
fn severity_strings() {
    assert_eq!(Severity::Info.to_string(), "info");
    assert_eq!(Severity::Success.as_str(), "success");
    assert_eq!(Severity::Error.as_str(), "error");
}
