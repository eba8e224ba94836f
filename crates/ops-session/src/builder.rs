//! Fluent builder for constructing a [`Session`].

use ops_core::{RangeSource, RunId, SessionClock, SessionConfig, SimRng};
use ops_fleet::{Fleet, PriorityWeights};
use ops_scenario::{BaselineMetrics, Evaluator};

use crate::{Session, SessionResult};

/// Fluent builder for [`Session<R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                         |
/// |-----------------|-------------------------------------------------|
/// | `.fleet(f)`     | `Fleet::reference()`                            |
/// | `.weights(w)`   | `PriorityWeights::default()`                    |
/// | `.baseline(b)`  | `BaselineMetrics::reference` over the fleet     |
/// | `.rng(r)`       | `SimRng::new(config.seed)`                      |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(SessionConfig::default()).build()?;
/// session.run("weather", &mut LogObserver)?;
/// session.advance_by(2_500, &mut LogObserver);
/// ```
pub struct SessionBuilder<R: RangeSource = SimRng> {
    config:   SessionConfig,
    fleet:    Option<Fleet>,
    weights:  Option<PriorityWeights>,
    baseline: Option<BaselineMetrics>,
    rng:      R,
}

impl SessionBuilder<SimRng> {
    /// Create a builder whose RNG is seeded from `config.seed`.
    pub fn new(config: SessionConfig) -> Self {
        let rng = SimRng::new(config.seed);
        Self { config, fleet: None, weights: None, baseline: None, rng }
    }
}

impl<R: RangeSource> SessionBuilder<R> {
    /// Supply the baseline fleet snapshot.
    pub fn fleet(mut self, fleet: Fleet) -> Self {
        self.fleet = Some(fleet);
        self
    }

    /// Supply the category priority weights used for throughput scoring.
    pub fn weights(mut self, weights: PriorityWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Supply an explicit baseline instead of the reference one.
    ///
    /// The baseline is taken as-is; its throughput is not re-derived from
    /// the fleet.
    pub fn baseline(mut self, baseline: BaselineMetrics) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Replace the random source, e.g. with a scripted one in tests.
    pub fn rng<R2: RangeSource>(self, rng: R2) -> SessionBuilder<R2> {
        SessionBuilder {
            config:   self.config,
            fleet:    self.fleet,
            weights:  self.weights,
            baseline: self.baseline,
            rng,
        }
    }

    /// Validate the config and return an idle [`Session`].
    pub fn build(self) -> SessionResult<Session<R>> {
        self.config.validate()?;

        let fleet = self.fleet.unwrap_or_else(Fleet::reference);
        let weights = self.weights.unwrap_or_default();
        let evaluator = match self.baseline {
            Some(baseline) => Evaluator::with_baseline(fleet, weights, baseline),
            None => Evaluator::new(fleet, weights),
        };

        Ok(Session {
            config:   self.config,
            clock:    SessionClock::new(),
            evaluator,
            rng:      self.rng,
            last_run: RunId(0),
            pending:  None,
            current:  None,
        })
    }
}
