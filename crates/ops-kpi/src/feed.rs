//! Periodically refreshed KPI snapshot.

use log::debug;

use ops_core::{OpsError, RangeSource, SessionConfig, SimRng, Tick};

use crate::{KpiResult, KpiSnapshot, TimeRange};

/// Holds the current [`KpiSnapshot`] and regenerates it when the refresh
/// interval elapses or the time range changes.
///
/// Time is supplied by the caller; the feed never reads a clock.
pub struct KpiFeed<R: RangeSource = SimRng> {
    rng:          R,
    interval_ms:  u64,
    generated_at: Tick,
    snapshot:     KpiSnapshot,
}

impl<R: RangeSource> KpiFeed<R> {
    /// Generate the first snapshot at `now`.
    ///
    /// A zero interval is rejected: the feed would regenerate on every poll.
    pub fn new(range: TimeRange, interval_ms: u64, mut rng: R, now: Tick) -> KpiResult<Self> {
        if interval_ms == 0 {
            return Err(OpsError::Config("KPI refresh interval must be greater than zero".into()).into());
        }
        let snapshot = KpiSnapshot::generate(range, &mut rng);
        Ok(Self { rng, interval_ms, generated_at: now, snapshot })
    }

    pub fn snapshot(&self) -> &KpiSnapshot {
        &self.snapshot
    }

    pub fn range(&self) -> TimeRange {
        self.snapshot.range
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// When the current snapshot was generated.
    pub fn generated_at(&self) -> Tick {
        self.generated_at
    }

    /// When the next refresh falls due.
    pub fn next_refresh(&self) -> Tick {
        self.generated_at.offset(self.interval_ms)
    }

    /// Regenerate if the refresh interval has elapsed since the last
    /// snapshot.  Returns `true` if a new snapshot was generated.
    ///
    /// Several elapsed intervals still produce a single regeneration, and
    /// the cadence restarts from `now`.
    pub fn poll(&mut self, now: Tick) -> bool {
        if now < self.next_refresh() {
            return false;
        }
        self.regenerate(self.range(), now);
        true
    }

    /// Switch to `range`.  A change regenerates immediately and restarts the
    /// refresh cadence; selecting the current range does nothing.
    pub fn set_range(&mut self, range: TimeRange, now: Tick) -> bool {
        if range == self.range() {
            return false;
        }
        self.regenerate(range, now);
        true
    }

    fn regenerate(&mut self, range: TimeRange, now: Tick) {
        self.snapshot = KpiSnapshot::generate(range, &mut self.rng);
        self.generated_at = now;
        debug!("KPI snapshot regenerated for {range} at {now}");
    }
}

impl KpiFeed<SimRng> {
    /// Feed using the configured refresh interval and an RNG stream derived
    /// from `rng`, so KPI draws never interleave with scenario draws.
    pub fn from_config(config: &SessionConfig, range: TimeRange, rng: &mut SimRng, now: Tick) -> KpiResult<Self> {
        config.validate()?;
        Self::new(range, config.kpi_refresh_interval_ms, rng.child(1), now)
    }
}
