//! Unit tests for ops-kpi.

// ── TimeRange ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod range {
    use crate::{KpiError, TimeRange};

    #[test]
    fn parses_ids() {
        assert_eq!("today".parse::<TimeRange>().unwrap(), TimeRange::Today);
        assert_eq!("month".parse::<TimeRange>().unwrap(), TimeRange::Month);
        assert!(matches!("year".parse::<TimeRange>(), Err(KpiError::UnknownTimeRange(_))));
    }

    #[test]
    fn trend_labels() {
        assert_eq!(TimeRange::Today.trend_len(), 12);
        assert_eq!(TimeRange::Today.trend_label(0), "8:00");
        assert_eq!(TimeRange::Today.trend_label(11), "19:00");
        assert_eq!(TimeRange::Week.trend_len(), 7);
        assert_eq!(TimeRange::Month.trend_label(6), "Day 7");
        assert_eq!(TimeRange::Week.label(), "This Week");
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod snapshot {
    use ops_core::{MaxSource, MinSource, ScriptedSource, SimRng, TrainCategory};

    use crate::{HOURLY_CAPACITY, KpiSnapshot, PUNCTUALITY_TARGET, TimeRange};

    #[test]
    fn min_source_lower_bounds() {
        let s = KpiSnapshot::generate(TimeRange::Today, &mut MinSource);
        assert_eq!(s.headline.punctuality, 85);
        assert_eq!(s.headline.average_delay, 6);
        assert_eq!(s.headline.throughput, 22);
        assert_eq!(s.headline.utilization, 70);

        assert_eq!(s.punctuality_trend.len(), 12);
        assert!(s.punctuality_trend.iter().all(|p| p.punctuality == 80 && p.target == PUNCTUALITY_TARGET));

        let delays: Vec<_> = s.delays_by_type.iter().map(|d| (d.category, d.delay, d.count)).collect();
        assert_eq!(delays, vec![
            (TrainCategory::Express, 3, 15),
            (TrainCategory::Local, 5, 20),
            (TrainCategory::Freight, 10, 5),
        ]);

        let shares: Vec<i64> = s.section_utilization.iter().map(|x| x.value).collect();
        assert_eq!(shares, vec![40, 30, 15, 3]);

        assert_eq!(s.hourly_throughput.len(), 12);
        assert_eq!(s.hourly_throughput[0].hour, "8:00");
        assert_eq!(s.hourly_throughput[11].hour, "19:00");
        assert!(s.hourly_throughput.iter().all(|h| h.trains == 18 && h.efficiency == 70));
        assert_eq!(s.total_hourly_trains(), 18 * 12);
    }

    #[test]
    fn max_source_upper_bounds() {
        let s = KpiSnapshot::generate(TimeRange::Week, &mut MaxSource);
        assert_eq!(s.headline.punctuality, 94);
        assert_eq!(s.headline.average_delay, 10);
        assert_eq!(s.headline.throughput, 25);
        assert_eq!(s.headline.utilization, 84);
        assert_eq!(s.punctuality_trend.len(), 7);
        assert_eq!(s.punctuality_trend[0].label, "Day 1");
        assert_eq!(s.mean_trend_punctuality(), Some(94));

        let shares: Vec<i64> = s.section_utilization.iter().map(|x| x.value).collect();
        assert_eq!(shares, vec![49, 39, 19, 5]);
        assert_eq!(s.delays_by_type[2].delay, 21);
        assert!(s.hourly_throughput.iter().all(|h| h.trains == 23 && h.efficiency == 89));
    }

    #[test]
    fn draw_count_follows_range() {
        let mut today = ScriptedSource::default();
        KpiSnapshot::generate(TimeRange::Today, &mut today);
        assert_eq!(today.requested().len(), 4 + 12 + 6 + 4 + 24);

        let mut week = ScriptedSource::default();
        KpiSnapshot::generate(TimeRange::Week, &mut week);
        assert_eq!(week.requested().len(), 4 + 7 + 6 + 4 + 24);
        assert_eq!(week.requested()[0], (85, 94));
    }

    #[test]
    fn random_snapshots_stay_in_range() {
        for seed in 0..100 {
            let s = KpiSnapshot::generate(TimeRange::Today, &mut SimRng::new(seed));
            assert!((85..=94).contains(&s.headline.punctuality));
            assert!((6..=10).contains(&s.headline.average_delay));
            assert!(s.punctuality_trend.iter().all(|p| (80..=94).contains(&p.punctuality)));
            assert!(s.hourly_throughput.iter().all(|h| h.trains <= h.capacity && h.capacity == HOURLY_CAPACITY));
        }
    }
}

// ── Feed ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod feed {
    use ops_core::{MinSource, SessionConfig, SimRng, Tick};

    use crate::{KpiError, KpiFeed, TimeRange};

    #[test]
    fn refreshes_once_interval_elapses() {
        let mut feed = KpiFeed::new(TimeRange::Today, 10_000, MinSource, Tick(0)).unwrap();
        assert_eq!(feed.next_refresh(), Tick(10_000));
        assert!(!feed.poll(Tick(9_999)));
        assert!(feed.poll(Tick(10_000)));
        assert_eq!(feed.generated_at(), Tick(10_000));
        assert!(!feed.poll(Tick(15_000)));
    }

    #[test]
    fn long_gap_regenerates_once() {
        let mut feed = KpiFeed::new(TimeRange::Today, 10_000, MinSource, Tick(0)).unwrap();
        assert!(feed.poll(Tick(45_000)));
        assert_eq!(feed.next_refresh(), Tick(55_000));
    }

    #[test]
    fn range_change_regenerates_immediately() {
        let mut feed = KpiFeed::new(TimeRange::Today, 10_000, MinSource, Tick(0)).unwrap();
        assert!(!feed.set_range(TimeRange::Today, Tick(3_000)));
        assert!(feed.set_range(TimeRange::Month, Tick(3_000)));
        assert_eq!(feed.range(), TimeRange::Month);
        assert_eq!(feed.snapshot().punctuality_trend.len(), 7);
        assert!(!feed.poll(Tick(10_000)), "cadence restarts from the range change");
        assert!(feed.poll(Tick(13_000)));
    }

    #[test]
    fn zero_interval_rejected() {
        let result = KpiFeed::new(TimeRange::Today, 0, MinSource, Tick(0));
        assert!(matches!(result, Err(KpiError::Config(_))));
    }

    #[test]
    fn from_config_uses_refresh_interval() {
        let config = SessionConfig { kpi_refresh_interval_ms: 5_000, ..SessionConfig::default() };
        let mut rng = SimRng::new(config.seed);
        let feed = KpiFeed::from_config(&config, TimeRange::Week, &mut rng, Tick(100)).unwrap();
        assert_eq!(feed.interval_ms(), 5_000);
        assert_eq!(feed.next_refresh(), Tick(5_100));
    }
}

// ── Status bands ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod status {
    use crate::{KpiStatus, delay_status, punctuality_status};

    #[test]
    fn punctuality_bands() {
        assert_eq!(punctuality_status(90), KpiStatus::Good);
        assert_eq!(punctuality_status(89), KpiStatus::Warning);
        assert_eq!(punctuality_status(80), KpiStatus::Warning);
        assert_eq!(punctuality_status(79), KpiStatus::Critical);
    }

    #[test]
    fn delay_bands() {
        assert_eq!(delay_status(5), KpiStatus::Good);
        assert_eq!(delay_status(6), KpiStatus::Warning);
        assert_eq!(delay_status(10), KpiStatus::Warning);
        assert_eq!(delay_status(11), KpiStatus::Critical);
        assert_eq!(KpiStatus::Critical.to_string(), "critical");
    }
}
