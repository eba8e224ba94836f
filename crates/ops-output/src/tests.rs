//! Integration tests for ops-output.

use ops_core::{MinSource, SessionConfig};
use ops_session::{Session, SessionBuilder};

fn min_session() -> Session<MinSource> {
    let config = SessionConfig { processing_delay_ms: 0, ..SessionConfig::default() };
    SessionBuilder::new(config).rng(MinSource).build().unwrap()
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::min_session;
    use crate::csv::CsvWriter;
    use crate::observer::SessionOutputObserver;
    use crate::writer::ResultWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir.path().join("metrics.csv")),
            ["run", "scenario", "metric", "before", "after", "change", "trend"]
        );
        assert_eq!(
            headers(&dir.path().join("delays_by_category.csv")),
            ["run", "scenario", "category", "before", "after"]
        );
        assert_eq!(
            headers(&dir.path().join("punctuality_trend.csv")),
            ["run", "scenario", "label", "before", "after"]
        );
        assert_eq!(
            headers(&dir.path().join("recommendations.csv")),
            ["run", "scenario", "rank", "text"]
        );
    }

    #[test]
    fn completed_run_is_exported() {
        let dir = tmp();
        let mut obs = SessionOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let mut session = min_session();
        session.run_to_completion("delay", &mut obs).unwrap();
        obs.finish();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.written(), 1);

        let metrics = records(&dir.path().join("metrics.csv"));
        assert_eq!(metrics.len(), 4);
        assert_eq!(&metrics[0][0], "1");
        assert_eq!(&metrics[0][1], "delay");
        assert_eq!(&metrics[0][2], "Punctuality");
        assert_eq!(&metrics[0][3], "92");
        assert_eq!(&metrics[0][4], "72");
        assert_eq!(&metrics[0][5], "-20");
        assert_eq!(&metrics[0][6], "worsened");
        assert_eq!(&metrics[1][2], "Avg Delay");
        assert_eq!(&metrics[1][4], "18");

        let delays = records(&dir.path().join("delays_by_category.csv"));
        let after: Vec<&str> = delays.iter().map(|r| &r[4]).collect();
        assert_eq!(after, ["12", "8", "18"]);
        assert_eq!(&delays[0][2], "Express");

        let trend = records(&dir.path().join("punctuality_trend.csv"));
        assert_eq!(trend.len(), 6);
        assert_eq!(&trend[0][2], "08:00");
        assert_eq!(&trend[0][4], "75");

        let recs = records(&dir.path().join("recommendations.csv"));
        assert_eq!(recs.len(), 4);
        assert_eq!(&recs[3][2], "4");
    }

    #[test]
    fn superseded_run_is_not_exported() {
        let dir = tmp();
        let mut obs = SessionOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let mut session = min_session();
        session.run("signal", &mut obs).unwrap();
        session.run_to_completion("weather", &mut obs).unwrap();
        obs.finish();

        let metrics = records(&dir.path().join("metrics.csv"));
        assert_eq!(metrics.len(), 4);
        assert!(metrics.iter().all(|r| &r[1] == "weather" && &r[0] == "2"));
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does-not-exist")).is_err());
    }
}

#[cfg(test)]
mod json_tests {
    use super::min_session;
    use crate::json::JsonWriter;
    use crate::observer::SessionOutputObserver;

    #[test]
    fn result_json_holds_every_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut obs = SessionOutputObserver::new(JsonWriter::new(dir.path()).unwrap());
        let mut session = min_session();
        session.run_to_completion("delay", &mut obs).unwrap();
        session.run_to_completion("passenger", &mut obs).unwrap();
        obs.finish();
        assert!(obs.take_error().is_none());

        let text = std::fs::read_to_string(dir.path().join("result.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let runs = value.as_array().unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0]["run"], 1);
        assert_eq!(runs[0]["result"]["scenario"], "delay");
        assert_eq!(runs[0]["result"]["after"]["punctuality"], 72);
        assert_eq!(runs[1]["result"]["scenario"], "passenger");
        assert_eq!(runs[1]["result"]["recommendations"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn result_json_is_valid_before_finish() {
        let dir = tempfile::tempdir().unwrap();
        let _w = JsonWriter::new(dir.path()).unwrap();
        let text = std::fs::read_to_string(dir.path().join("result.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    #[test]
    fn failed_finish_is_reported_again() {
        use crate::writer::ResultWriter;

        let dir = tempfile::tempdir().unwrap();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        std::fs::remove_dir_all(dir.path()).unwrap();
        assert!(w.finish().is_err());
        assert!(w.finish().is_err(), "a failed finish must not mark the writer done");
    }

    #[test]
    fn records_kept_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        let mut obs = SessionOutputObserver::new(JsonWriter::new(dir.path()).unwrap());
        min_session().run_to_completion("maintenance", &mut obs).unwrap();
        let writer = obs.into_writer();
        assert_eq!(writer.records().len(), 1);
        assert_eq!(writer.records()[0].run, 1);
    }
}

#[cfg(test)]
mod rows {
    use ops_core::{MinSource, RunId};
    use ops_fleet::{Fleet, PriorityWeights};
    use ops_scenario::{Evaluator, Metric, ScenarioKind, Trend};

    use crate::row::{metric_rows, recommendation_rows};

    #[test]
    fn metric_rows_follow_display_order() {
        let r = Evaluator::new(Fleet::reference(), PriorityWeights::default())
            .evaluate(ScenarioKind::Delay, &mut MinSource);
        let rows = metric_rows(RunId(3), &r);
        let metrics: Vec<Metric> = rows.iter().map(|m| m.metric).collect();
        assert_eq!(metrics, Metric::ALL);
        assert_eq!(rows[2].change, 64 - 94);
        assert_eq!(rows[3].trend, Trend::Improved);
        assert!(rows.iter().all(|m| m.run == 3));

        let recs = recommendation_rows(RunId(3), &r);
        assert_eq!(recs.iter().map(|r| r.rank).collect::<Vec<_>>(), [1, 2, 3, 4]);
    }
}
