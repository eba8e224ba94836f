//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `metrics.csv`
//! - `delays_by_category.csv`
//! - `punctuality_trend.csv`
//! - `recommendations.csv`
//!
//! Every row carries the run number and scenario id so several runs can
//! share one set of files.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use ops_core::RunId;
use ops_scenario::SimulationResult;

use crate::OutputResult;
use crate::row::{category_delay_rows, metric_rows, recommendation_rows, trend_rows};
use crate::writer::ResultWriter;

/// Writes scenario results to four CSV files.
pub struct CsvWriter {
    metrics:         Writer<File>,
    delays:          Writer<File>,
    trend:           Writer<File>,
    recommendations: Writer<File>,
    finished:        bool,
}

impl CsvWriter {
    /// Open (or create) the four CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut metrics = Writer::from_path(dir.join("metrics.csv"))?;
        metrics.write_record(["run", "scenario", "metric", "before", "after", "change", "trend"])?;

        let mut delays = Writer::from_path(dir.join("delays_by_category.csv"))?;
        delays.write_record(["run", "scenario", "category", "before", "after"])?;

        let mut trend = Writer::from_path(dir.join("punctuality_trend.csv"))?;
        trend.write_record(["run", "scenario", "label", "before", "after"])?;

        let mut recommendations = Writer::from_path(dir.join("recommendations.csv"))?;
        recommendations.write_record(["run", "scenario", "rank", "text"])?;

        Ok(Self {
            metrics,
            delays,
            trend,
            recommendations,
            finished: false,
        })
    }
}

impl ResultWriter for CsvWriter {
    fn write_result(&mut self, run: RunId, result: &SimulationResult) -> OutputResult<()> {
        for row in metric_rows(run, result) {
            self.metrics.write_record(&[
                row.run.to_string(),
                row.scenario.id().to_owned(),
                row.metric.label().to_owned(),
                row.before.to_string(),
                row.after.to_string(),
                row.change.to_string(),
                row.trend.as_str().to_owned(),
            ])?;
        }
        for row in category_delay_rows(run, result) {
            self.delays.write_record(&[
                row.run.to_string(),
                row.scenario.id().to_owned(),
                row.category.as_str().to_owned(),
                row.before.to_string(),
                row.after.to_string(),
            ])?;
        }
        for row in trend_rows(run, result) {
            self.trend.write_record(&[
                row.run.to_string(),
                row.scenario.id().to_owned(),
                row.label,
                row.before.to_string(),
                row.after.to_string(),
            ])?;
        }
        for row in recommendation_rows(run, result) {
            self.recommendations.write_record(&[
                row.run.to_string(),
                row.scenario.id().to_owned(),
                row.rank.to_string(),
                row.text,
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.metrics.flush()?;
        self.delays.flush()?;
        self.trend.flush()?;
        self.recommendations.flush()?;
        self.finished = true;
        Ok(())
    }
}
