//! JSON output backend.
//!
//! Collects every completed run and writes them as one array to
//! `result.json` on [`finish`][ResultWriter::finish].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use ops_core::RunId;
use ops_scenario::SimulationResult;

use crate::OutputResult;
use crate::writer::ResultWriter;

/// One exported run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRecord {
    pub run:    u32,
    pub result: SimulationResult,
}

/// Writes scenario results to `result.json`.
pub struct JsonWriter {
    path:     PathBuf,
    records:  Vec<RunRecord>,
    finished: bool,
}

impl JsonWriter {
    /// Create `result.json` in `dir` holding an empty array, so a bad
    /// directory fails up front and the file is valid JSON before `finish`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let path = dir.join("result.json");
        std::fs::write(&path, "[]")?;
        Ok(Self { path, records: Vec::new(), finished: false })
    }

    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }
}

impl ResultWriter for JsonWriter {
    fn write_result(&mut self, run: RunId, result: &SimulationResult) -> OutputResult<()> {
        self.records.push(RunRecord { run: run.0, result: result.clone() });
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        let mut out = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut out, &self.records)?;
        out.flush()?;
        self.finished = true;
        Ok(())
    }
}
