//! `SessionOutputObserver<W>` — bridges `SessionObserver` to a `ResultWriter`.

use log::debug;

use ops_core::RunId;
use ops_scenario::SimulationResult;
use ops_session::SessionObserver;

use crate::writer::ResultWriter;
use crate::{OutputError, OutputResult};

/// A [`SessionObserver`] that exports every completed run to any
/// [`ResultWriter`] backend.
///
/// Errors from the writer are stored internally because `SessionObserver`
/// methods have no return value.  Call [`finish`][Self::finish] when the
/// session is done, then check [`take_error`][Self::take_error].
pub struct SessionOutputObserver<W: ResultWriter> {
    writer:     W,
    written:    usize,
    last_error: Option<OutputError>,
}

impl<W: ResultWriter> SessionOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0, last_error: None }
    }

    /// Number of runs handed to the writer.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush the writer.  The error, if any, is also stored.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ResultWriter> SessionObserver for SessionOutputObserver<W> {
    fn on_result(&mut self, run: RunId, result: &SimulationResult) {
        let outcome = self.writer.write_result(run, result);
        if outcome.is_ok() {
            self.written += 1;
            debug!("exported {run} ({})", result.scenario);
        }
        self.store_err(outcome);
    }
}
