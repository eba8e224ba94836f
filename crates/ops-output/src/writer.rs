//! The `ResultWriter` trait implemented by all export backends.

use ops_core::RunId;
use ops_scenario::SimulationResult;

use crate::OutputResult;

/// Trait implemented by the CSV and JSON writers.
///
/// Errors are stored by [`SessionOutputObserver`][crate::SessionOutputObserver]
/// and retrieved with its `take_error`.
pub trait ResultWriter {
    /// Record one completed run.
    fn write_result(&mut self, run: RunId, result: &SimulationResult) -> OutputResult<()>;

    /// Flush everything to disk.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
