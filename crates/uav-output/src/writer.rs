//! The `LogWriter` trait implemented by all backend writers.

use uav_sim::LogRecord;

use crate::OutputResult;

/// A sink for per-cycle records.
///
/// Errors are returned here but swallowed by the observer hooks; see
/// [`LogOutputObserver::take_error`][crate::LogOutputObserver::take_error].
pub trait LogWriter {
    fn write_record(&mut self, record: &LogRecord) -> OutputResult<()>;

    /// Flush and close the underlying file handle.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
