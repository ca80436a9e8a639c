//! `LogOutputObserver<W>`: bridges `SimObserver` to a `LogWriter`.

use tracing::warn;
use uav_sim::{LogRecord, SimObserver, Summary};

use crate::writer::LogWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that forwards every record to a [`LogWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct LogOutputObserver<W: LogWriter> {
    writer:     W,
    rows:       usize,
    last_error: Option<OutputError>,
}

impl<W: LogWriter> LogOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Rows written successfully.
    pub fn rows(&self) -> usize {
        self.rows
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "log output failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: LogWriter> SimObserver for LogOutputObserver<W> {
    fn on_visit(&mut self, record: &LogRecord) {
        let result = self.writer.write_record(record);
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _summary: &Summary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
