//! Simulation observer trait for logging and data collection.

use crate::{LogRecord, LogSchema, Summary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// Called once before the first cycle with the column layout of the run.
    fn on_sim_start(&mut self, _schema: LogSchema) {}

    /// Called after every completed visit cycle.
    fn on_visit(&mut self, _record: &LogRecord) {}

    /// Called once after the run terminates.
    fn on_sim_end(&mut self, _summary: &Summary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Keeps every record in memory.  Used by tests and by callers that want the
/// log without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryObserver {
    pub schema:  Option<LogSchema>,
    pub records: Vec<LogRecord>,
    pub summary: Option<Summary>,
}

impl SimObserver for MemoryObserver {
    fn on_sim_start(&mut self, schema: LogSchema) {
        self.schema = Some(schema);
    }

    fn on_visit(&mut self, record: &LogRecord) {
        self.records.push(record.clone());
    }

    fn on_sim_end(&mut self, summary: &Summary) {
        self.summary = Some(summary.clone());
    }
}
