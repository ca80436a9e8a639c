//! CSV output backend.
//!
//! Creates `log.csv` in the output directory with the column layout of the
//! run's [`LogSchema`].

use std::fs::File;
use std::path::Path;

use csv::Writer;
use uav_sim::{LogRecord, LogSchema};

use crate::OutputResult;
use crate::writer::LogWriter;

pub const LOG_FILE_NAME: &str = "log.csv";

/// Writes one row per visit cycle to `log.csv`.
pub struct CsvLogWriter {
    log:      Writer<File>,
    schema:   LogSchema,
    finished: bool,
}

impl CsvLogWriter {
    /// Create `dir/log.csv` (truncating any previous one) and write the header.
    pub fn new(dir: &Path, schema: LogSchema) -> OutputResult<Self> {
        let mut log = Writer::from_path(dir.join(LOG_FILE_NAME))?;
        log.write_record(schema.columns())?;
        Ok(Self { log, schema, finished: false })
    }

    pub fn schema(&self) -> LogSchema {
        self.schema
    }
}

impl LogWriter for CsvLogWriter {
    fn write_record(&mut self, record: &LogRecord) -> OutputResult<()> {
        self.log.write_record(record.to_row(self.schema))?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.log.flush()?;
        Ok(())
    }
}
