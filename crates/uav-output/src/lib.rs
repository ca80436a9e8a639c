//! `uav-output` — per-cycle log output and post-run metrics.
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`writer`]   | `LogWriter` trait implemented by every backend             |
//! | [`csv`]      | `CsvLogWriter`, writes `log.csv` in the run's schema       |
//! | [`observer`] | `LogOutputObserver`, bridges `uav_sim::SimObserver`        |
//! | [`metrics`]  | `load_log` (schema from header) and `RunMetrics`           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use uav_output::{CsvLogWriter, LogOutputObserver};
//!
//! let writer = CsvLogWriter::new(&run_dir, sim.schema())?;
//! let mut obs = LogOutputObserver::new(writer);
//! let summary = sim.run(&mut obs);
//! if let Some(e) = obs.take_error() { return Err(e.into()); }
//! ```

pub mod csv;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod writer;


pub use self::csv::{CsvLogWriter, LOG_FILE_NAME};
pub use error::{OutputError, OutputResult};
pub use metrics::{LoadedLog, RunMetrics, load_log, load_log_reader};
pub use observer::LogOutputObserver;
pub use writer::LogWriter;
