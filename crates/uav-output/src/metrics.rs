//! Log loading and post-run metrics.
//!
//! The loader accepts either column layout; which one a file uses is decided
//! from its header row.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use uav_sim::{LogRecord, LogSchema};

use crate::{OutputError, OutputResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LogRow {
    time_s:        f64,
    #[serde(rename = "energy_Wh")]
    energy_wh:     f64,
    #[serde(rename = "E_fly_total", default)]
    fly_wh:        Option<f64>,
    #[serde(rename = "E_hover_total", default)]
    hover_wh:      Option<f64>,
    #[serde(rename = "E_tx_total", default)]
    tx_wh:         Option<f64>,
    uav_x:         f64,
    uav_y:         f64,
    served_node:   usize,
    aoi_avg:       f64,
    aoi_max:       f64,
}

impl From<LogRow> for LogRecord {
    fn from(row: LogRow) -> Self {
        LogRecord {
            time_s:      row.time_s,
            energy_wh:   row.energy_wh,
            fly_wh:      row.fly_wh.unwrap_or(0.0),
            hover_wh:    row.hover_wh.unwrap_or(0.0),
            tx_wh:       row.tx_wh.unwrap_or(0.0),
            uav_x:       row.uav_x,
            uav_y:       row.uav_y,
            served_node: row.served_node,
            aoi_avg:     row.aoi_avg,
            aoi_max:     row.aoi_max,
        }
    }
}

/// A per-cycle log read back from disk.
///
/// For [`LogSchema::Linear`] files the phase sub-totals are not present and
/// read as 0.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedLog {
    pub schema:  LogSchema,
    pub records: Vec<LogRecord>,
}

// ── Public API ────────────────────────────────────────────────────────────────

pub fn load_log(path: &Path) -> OutputResult<LoadedLog> {
    let file = std::fs::File::open(path)?;
    load_log_reader(file)
}

/// Like [`load_log`] but accepts any `Read` source.
pub fn load_log_reader<R: Read>(reader: R) -> OutputResult<LoadedLog> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let header: Vec<String> = csv_reader.headers()?.iter().map(str::to_owned).collect();
    let schema = match LogSchema::from_header(&header) {
        Some(schema) => schema,
        None => return Err(OutputError::UnknownHeader(header)),
    };

    let records = csv_reader
        .deserialize::<LogRow>()
        .map(|row| row.map(LogRecord::from))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(LoadedLog { schema, records })
}

// ── RunMetrics ────────────────────────────────────────────────────────────────

/// Aggregate freshness and energy figures for one run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunMetrics {
    /// Mean over cycles of the per-cycle average AoI.
    pub avg_aoi:              f64,
    /// Largest per-cycle maximum AoI.
    pub max_aoi:              f64,
    /// 99th percentile of the per-cycle maximum AoI.
    pub p99_aoi:              f64,
    /// Cumulative energy at the last cycle.
    #[serde(rename = "total_energy_Wh")]
    pub total_energy_wh:      f64,
    #[serde(rename = "energy_per_update_Wh")]
    pub energy_per_update_wh: f64,
}

impl RunMetrics {
    /// An empty log gives zeros and an infinite energy-per-update.
    pub fn compute(records: &[LogRecord]) -> Self {
        if records.is_empty() {
            return Self {
                avg_aoi:              0.0,
                max_aoi:              0.0,
                p99_aoi:              0.0,
                total_energy_wh:      0.0,
                energy_per_update_wh: f64::INFINITY,
            };
        }

        let n = records.len();
        let avg_aoi = records.iter().map(|r| r.aoi_avg).sum::<f64>() / n as f64;

        let mut maxima: Vec<f64> = records.iter().map(|r| r.aoi_max).collect();
        maxima.sort_by(f64::total_cmp);
        let max_aoi = maxima[n - 1];
        // Lower-index rule: floor(0.99 · (n − 1)).
        let p99_aoi = maxima[(0.99 * (n - 1) as f64) as usize];

        let total_energy_wh = records[n - 1].energy_wh;
        Self {
            avg_aoi,
            max_aoi,
            p99_aoi,
            total_energy_wh,
            energy_per_update_wh: total_energy_wh / n as f64,
        }
    }

    pub fn from_log(path: &Path) -> OutputResult<Self> {
        Ok(Self::compute(&load_log(path)?.records))
    }
}
