//! Per-cycle log records and the column layout they are written with.

use serde::{Deserialize, Serialize};
use uav_energy::EnergyModel;

/// State at the end of one completed visit cycle.
///
/// Phase sub-totals are always filled in; whether they are written depends on
/// the run's [`LogSchema`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub time_s:      f64,
    pub energy_wh:   f64,
    pub fly_wh:      f64,
    pub hover_wh:    f64,
    pub tx_wh:       f64,
    pub uav_x:       f64,
    pub uav_y:       f64,
    pub served_node: usize,
    pub aoi_avg:     f64,
    pub aoi_max:     f64,
}

/// Column layout of the per-cycle log.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogSchema {
    /// Total energy only.
    Linear,
    /// Total energy plus flight / hover / transmit sub-totals.
    Aerodynamic,
}

impl LogSchema {
    pub const LINEAR_COLUMNS: [&'static str; 7] =
        ["time_s", "energy_Wh", "uav_x", "uav_y", "served_node", "aoi_avg", "aoi_max"];

    pub const AERODYNAMIC_COLUMNS: [&'static str; 10] = [
        "time_s",
        "energy_Wh",
        "E_fly_total",
        "E_hover_total",
        "E_tx_total",
        "uav_x",
        "uav_y",
        "served_node",
        "aoi_avg",
        "aoi_max",
    ];

    pub fn for_model(model: &EnergyModel) -> Self {
        if model.is_aerodynamic() { LogSchema::Aerodynamic } else { LogSchema::Linear }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            LogSchema::Linear => &Self::LINEAR_COLUMNS,
            LogSchema::Aerodynamic => &Self::AERODYNAMIC_COLUMNS,
        }
    }

    /// Schema whose column list equals `header`, if any.
    pub fn from_header<S: AsRef<str>>(header: &[S]) -> Option<Self> {
        let same = |cols: &[&str]| {
            cols.len() == header.len() && cols.iter().zip(header).all(|(c, h)| *c == h.as_ref())
        };
        if same(&Self::AERODYNAMIC_COLUMNS[..]) {
            Some(LogSchema::Aerodynamic)
        } else if same(&Self::LINEAR_COLUMNS[..]) {
            Some(LogSchema::Linear)
        } else {
            None
        }
    }
}

impl LogRecord {
    /// Field values in the column order of `schema`.
    pub fn to_row(&self, schema: LogSchema) -> Vec<String> {
        let mut row = Vec::with_capacity(schema.columns().len());
        row.push(self.time_s.to_string());
        row.push(self.energy_wh.to_string());
        if schema == LogSchema::Aerodynamic {
            row.push(self.fly_wh.to_string());
            row.push(self.hover_wh.to_string());
            row.push(self.tx_wh.to_string());
        }
        row.push(self.uav_x.to_string());
        row.push(self.uav_y.to_string());
        row.push(self.served_node.to_string());
        row.push(self.aoi_avg.to_string());
        row.push(self.aoi_max.to_string());
        row
    }
}
