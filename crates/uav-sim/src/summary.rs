//! End-of-run summary.

use std::fmt;

use serde::{Deserialize, Serialize};
use uav_core::Point2;

/// Why a run stopped.  Budget exhaustion is an outcome, not an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    MissionTime,
    BatteryExhausted,
    /// No nodes to visit.
    NoNodes,
    /// More consecutive cycles than there are nodes advanced neither time nor
    /// energy.
    Stalled,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Termination::MissionTime => "mission time reached",
            Termination::BatteryExhausted => "battery exhausted",
            Termination::NoNodes => "no nodes",
            Termination::Stalled => "stalled",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub final_time_s:    f64,
    #[serde(rename = "final_energy_Wh")]
    pub final_energy_wh: f64,
    #[serde(rename = "E_fly_total")]
    pub fly_wh:          f64,
    #[serde(rename = "E_hover_total")]
    pub hover_wh:        f64,
    #[serde(rename = "E_tx_total")]
    pub tx_wh:           f64,
    #[serde(rename = "E_max_Wh")]
    pub battery_wh:      f64,
    /// Starts with the initial UAV position; one point per arrival after that.
    pub visited_path:    Vec<Point2>,
    pub visited_nodes:   Vec<usize>,
    #[serde(rename = "avg_aoi")]
    pub aoi_avg:         f64,
    #[serde(rename = "max_aoi")]
    pub aoi_max:         f64,
    /// Completed (logged) cycles.
    pub cycles:          usize,
    pub termination:     Termination,
}
