//! Scenario files, CLI overrides and resolution into engine inputs.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use uav_channel::Radio;
use uav_core::{Point2, Uav};
use uav_energy::{RotorSpec, TxConfig};
use uav_sim::SimParams;

use crate::cli::Overrides;

// ── File format ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UavConfig {
    pub speed_mps:  f64,
    #[serde(rename = "battery_Wh")]
    pub battery_wh: f64,
    #[serde(rename = "P_move_W")]
    pub p_move_w:   f64,
    #[serde(rename = "P_hover_W")]
    pub p_hover_w:  f64,
    #[serde(rename = "P_tx_W")]
    pub p_tx_w:     f64,
}

impl Default for UavConfig {
    fn default() -> Self {
        Self {
            speed_mps:  15.0,
            battery_wh: 100.0,
            p_move_w:   120.0,
            p_hover_w:  100.0,
            p_tx_w:     2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadioConfig {
    #[serde(rename = "bandwidth_Hz")]
    pub bandwidth_hz:         f64,
    #[serde(rename = "noise_W")]
    pub noise_w:              f64,
    pub pathloss_exponent:    f64,
    pub snr_threshold_linear: f64,
    pub comm_radius_m:        f64,
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            bandwidth_hz:         1e6,
            noise_w:              1e-13,
            pathloss_exponent:    2.2,
            snr_threshold_linear: 10.0,
            comm_radius_m:        120.0,
        }
    }
}

/// One scenario as read from disk.  Missing keys take the built-in defaults
/// (the same values as `configs/default.toml`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub seed:           u64,
    #[serde(rename = "N")]
    pub n_nodes:        usize,
    pub field_size:     (f64, f64),
    pub mission_time_s: f64,
    pub payload_bits:   u64,
    pub policy:         String,
    pub beta:           f64,
    pub gamma:          f64,
    pub alpha:          f64,
    pub greedy_mode:    bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_cap_s:    Option<f64>,
    pub uav:            UavConfig,
    pub radio:          RadioConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aerodynamics:   Option<RotorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmitter:    Option<TxConfig>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed:           42,
            n_nodes:        20,
            field_size:     (1000.0, 1000.0),
            mission_time_s: 1800.0,
            payload_bits:   1_600_000,
            policy:         "AWN".into(),
            beta:           1.0,
            gamma:          1.0,
            alpha:          0.5,
            greedy_mode:    false,
            hover_cap_s:    None,
            uav:            UavConfig::default(),
            radio:          RadioConfig::default(),
            aerodynamics:   None,
            transmitter:    None,
        }
    }
}

impl ScenarioConfig {
    /// Read a `.toml` or `.json` scenario, chosen by file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => toml::from_str(&text)
                .with_context(|| format!("parsing TOML config {}", path.display())),
            "json" => serde_json::from_str(&text)
                .with_context(|| format!("parsing JSON config {}", path.display())),
            _ => bail!("unsupported config format: {} (expected .toml or .json)", path.display()),
        }
    }

    /// `path` if given, otherwise the built-in default scenario.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Overwrite every field the user set on the command line.
    pub fn apply(&mut self, o: &Overrides) {
        if let Some(v) = &o.policy {
            self.policy = v.clone();
        }
        if let Some(v) = o.alpha {
            self.alpha = v;
        }
        if let Some(v) = o.seed {
            self.seed = v;
        }
        if let Some(v) = o.nodes {
            self.n_nodes = v;
        }
        if let Some(v) = o.mission_time {
            self.mission_time_s = v;
        }
        if let Some(v) = o.battery {
            self.uav.battery_wh = v;
        }
        if let Some(v) = o.speed {
            self.uav.speed_mps = v;
        }
        if let Some(v) = o.payload {
            self.payload_bits = v;
        }
        if let Some(v) = o.beta {
            self.beta = v;
        }
        if let Some(v) = o.gamma {
            self.gamma = v;
        }
        if let Some(v) = o.comm_radius {
            self.radio.comm_radius_m = v;
        }
        if o.greedy {
            self.greedy_mode = true;
        }
        if let Some(v) = o.hover_cap {
            self.hover_cap_s = Some(v);
        }
    }

    /// Validate and convert into the immutable values the engine borrows.
    pub fn resolve(&self) -> Result<Scenario> {
        let mut params = SimParams::new(
            self.field_size,
            self.mission_time_s,
            self.payload_bits,
            &self.policy,
        )?;
        params.beta = self.beta;
        params.gamma = self.gamma;
        params.alpha = self.alpha;
        params.greedy_mode = self.greedy_mode;
        params.hover_cap_s = self.hover_cap_s;
        params.validate()?;

        Ok(Scenario {
            seed:     self.seed,
            n_nodes:  self.n_nodes,
            params,
            uav:      Uav {
                pos:        Point2::ORIGIN,
                speed_mps:  self.uav.speed_mps,
                battery_wh: self.uav.battery_wh,
                p_move_w:   self.uav.p_move_w,
                p_hover_w:  self.uav.p_hover_w,
                p_tx_w:     self.uav.p_tx_w,
            },
            radio:    Radio {
                bandwidth_hz:         self.radio.bandwidth_hz,
                noise_w:              self.radio.noise_w,
                pathloss_exponent:    self.radio.pathloss_exponent,
                snr_threshold_linear: self.radio.snr_threshold_linear,
                comm_radius_m:        self.radio.comm_radius_m,
            },
            rotor:    self.aerodynamics.clone(),
            tx:       self.transmitter,
        })
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
    }
}

// ── Resolved scenario ─────────────────────────────────────────────────────────

/// Everything one engine run needs except the nodes.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub seed:    u64,
    pub n_nodes: usize,
    pub params:  SimParams,
    /// Starting UAV; cloned fresh for every run.
    pub uav:     Uav,
    pub radio:   Radio,
    pub rotor:   Option<RotorSpec>,
    pub tx:      Option<TxConfig>,
}
