//! Immutable per-run mission parameters.

use serde::{Deserialize, Serialize};
use uav_planner::Policy;

use crate::{SimError, SimResult};

/// Mission parameters, borrowed by the engine for the whole run.
///
/// `alpha` is an experiment label (the AoI/energy trade-off being swept); the
/// engine carries it but does not use it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    /// Field width and height (m).
    pub field_size:     (f64, f64),
    pub mission_time_s: f64,
    pub payload_bits:   u64,
    pub policy:         Policy,
    pub beta:           f64,
    pub gamma:          f64,
    pub alpha:          f64,
    /// Pick the next node by policy every cycle instead of walking a tour.
    #[serde(default)]
    pub greedy_mode:    bool,
    /// Upper bound on hover time per visit (s).
    #[serde(default)]
    pub hover_cap_s:    Option<f64>,
}

impl SimParams {
    /// Parameters for `policy_name` with unit weights, `alpha = 0.5`, tour
    /// mode and no hover cap.
    pub fn new(
        field_size:     (f64, f64),
        mission_time_s: f64,
        payload_bits:   u64,
        policy_name:    &str,
    ) -> SimResult<Self> {
        Ok(Self {
            field_size,
            mission_time_s,
            payload_bits,
            policy:      policy_name.parse()?,
            beta:        1.0,
            gamma:       1.0,
            alpha:       0.5,
            greedy_mode: false,
            hover_cap_s: None,
        })
    }

    /// Reject values the engine cannot make progress with.
    pub fn validate(&self) -> SimResult<()> {
        if !self.mission_time_s.is_finite() || self.mission_time_s < 0.0 {
            return Err(SimError::Config(format!(
                "mission_time_s must be finite and non-negative, got {}",
                self.mission_time_s
            )));
        }
        if !self.beta.is_finite() || !self.gamma.is_finite() {
            return Err(SimError::Config(format!(
                "beta and gamma must be finite, got {} and {}",
                self.beta, self.gamma
            )));
        }
        if let Some(cap) = self.hover_cap_s {
            if cap.is_nan() || cap < 0.0 {
                return Err(SimError::Config(format!("hover_cap_s must be non-negative, got {cap}")));
            }
        }
        Ok(())
    }
}
