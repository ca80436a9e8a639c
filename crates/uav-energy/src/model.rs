//! The per-run energy model: flat linear wattages or the aerodynamic curve.

use tracing::warn;
use uav_core::Uav;

use crate::{J_PER_WH, Propulsion, RotorSpec, TxConfig, flight_time_s};

/// Flat per-phase wattages: `energy = power × time / 3600`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearPower {
    pub p_move_w:  f64,
    pub p_hover_w: f64,
    pub p_tx_w:    f64,
}

impl From<&Uav> for LinearPower {
    fn from(uav: &Uav) -> Self {
        Self {
            p_move_w:  uav.p_move_w,
            p_hover_w: uav.p_hover_w,
            p_tx_w:    uav.p_tx_w,
        }
    }
}

/// Energy model for one simulation run.
///
/// Chosen once by [`select`][Self::select]; every phase of the run is then
/// costed by the same variant.
#[derive(Clone, Debug, PartialEq)]
pub enum EnergyModel {
    Linear(LinearPower),
    Aerodynamic { propulsion: Propulsion, tx: TxConfig },
}

impl EnergyModel {
    /// Pick the aerodynamic model if `rotor` resolves, otherwise fall back to
    /// `linear` for the whole run.
    ///
    /// `tx` only applies to the aerodynamic variant and defaults to
    /// [`TxConfig::default`].
    pub fn select(linear: LinearPower, rotor: Option<&RotorSpec>, tx: Option<TxConfig>) -> Self {
        let Some(spec) = rotor else {
            return EnergyModel::Linear(linear);
        };
        match Propulsion::from_spec(spec) {
            Ok(propulsion) => EnergyModel::Aerodynamic {
                propulsion,
                tx: tx.unwrap_or_default(),
            },
            Err(e) => {
                warn!(error = %e, "aerodynamic config unusable, using linear energy model");
                EnergyModel::Linear(linear)
            }
        }
    }

    #[inline]
    pub fn is_aerodynamic(&self) -> bool {
        matches!(self, EnergyModel::Aerodynamic { .. })
    }

    /// Energy (Wh) to fly `distance_m` at `speed_mps`; `+∞` for a
    /// non-positive speed in either variant.
    pub fn flight_wh(&self, distance_m: f64, speed_mps: f64) -> f64 {
        match self {
            EnergyModel::Linear(p) => {
                if speed_mps <= 0.0 {
                    return f64::INFINITY;
                }
                p.p_move_w * flight_time_s(distance_m, speed_mps) / J_PER_WH
            }
            EnergyModel::Aerodynamic { propulsion, .. } => {
                propulsion.flight_energy_wh(distance_m, speed_mps)
            }
        }
    }

    pub fn hover_wh(&self, t_s: f64) -> f64 {
        match self {
            EnergyModel::Linear(p) => p.p_hover_w * t_s / J_PER_WH,
            EnergyModel::Aerodynamic { propulsion, .. } => propulsion.hover_energy_wh(t_s),
        }
    }

    pub fn transmit_wh(&self, t_s: f64) -> f64 {
        match self {
            EnergyModel::Linear(p) => p.p_tx_w * t_s / J_PER_WH,
            EnergyModel::Aerodynamic { tx, .. } => tx.transmit_energy_wh(t_s, tx.p_out_w),
        }
    }

    /// Radiated power (W) fed into the rate computation.
    #[inline]
    pub fn tx_power_w(&self) -> f64 {
        match self {
            EnergyModel::Linear(p) => p.p_tx_w,
            EnergyModel::Aerodynamic { tx, .. } => tx.p_out_w,
        }
    }
}
