//! Transmitter power draw: fixed circuit power plus amplifier input power.

use crate::J_PER_WH;

/// Transmitter configuration.  Defaults: 1 W circuit, 40 % efficient
/// amplifier, 1 W radiated.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TxConfig {
    #[cfg_attr(feature = "serde", serde(alias = "P_circuit_W"))]
    pub p_circuit_w:    f64,
    pub amp_efficiency: f64,
    /// Radiated power, also used for the rate computation.
    #[cfg_attr(feature = "serde", serde(alias = "P_out_W"))]
    pub p_out_w:        f64,
}

impl Default for TxConfig {
    fn default() -> Self {
        Self {
            p_circuit_w:    1.0,
            amp_efficiency: 0.4,
            p_out_w:        1.0,
        }
    }
}

impl TxConfig {
    /// Electrical power (W) drawn while radiating `p_out_w`.
    ///
    /// A non-positive efficiency is replaced by 1.0.
    #[inline]
    pub fn power_w(&self, p_out_w: f64) -> f64 {
        let eta = if self.amp_efficiency <= 0.0 { 1.0 } else { self.amp_efficiency };
        self.p_circuit_w + p_out_w / eta
    }

    /// Energy (Wh) for `t_s` seconds of transmission at `p_out_w`.
    #[inline]
    pub fn transmit_energy_wh(&self, t_s: f64, p_out_w: f64) -> f64 {
        self.power_w(p_out_w) * t_s / J_PER_WH
    }
}
