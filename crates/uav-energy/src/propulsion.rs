//! Rotary-wing propulsion power curve.
//!
//! Power at forward speed `v` is the sum of three terms:
//!
//! ```text
//! profile(v)   = P0 · (1 + 3 v² / Utip²)
//! induced(v)   = Pi · sqrt( sqrt(1 + v⁴ / (4 v0⁴)) − v² / (2 v0²) )
//! parasitic(v) = ½ · d0 · ρ · s · A · v³
//! ```
//!
//! with hover induced velocity `v0 = sqrt(m g / (2 ρ A))` and, unless given,
//! hover induced power `Pi = m g v0`.  `v0` and `Pi` are fixed when the
//! [`Propulsion`] is resolved and reused for every step of the run.

use std::f64::consts::PI;

use crate::{EnergyError, EnergyResult, J_PER_WH};

const STANDARD_GRAVITY: f64 = 9.81;
const SEA_LEVEL_AIR_DENSITY: f64 = 1.225;

/// Below this `v0` the induced term is taken as `Pi` directly.
const MIN_INDUCED_VELOCITY: f64 = 1e-9;
const MIN_SPEED_MPS: f64 = 1e-9;

/// Time to cover `distance_m` at `speed_mps`.
///
/// The speed is floored at 1e-9 m/s, so a stalled UAV yields a huge but
/// finite duration instead of a division fault.
#[inline]
pub fn flight_time_s(distance_m: f64, speed_mps: f64) -> f64 {
    distance_m / speed_mps.max(MIN_SPEED_MPS)
}

// ── RotorSpec ─────────────────────────────────────────────────────────────────

/// Aerodynamic configuration as it appears in a scenario file.
///
/// Every key is optional so that an incomplete file still parses; whether the
/// spec is usable is decided by [`Propulsion::from_spec`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RotorSpec {
    pub mass_kg:            Option<f64>,
    /// Gravitational acceleration; 9.81 when absent.
    pub g:                  Option<f64>,
    pub rotor_radius_m:     Option<f64>,
    /// Rotor disc area `A`; takes precedence over `π r²` when given.
    pub rotor_disc_area_m2: Option<f64>,
    /// Blade tip speed `Utip` (m/s).
    pub blade_tip_speed:    Option<f64>,
    /// Rotor solidity `s`.
    pub rotor_solidity:     Option<f64>,
    /// Blade profile power in hover `P0` (W).
    #[cfg_attr(feature = "serde", serde(alias = "P0"))]
    pub p0_w:               Option<f64>,
    /// Induced power in hover `Pi` (W); derived from mass when absent.
    #[cfg_attr(feature = "serde", serde(alias = "Pi"))]
    pub pi_w:               Option<f64>,
    /// Fuselage drag ratio `d0`.
    pub d0:                 Option<f64>,
    /// Air density `ρ` (kg/m³); 1.225 when absent.
    pub air_density:        Option<f64>,
}

// ── Propulsion ────────────────────────────────────────────────────────────────

/// A fully resolved power curve.  Build once per simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Propulsion {
    p0_w:         f64,
    pi_w:         f64,
    v0_mps:       f64,
    tip_speed:    f64,
    /// `½ · d0 · ρ · s · A`, the cubic drag coefficient.
    parasitic_k:  f64,
}

fn require(value: Option<f64>, key: &'static str) -> EnergyResult<f64> {
    match value {
        None => Err(EnergyError::MissingKey(key)),
        Some(v) if !v.is_finite() => Err(EnergyError::InvalidValue { key, value: v }),
        Some(v) => Ok(v),
    }
}

fn positive(value: f64, key: &'static str) -> EnergyResult<f64> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(EnergyError::InvalidValue { key, value })
    }
}

impl Propulsion {
    /// Resolve a [`RotorSpec`], computing `v0` and `Pi`.
    ///
    /// Fails with the first missing or out-of-range key.
    pub fn from_spec(spec: &RotorSpec) -> EnergyResult<Self> {
        let mass_kg = require(spec.mass_kg, "mass_kg")?;
        if mass_kg < 0.0 {
            return Err(EnergyError::InvalidValue { key: "mass_kg", value: mass_kg });
        }
        let g = require(spec.g.or(Some(STANDARD_GRAVITY)), "g")?;
        let rho = positive(
            require(spec.air_density.or(Some(SEA_LEVEL_AIR_DENSITY)), "air_density")?,
            "air_density",
        )?;
        let area = match spec.rotor_disc_area_m2 {
            Some(a) => positive(a, "rotor_disc_area_m2")?,
            None => {
                let r = require(spec.rotor_radius_m, "rotor_radius_m")?;
                positive(PI * r * r, "rotor_radius_m")?
            }
        };
        let tip_speed = positive(require(spec.blade_tip_speed, "blade_tip_speed")?, "blade_tip_speed")?;
        let solidity = require(spec.rotor_solidity, "rotor_solidity")?;
        let p0_w = require(spec.p0_w, "p0_w")?;
        let d0 = require(spec.d0, "d0")?;

        let weight_n = mass_kg * g;
        let v0_mps = (weight_n / (2.0 * rho * area)).max(0.0).sqrt();
        let pi_w = match spec.pi_w {
            Some(p) => require(Some(p), "pi_w")?,
            None => weight_n * v0_mps,
        };

        Ok(Self {
            p0_w,
            pi_w,
            v0_mps,
            tip_speed,
            parasitic_k: 0.5 * d0 * rho * solidity * area,
        })
    }

    #[inline]
    pub fn induced_velocity_mps(&self) -> f64 {
        self.v0_mps
    }

    #[inline]
    pub fn induced_power_w(&self) -> f64 {
        self.pi_w
    }

    #[inline]
    pub fn profile_power_w(&self) -> f64 {
        self.p0_w
    }

    /// `P0 + Pi`, the power drawn while hovering.
    #[inline]
    pub fn hover_power_w(&self) -> f64 {
        self.p0_w + self.pi_w
    }

    /// Total propulsion power (W) at forward speed `speed_mps`.
    ///
    /// Negative speeds are treated as 0.
    pub fn power_w(&self, speed_mps: f64) -> f64 {
        let v = speed_mps.max(0.0);
        let v2 = v * v;

        let profile = self.p0_w * (1.0 + 3.0 * v2 / (self.tip_speed * self.tip_speed));

        let induced = if self.v0_mps <= MIN_INDUCED_VELOCITY {
            self.pi_w
        } else {
            let v0_2 = self.v0_mps * self.v0_mps;
            let inner = (1.0 + v2 * v2 / (4.0 * v0_2 * v0_2)).max(0.0).sqrt();
            self.pi_w * (inner - v2 / (2.0 * v0_2)).max(0.0).sqrt()
        };

        let parasitic = self.parasitic_k * v2 * v;

        profile + induced + parasitic
    }

    /// Energy (Wh) to fly `distance_m` at `speed_mps`; `+∞` if the speed is
    /// not positive.
    pub fn flight_energy_wh(&self, distance_m: f64, speed_mps: f64) -> f64 {
        if speed_mps <= 0.0 {
            return f64::INFINITY;
        }
        self.power_w(speed_mps) * flight_time_s(distance_m, speed_mps) / J_PER_WH
    }

    /// Energy (Wh) to hover for `t_s` seconds.
    #[inline]
    pub fn hover_energy_wh(&self, t_s: f64) -> f64 {
        self.hover_power_w() * t_s / J_PER_WH
    }
}
