//! `uav-energy` — energy accounting for one UAV mission.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`propulsion`] | `RotorSpec` (config), `Propulsion` (resolved power curve)   |
//! | [`transmit`]   | `TxConfig` — circuit power + amplifier efficiency          |
//! | [`model`]      | `LinearPower`, `EnergyModel` (linear or aerodynamic)        |
//! | [`ledger`]     | `EnergyLedger` — running per-phase totals                  |
//! | [`error`]      | `EnergyError`, `EnergyResult<T>`                           |
//!
//! # Model selection
//!
//! [`EnergyModel::select`] runs once per simulation.  A `RotorSpec` that
//! resolves into a [`Propulsion`] gives the aerodynamic variant for all three
//! phases; anything else gives the flat linear variant for all three.  The
//! two are never mixed inside one run.
//!
//! All energies are returned in Wh (`J / 3600`).

pub mod error;
pub mod ledger;
pub mod model;
pub mod propulsion;
pub mod transmit;


pub use error::{EnergyError, EnergyResult};
pub use ledger::EnergyLedger;
pub use model::{EnergyModel, LinearPower};
pub use propulsion::{Propulsion, RotorSpec, flight_time_s};
pub use transmit::TxConfig;

/// Joules per watt-hour.
pub const J_PER_WH: f64 = 3600.0;
