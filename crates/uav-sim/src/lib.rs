//! `uav-sim` — the visit-cycle engine.
//!
//! # One cycle
//!
//! ```text
//! loop:
//!   ① Check   — stop if elapsed ≥ mission time or energy ≥ battery.
//!   ② Select  — NodeSelector picks target j.
//!   ③ Fly     — advance time and every AoI by the flight time, charge
//!                flight energy; stop here (UAV not moved) if terminal.
//!   ④ Arrive  — move the UAV onto j, extend the visited path.
//!   ⑤ Hover   — t_tx = payload / rate(d = 0); hover min(t_tx, cap);
//!                charge hover + transmit energy, age again; stop if terminal.
//!   ⑥ Credit  — reset AoI(j) when the link is in coverage.
//!   ⑦ Record  — one LogRecord per completed cycle.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use uav_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(&nodes, uav, &radio, &params)
//!     .aerodynamics(rotor)
//!     .build()?;
//! let summary = sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod params;
pub mod record;
pub mod sim;
pub mod summary;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{MemoryObserver, NoopObserver, SimObserver};
pub use params::SimParams;
pub use record::{LogRecord, LogSchema};
pub use sim::{Sim, Step};
pub use summary::{Summary, Termination};
