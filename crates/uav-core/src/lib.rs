//! `uav-core` — foundational types for the UAV AoI/energy simulator.
//!
//! This crate is a dependency of every other `uav-*` crate.  It has no
//! `uav-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`ids`]     | `NodeId`                                                |
//! | [`geo`]     | `Point2`, Euclidean distance, open path length          |
//! | [`rng`]     | `SimRng` (one seeded generator per run)                 |
//! | [`entity`]  | `Node`, `Uav`, random node placement                    |
//! | [`aoi`]     | `AoiState` — per-node Age-of-Information vector         |
//! | [`error`]   | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod aoi;
pub mod entity;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use aoi::AoiState;
pub use entity::{Node, Uav, place_random};
pub use error::{CoreError, CoreResult};
pub use geo::{Point2, path_length};
pub use ids::NodeId;
pub use rng::SimRng;
