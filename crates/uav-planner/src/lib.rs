//! `uav-planner` — which node the UAV visits next.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`policy`]   | `Policy` enum and the RR / MAF / AWN scoring rules          |
//! | [`tour`]     | Nearest-neighbour construction, 2-opt, `Tour`               |
//! | [`selector`] | `NodeSelector`, the single "pick next index" dispatch       |
//! | [`error`]    | `PlannerError`, `PlannerResult<T>`                          |
//!
//! # Selection modes
//!
//! In greedy mode the engine asks the scoring policy every cycle.  Otherwise a
//! static tour is built once (NN from node 0, then 2-opt) and walked
//! cyclically for the whole mission.  Both are variants of [`NodeSelector`];
//! the policy set is closed.

pub mod error;
pub mod policy;
pub mod selector;
pub mod tour;


pub use error::{PlannerError, PlannerResult};
pub use policy::{Policy, age_weighted_nearest, max_age_first, round_robin};
pub use selector::{NodeSelector, SelectionView};
pub use tour::{Tour, nearest_neighbor_order, tour_length, two_opt};
