//! `uav-channel` — radio link model between the UAV and a ground node.
//!
//! Deterministic log-distance path loss with constant gain, no fading or
//! shadowing:
//!
//! ```text
//! Pr  = Pt · max(d, 1e-6)^(−n)
//! SNR = Pr / N0
//! R   = B · log2(1 + SNR)
//! ```
//!
//! Units: power in W, distance in m, bandwidth in Hz, rate in bit/s.

pub mod channel;


pub use channel::{Radio, achievable_rate_bps, in_coverage, snr_linear};
