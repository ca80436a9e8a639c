//! Deterministic run-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! Randomness is only used for node placement.  The caller creates exactly
//! one `SimRng` per command from the run seed and passes it explicitly to
//! [`place_random`][crate::place_random]; nothing reads a process-wide source.
//! The same seed therefore always yields the same field, and every run over
//! that field produces the same log.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG for node placement.
///
/// Used single-threaded.  Parallel sweeps that need their own fields derive a
/// child generator per run with [`child`][Self::child] before fanning out.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Uniform sample in `[lo, hi)`; returns `lo` when the range is empty.
    #[inline]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if hi > lo {
            self.0.gen_range(lo..hi)
        } else {
            lo
        }
    }
}
