//! Per-node Age-of-Information state.
//!
//! AoI evolves as `AoI_i(t + Δ) = AoI_i(t) + Δ` for every node and resets to
//! exactly 0 for the node that was just served successfully.  Entries never go
//! negative as long as callers only pass non-negative `Δ`.

#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AoiState {
    values: Vec<f64>,
}

impl AoiState {
    /// `n` nodes, all with age 0.
    pub fn zeroed(n: usize) -> Self {
        Self { values: vec![0.0; n] }
    }

    /// Add `delta_s` to every entry.
    pub fn increment_all(&mut self, delta_s: f64) {
        for v in &mut self.values {
            *v += delta_s;
        }
    }

    /// Zero entry `idx`.
    ///
    /// # Panics
    /// Panics if `idx >= len()`; callers pass indices of existing nodes.
    #[inline]
    pub fn reset(&mut self, idx: usize) {
        self.values[idx] = 0.0;
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Mean age; 0 when there are no nodes.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Maximum age; 0 when there are no nodes.
    pub fn max(&self) -> f64 {
        self.values.iter().copied().reduce(f64::max).unwrap_or(0.0)
    }
}
