//! Ground nodes, the UAV, and random node placement.

use crate::{CoreError, CoreResult, NodeId, Point2, SimRng};

// ── Node ──────────────────────────────────────────────────────────────────────

/// A stationary ground sensor node.  Immutable once created.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id:  NodeId,
    pub pos: Point2,
}

impl Node {
    #[inline]
    pub fn new(id: NodeId, x: f64, y: f64) -> Self {
        Self { id, pos: Point2::new(x, y) }
    }
}

/// Place `n` nodes uniformly over `[0, w) × [0, h)`.
///
/// All x coordinates are drawn first, then all y coordinates, so a given seed
/// maps to one fixed layout regardless of how the nodes are consumed later.
/// Node `i` gets `NodeId(i)`.
pub fn place_random(n: usize, field: (f64, f64), rng: &mut SimRng) -> CoreResult<Vec<Node>> {
    let (w, h) = field;
    if !(w.is_finite() && h.is_finite()) || w < 0.0 || h < 0.0 {
        return Err(CoreError::InvalidField(w, h));
    }
    if u32::try_from(n).is_err() {
        return Err(CoreError::TooManyNodes(n));
    }

    let xs: Vec<f64> = (0..n).map(|_| rng.uniform(0.0, w)).collect();
    let ys: Vec<f64> = (0..n).map(|_| rng.uniform(0.0, h)).collect();

    Ok(xs
        .into_iter()
        .zip(ys)
        .enumerate()
        .map(|(i, (x, y))| Node::new(NodeId(i as u32), x, y))
        .collect())
}

// ── Uav ───────────────────────────────────────────────────────────────────────

/// The data-collecting UAV.
///
/// Energy is tracked in Wh, powers are in W, times in seconds.  The flat
/// wattages drive the linear energy model; the aerodynamic model ignores them
/// (see `uav-energy`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uav {
    pub pos:        Point2,
    pub speed_mps:  f64,
    pub battery_wh: f64,
    pub p_move_w:   f64,
    pub p_hover_w:  f64,
    pub p_tx_w:     f64,
}

impl Uav {
    #[inline]
    pub fn position(&self) -> Point2 {
        self.pos
    }

    /// Reposition the UAV.  The only way its position changes.
    #[inline]
    pub fn move_to(&mut self, pos: Point2) {
        self.pos = pos;
    }
}
