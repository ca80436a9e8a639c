//! Static tour construction: nearest neighbour, then 2-opt.
//!
//! Tours are open paths (no closing edge back to the first node); the engine
//! walks them cyclically, but the cost being minimised is the open length.

use uav_core::Point2;

/// Minimum gain for a 2-opt move to be accepted.
const IMPROVEMENT_EPS: f64 = 1e-9;

/// Open path length of `order` over `points`.
pub fn tour_length(order: &[usize], points: &[Point2]) -> f64 {
    order
        .windows(2)
        .map(|w| points[w[0]].distance_m(points[w[1]]))
        .sum()
}

/// Greedy nearest-neighbour order starting at node 0.
///
/// Ties go to the lowest index.  Empty input gives an empty order.
pub fn nearest_neighbor_order(points: &[Point2]) -> Vec<usize> {
    let n = points.len();
    if n == 0 {
        return vec![];
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    visited[0] = true;
    order.push(0);

    while order.len() < n {
        let last = points[order[order.len() - 1]];
        let mut next = usize::MAX;
        let mut next_dist = f64::INFINITY;
        for (j, &p) in points.iter().enumerate() {
            if visited[j] {
                continue;
            }
            let d = last.distance_m(p);
            if next == usize::MAX || d < next_dist {
                next = j;
                next_dist = d;
            }
        }
        visited[next] = true;
        order.push(next);
    }
    order
}

/// 2-opt local search over segment reversals `order[i..=k]`.
///
/// The first and last positions stay fixed.  A reversal is kept when it
/// shortens the path by more than 1e-9; later candidates in the same pass are
/// evaluated against the updated order.  Passes repeat until one makes no
/// change, so the result is a local optimum.
pub fn two_opt(order: &[usize], points: &[Point2]) -> Vec<usize> {
    let n = order.len();
    let mut best = order.to_vec();
    let mut best_len = tour_length(&best, points);

    let mut improved = true;
    while improved {
        improved = false;
        for i in 1..n.saturating_sub(2) {
            for k in (i + 1)..(n - 1) {
                let mut candidate = best.clone();
                candidate[i..=k].reverse();
                let len = tour_length(&candidate, points);
                if len + IMPROVEMENT_EPS < best_len {
                    best = candidate;
                    best_len = len;
                    improved = true;
                }
            }
        }
    }
    best
}

// ── Tour ──────────────────────────────────────────────────────────────────────

/// A fixed visiting order over all nodes.  Built once per simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Nearest-neighbour from node 0, improved by [`two_opt`].
    pub fn build(points: &[Point2]) -> Self {
        let initial = nearest_neighbor_order(points);
        Self { order: two_opt(&initial, points) }
    }

    #[inline]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn length(&self, points: &[Point2]) -> f64 {
        tour_length(&self.order, points)
    }
}
