//! Greedy node-selection policies.
//!
//! Each rule is a pure function of the current state.  Ties always go to the
//! lowest index so selection is deterministic.

use std::fmt;
use std::str::FromStr;

use uav_core::Point2;

use crate::PlannerError;

/// Every age below this counts as "fresh" for the AWN nearest-node fallback.
const FRESH_AGE_S: f64 = 1e-6;
const MIN_DISTANCE_M: f64 = 1e-9;
const SCORE_EPSILON: f64 = 1e-6;

// ── Policy ────────────────────────────────────────────────────────────────────

/// The three scoring policies, selected by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Policy {
    /// `"RR"`: visit nodes in index order.
    RoundRobin,
    /// `"MAF"`: visit the stalest node.
    MaxAgeFirst,
    /// `"AWN"`: trade age against distance.
    AgeWeightedNearest,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::RoundRobin, Policy::MaxAgeFirst, Policy::AgeWeightedNearest];

    /// Short name used in config files and result tables.
    pub fn name(self) -> &'static str {
        match self {
            Policy::RoundRobin => "RR",
            Policy::MaxAgeFirst => "MAF",
            Policy::AgeWeightedNearest => "AWN",
        }
    }
}

impl FromStr for Policy {
    type Err = PlannerError;

    /// Case-insensitive; anything other than RR / MAF / AWN is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RR" => Ok(Policy::RoundRobin),
            "MAF" => Ok(Policy::MaxAgeFirst),
            "AWN" => Ok(Policy::AgeWeightedNearest),
            _ => Err(PlannerError::UnknownPolicy(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Policy {
    type Error = PlannerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Policy> for String {
    fn from(p: Policy) -> String {
        p.name().to_owned()
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Scoring rules ─────────────────────────────────────────────────────────────

/// `(current + 1) mod n`, starting at 0 when nothing has been picked yet.
///
/// # Panics
/// Panics if `n == 0`.
#[inline]
pub fn round_robin(current: Option<usize>, n: usize) -> usize {
    current.map_or(0, |c| (c + 1) % n)
}

/// Index of the largest age; the first one wins ties.  0 for an empty slice.
pub fn max_age_first(aoi: &[f64]) -> usize {
    let mut best = 0;
    for (i, &age) in aoi.iter().enumerate().skip(1) {
        if age > aoi[best] {
            best = i;
        }
    }
    best
}

/// Age-Weighted-Nearest: argmax of `age^beta / (max(dist, 1e-9)^gamma + 1e-6)`.
///
/// While every age is below 1e-6 the score cannot separate the nodes, so the
/// nearest node is returned instead.
pub fn age_weighted_nearest(
    aoi:       &[f64],
    uav_pos:   Point2,
    positions: &[Point2],
    beta:      f64,
    gamma:     f64,
) -> usize {
    let max_age = aoi.iter().copied().reduce(f64::max).unwrap_or(0.0);
    if max_age < FRESH_AGE_S {
        return nearest(uav_pos, positions);
    }

    let mut best_idx = 0;
    let mut best_score = f64::NEG_INFINITY;
    for (i, (&age, &pos)) in aoi.iter().zip(positions).enumerate() {
        let d = uav_pos.distance_m(pos);
        let score = age.powf(beta) / (d.max(MIN_DISTANCE_M).powf(gamma) + SCORE_EPSILON);
        if score > best_score {
            best_score = score;
            best_idx = i;
        }
    }
    best_idx
}

fn nearest(from: Point2, positions: &[Point2]) -> usize {
    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;
    for (i, &pos) in positions.iter().enumerate() {
        let d = from.distance_m(pos);
        if d < best_dist {
            best_dist = d;
            best_idx = i;
        }
    }
    best_idx
}
