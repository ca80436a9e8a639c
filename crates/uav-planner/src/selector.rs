//! `NodeSelector`: one dispatch point for "which node next".

use uav_core::Point2;

use crate::policy::{self, Policy};
use crate::tour::Tour;

/// Read-only state the selector needs at a decision point.
#[derive(Copy, Clone, Debug)]
pub struct SelectionView<'a> {
    pub aoi:       &'a [f64],
    pub uav_pos:   Point2,
    pub positions: &'a [Point2],
}

/// Node-selection strategy, fixed for the lifetime of a simulation.
#[derive(Clone, Debug)]
pub enum NodeSelector {
    RoundRobin { cursor: Option<usize> },
    MaxAgeFirst,
    AgeWeightedNearest { beta: f64, gamma: f64 },
    /// Static tour walked cyclically, whatever the policy says.
    Tour { tour: Tour, ptr: usize },
}

impl NodeSelector {
    /// Greedy mode dispatches on `policy`; otherwise a tour is built over
    /// `positions` and used for every policy.
    pub fn new(policy: Policy, greedy: bool, beta: f64, gamma: f64, positions: &[Point2]) -> Self {
        if !greedy {
            return NodeSelector::Tour { tour: Tour::build(positions), ptr: 0 };
        }
        match policy {
            Policy::RoundRobin => NodeSelector::RoundRobin { cursor: None },
            Policy::MaxAgeFirst => NodeSelector::MaxAgeFirst,
            Policy::AgeWeightedNearest => NodeSelector::AgeWeightedNearest { beta, gamma },
        }
    }

    pub fn is_tour(&self) -> bool {
        matches!(self, NodeSelector::Tour { .. })
    }

    /// Index of the next node to visit.
    ///
    /// # Panics
    /// Panics if there are no nodes; the engine never asks in that case.
    pub fn next(&mut self, view: &SelectionView<'_>) -> usize {
        match self {
            NodeSelector::RoundRobin { cursor } => {
                let idx = policy::round_robin(*cursor, view.positions.len());
                *cursor = Some(idx);
                idx
            }
            NodeSelector::MaxAgeFirst => policy::max_age_first(view.aoi),
            NodeSelector::AgeWeightedNearest { beta, gamma } => policy::age_weighted_nearest(
                view.aoi,
                view.uav_pos,
                view.positions,
                *beta,
                *gamma,
            ),
            NodeSelector::Tour { tour, ptr } => {
                let idx = tour.order()[*ptr % tour.len()];
                *ptr += 1;
                idx
            }
        }
    }
}
