//! Fluent builder for constructing a [`Sim`].

use uav_channel::Radio;
use uav_core::{AoiState, Node, Point2, Uav};
use uav_energy::{EnergyLedger, EnergyModel, LinearPower, RotorSpec, TxConfig};
use uav_planner::NodeSelector;

use crate::{Sim, SimError, SimParams, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - `&[Node]`: sensor positions, indexed `0..N`
/// - [`Uav`]: start position, speed, battery and flat wattages (moved into the sim)
/// - [`Radio`]: link parameters
/// - [`SimParams`]: mission time, payload, policy, ...
///
/// # Optional inputs
///
/// | Method               | Default                                  |
/// |----------------------|------------------------------------------|
/// | `.aerodynamics(s)`   | Linear energy model from the UAV wattages |
/// | `.transmitter(tx)`   | `TxConfig::default()` (aerodynamic only)  |
pub struct SimBuilder<'a> {
    nodes:  &'a [Node],
    uav:    Uav,
    radio:  &'a Radio,
    params: &'a SimParams,
    rotor:  Option<RotorSpec>,
    tx:     Option<TxConfig>,
}

impl<'a> SimBuilder<'a> {
    pub fn new(nodes: &'a [Node], uav: Uav, radio: &'a Radio, params: &'a SimParams) -> Self {
        Self {
            nodes,
            uav,
            radio,
            params,
            rotor: None,
            tx:    None,
        }
    }

    /// Request the aerodynamic energy model.
    ///
    /// If `spec` does not resolve to a complete [`uav_energy::Propulsion`],
    /// the run falls back to the linear model (logged at `warn`).
    pub fn aerodynamics(mut self, spec: RotorSpec) -> Self {
        self.rotor = Some(spec);
        self
    }

    pub fn transmitter(mut self, tx: TxConfig) -> Self {
        self.tx = Some(tx);
        self
    }

    /// Validate inputs, choose the energy model, build the selector (and the
    /// static tour, once) and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<'a>> {
        self.params.validate()?;
        if self.uav.battery_wh.is_nan() {
            return Err(SimError::Config("battery_wh is NaN".into()));
        }

        let model = EnergyModel::select(LinearPower::from(&self.uav), self.rotor.as_ref(), self.tx);

        let positions: Vec<Point2> = self.nodes.iter().map(|n| n.pos).collect();
        let selector = NodeSelector::new(
            self.params.policy,
            self.params.greedy_mode,
            self.params.beta,
            self.params.gamma,
            &positions,
        );

        Ok(Sim {
            visited_path:  vec![self.uav.position()],
            visited_nodes: Vec::new(),
            aoi:           AoiState::zeroed(self.nodes.len()),
            ledger:        EnergyLedger::default(),
            time_s:        0.0,
            cycles:        0,
            idle_cycles:   0,
            finished:      None,
            positions,
            uav:           self.uav,
            radio:         self.radio,
            params:        self.params,
            model,
            selector,
        })
    }
}
