//! The `Sim` struct and its visit cycle.

use tracing::{debug, info, trace};
use uav_channel::{Radio, achievable_rate_bps, in_coverage};
use uav_core::{AoiState, Point2, Uav};
use uav_energy::{EnergyLedger, EnergyModel, flight_time_s};
use uav_planner::{NodeSelector, SelectionView};

use crate::{LogRecord, LogSchema, SimObserver, SimParams, Summary, Termination};

/// Rate floor so that a dead link gives a huge but finite transmit time.
const MIN_RATE_BPS: f64 = 1e-9;

/// Result of one [`Sim::step`].
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// A full cycle completed; the record is what gets logged.
    Visited(LogRecord),
    /// The run is over.  Further calls keep returning the same reason.
    Finished(Termination),
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// One mission: a UAV repeatedly flying to a node, hovering while it uploads,
/// and moving on.
///
/// The engine owns the UAV and all mutable state; nodes, radio and parameters
/// are borrowed read-only.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<'a> {
    pub(crate) positions:     Vec<Point2>,
    pub(crate) uav:           Uav,
    pub(crate) radio:         &'a Radio,
    pub(crate) params:        &'a SimParams,
    pub(crate) model:         EnergyModel,
    pub(crate) selector:      NodeSelector,
    pub(crate) aoi:           AoiState,
    pub(crate) ledger:        EnergyLedger,
    pub(crate) time_s:        f64,
    pub(crate) cycles:        usize,
    pub(crate) idle_cycles:   usize,
    pub(crate) visited_nodes: Vec<usize>,
    pub(crate) visited_path:  Vec<Point2>,
    pub(crate) finished:      Option<Termination>,
}

impl<'a> Sim<'a> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run cycles until a terminal condition, reporting each to `observer`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> Summary {
        let schema = self.schema();
        debug!(
            ?schema,
            nodes = self.positions.len(),
            policy = %self.params.policy,
            greedy = self.params.greedy_mode,
            "simulation start"
        );
        observer.on_sim_start(schema);

        let reason = loop {
            match self.step() {
                Step::Visited(record) => observer.on_visit(&record),
                Step::Finished(reason) => break reason,
            }
        };

        let summary = self.summary(reason);
        observer.on_sim_end(&summary);
        summary
    }

    /// Run a single visit cycle.
    pub fn step(&mut self) -> Step {
        if let Some(reason) = self.finished {
            return Step::Finished(reason);
        }
        if self.positions.is_empty() {
            return self.finish(Termination::NoNodes);
        }
        if let Some(reason) = self.terminal() {
            return self.finish(reason);
        }

        // ── Select and fly ────────────────────────────────────────────────
        let target = self.selector.next(&SelectionView {
            aoi:       self.aoi.values(),
            uav_pos:   self.uav.position(),
            positions: &self.positions,
        });
        let target_pos = self.positions[target];
        let distance_m = self.uav.position().distance_m(target_pos);
        let t_fly = flight_time_s(distance_m, self.uav.speed_mps);
        let e_fly = self.model.flight_wh(distance_m, self.uav.speed_mps);

        self.time_s += t_fly;
        self.aoi.increment_all(t_fly);
        self.ledger.add_flight(e_fly);
        if let Some(reason) = self.terminal() {
            return self.finish(reason);
        }

        self.uav.move_to(target_pos);
        self.visited_path.push(target_pos);
        self.visited_nodes.push(target);

        // ── Hover and transmit (UAV directly above the node) ──────────────
        let rate = achievable_rate_bps(self.model.tx_power_w(), 0.0, self.radio);
        let t_tx = self.params.payload_bits as f64 / rate.max(MIN_RATE_BPS);
        let t_hover = match self.params.hover_cap_s {
            Some(cap) => t_tx.min(cap),
            None => t_tx,
        };
        let covered = in_coverage(0.0, self.radio);
        let e_hover = self.model.hover_wh(t_hover);
        let e_tx = self.model.transmit_wh(t_tx.min(t_hover));

        self.time_s += t_hover;
        self.aoi.increment_all(t_hover);
        self.ledger.add_hover_tx(e_hover, e_tx);
        if let Some(reason) = self.terminal() {
            return self.finish(reason);
        }

        // ── Credit and record ─────────────────────────────────────────────
        if covered {
            self.aoi.reset(target);
        }
        self.cycles += 1;

        let record = self.record(target);
        trace!(
            cycle = self.cycles,
            node = target,
            time_s = record.time_s,
            energy_wh = record.energy_wh,
            aoi_avg = record.aoi_avg,
            covered,
            "visit"
        );

        // Stalled only after more than one full pass of zero-progress cycles.
        if t_fly + t_hover == 0.0 && e_fly + e_hover + e_tx == 0.0 {
            self.idle_cycles += 1;
            if self.idle_cycles > self.positions.len() {
                self.finished = Some(Termination::Stalled);
                self.log_termination(Termination::Stalled);
            }
        } else {
            self.idle_cycles = 0;
        }
        Step::Visited(record)
    }

    /// Summary of the run so far, labelled with `termination`.
    pub fn summary(&self, termination: Termination) -> Summary {
        Summary {
            final_time_s:    self.time_s,
            final_energy_wh: self.ledger.total_wh(),
            fly_wh:          self.ledger.fly_wh(),
            hover_wh:        self.ledger.hover_wh(),
            tx_wh:           self.ledger.tx_wh(),
            battery_wh:      self.uav.battery_wh,
            visited_path:    self.visited_path.clone(),
            visited_nodes:   self.visited_nodes.clone(),
            aoi_avg:         self.aoi.mean(),
            aoi_max:         self.aoi.max(),
            cycles:          self.cycles,
            termination,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn schema(&self) -> LogSchema {
        LogSchema::for_model(&self.model)
    }

    pub fn model(&self) -> &EnergyModel {
        &self.model
    }

    pub fn selector(&self) -> &NodeSelector {
        &self.selector
    }

    pub fn uav(&self) -> &Uav {
        &self.uav
    }

    pub fn aoi(&self) -> &AoiState {
        &self.aoi
    }

    pub fn energy(&self) -> &EnergyLedger {
        &self.ledger
    }

    pub fn time_s(&self) -> f64 {
        self.time_s
    }

    pub fn termination(&self) -> Option<Termination> {
        self.finished
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn terminal(&self) -> Option<Termination> {
        if self.ledger.exhausted(self.uav.battery_wh) {
            Some(Termination::BatteryExhausted)
        } else if self.time_s >= self.params.mission_time_s {
            Some(Termination::MissionTime)
        } else {
            None
        }
    }

    fn finish(&mut self, reason: Termination) -> Step {
        self.finished = Some(reason);
        self.log_termination(reason);
        Step::Finished(reason)
    }

    fn log_termination(&self, reason: Termination) {
        info!(
            %reason,
            cycles = self.cycles,
            time_s = self.time_s,
            energy_wh = self.ledger.total_wh(),
            aoi_avg = self.aoi.mean(),
            "simulation finished"
        );
    }

    fn record(&self, served_node: usize) -> LogRecord {
        let pos = self.uav.position();
        LogRecord {
            time_s:      self.time_s,
            energy_wh:   self.ledger.total_wh(),
            fly_wh:      self.ledger.fly_wh(),
            hover_wh:    self.ledger.hover_wh(),
            tx_wh:       self.ledger.tx_wh(),
            uav_x:       pos.x,
            uav_y:       pos.y,
            served_node,
            aoi_avg:     self.aoi.mean(),
            aoi_max:     self.aoi.max(),
        }
    }
}
