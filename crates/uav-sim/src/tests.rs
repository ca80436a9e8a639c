//! Integration tests for uav-sim.

use uav_channel::Radio;
use uav_core::{Node, NodeId, Point2, SimRng, Uav, place_random};
use uav_energy::RotorSpec;
use uav_planner::Policy;

use crate::{MemoryObserver, NoopObserver, SimBuilder, SimError, SimParams, Step, Termination};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn radio() -> Radio {
    Radio {
        bandwidth_hz:         1e6,
        noise_w:              1e-9,
        pathloss_exponent:    2.0,
        snr_threshold_linear: 1.0,
        comm_radius_m:        100.0,
    }
}

fn uav(speed_mps: f64, battery_wh: f64) -> Uav {
    Uav {
        pos:        Point2::ORIGIN,
        speed_mps,
        battery_wh,
        p_move_w:   100.0,
        p_hover_w:  80.0,
        p_tx_w:     2.0,
    }
}

fn params(policy: Policy, greedy_mode: bool, mission_time_s: f64) -> SimParams {
    SimParams {
        field_size:   (200.0, 200.0),
        mission_time_s,
        payload_bits: 1_000_000,
        policy,
        beta:         1.0,
        gamma:        1.0,
        alpha:        0.5,
        greedy_mode,
        hover_cap_s:  None,
    }
}

fn random_nodes(n: usize, seed: u64) -> Vec<Node> {
    place_random(n, (200.0, 200.0), &mut SimRng::new(seed)).unwrap()
}

fn line_nodes() -> Vec<Node> {
    vec![
        Node::new(NodeId(0), 10.0, 0.0),
        Node::new(NodeId(1), 20.0, 0.0),
        Node::new(NodeId(2), 30.0, 0.0),
    ]
}

fn zeng_spec() -> RotorSpec {
    RotorSpec {
        mass_kg:            Some(20.0 / 9.81),
        g:                  Some(9.81),
        rotor_radius_m:     Some(0.4),
        rotor_disc_area_m2: Some(0.503),
        blade_tip_speed:    Some(120.0),
        rotor_solidity:     Some(0.05),
        p0_w:               Some(79.86),
        pi_w:               Some(88.63),
        d0:                 Some(0.6),
        air_density:        Some(1.225),
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn no_rotor_spec_is_linear() {
        let (nodes, radio, p) = (line_nodes(), radio(), params(Policy::RoundRobin, true, 100.0));
        let sim = SimBuilder::new(&nodes, uav(10.0, 50.0), &radio, &p).build().unwrap();
        assert!(!sim.model().is_aerodynamic());
        assert_eq!(sim.schema(), crate::LogSchema::Linear);
    }

    #[test]
    fn complete_rotor_spec_is_aerodynamic() {
        let (nodes, radio, p) = (line_nodes(), radio(), params(Policy::RoundRobin, true, 100.0));
        let sim = SimBuilder::new(&nodes, uav(10.0, 50.0), &radio, &p)
            .aerodynamics(zeng_spec())
            .build()
            .unwrap();
        assert_eq!(sim.schema(), crate::LogSchema::Aerodynamic);
    }

    #[test]
    fn incomplete_rotor_spec_falls_back_to_linear() {
        let (nodes, radio, p) = (line_nodes(), radio(), params(Policy::RoundRobin, true, 100.0));
        let mut spec = zeng_spec();
        spec.blade_tip_speed = None;
        let sim = SimBuilder::new(&nodes, uav(10.0, 50.0), &radio, &p)
            .aerodynamics(spec)
            .build()
            .unwrap();
        assert_eq!(sim.schema(), crate::LogSchema::Linear);
    }

    #[test]
    fn greedy_flag_selects_dispatch() {
        let (nodes, radio) = (line_nodes(), radio());
        let tour = params(Policy::MaxAgeFirst, false, 100.0);
        let greedy = params(Policy::MaxAgeFirst, true, 100.0);
        let a = SimBuilder::new(&nodes, uav(10.0, 50.0), &radio, &tour).build().unwrap();
        let b = SimBuilder::new(&nodes, uav(10.0, 50.0), &radio, &greedy).build().unwrap();
        assert!(a.selector().is_tour());
        assert!(!b.selector().is_tour());
    }

    #[test]
    fn invalid_mission_time_is_config_error() {
        let (nodes, radio) = (line_nodes(), radio());
        let p = params(Policy::RoundRobin, true, f64::NAN);
        let result = SimBuilder::new(&nodes, uav(10.0, 50.0), &radio, &p).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn negative_hover_cap_is_config_error() {
        let (nodes, radio) = (line_nodes(), radio());
        let mut p = params(Policy::RoundRobin, true, 100.0);
        p.hover_cap_s = Some(-1.0);
        assert!(SimBuilder::new(&nodes, uav(10.0, 50.0), &radio, &p).build().is_err());
    }

    #[test]
    fn unknown_policy_name_is_planner_error() {
        let result = SimParams::new((100.0, 100.0), 60.0, 1000, "XYZ");
        assert!(matches!(result, Err(SimError::Planner(_))));
        assert_eq!(SimParams::new((100.0, 100.0), 60.0, 1000, "maf").unwrap().policy, Policy::MaxAgeFirst);
    }
}

// ── End-to-end runs ───────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn fixed_seed_run_is_well_formed() {
        let (nodes, radio) = (random_nodes(10, 7), radio());
        let p = params(Policy::AgeWeightedNearest, false, 600.0);
        let mut sim = SimBuilder::new(&nodes, uav(10.0, 50.0), &radio, &p).build().unwrap();
        let mut obs = MemoryObserver::default();
        let summary = sim.run(&mut obs);

        assert!(!obs.records.is_empty());
        assert_eq!(obs.records.len(), summary.cycles);
        assert_eq!(summary.visited_path[0], Point2::ORIGIN);
        assert!(summary.visited_path.len() >= summary.cycles + 1);
        assert_eq!(summary.visited_path.len(), summary.visited_nodes.len() + 1);
        assert!(matches!(
            summary.termination,
            Termination::MissionTime | Termination::BatteryExhausted
        ));

        for pair in obs.records.windows(2) {
            assert!(pair[1].energy_wh >= pair[0].energy_wh);
            assert!(pair[1].time_s >= pair[0].time_s);
        }
        for r in &obs.records {
            assert!(r.aoi_avg >= 0.0);
            assert!(r.aoi_max >= r.aoi_avg);
            assert!(r.served_node < nodes.len());
        }
        assert_eq!(obs.summary.as_ref(), Some(&summary));
    }

    #[test]
    fn same_seed_same_log() {
        let radio = radio();
        let p = params(Policy::MaxAgeFirst, true, 300.0);
        let run = |seed| {
            let nodes = random_nodes(8, seed);
            let mut obs = MemoryObserver::default();
            SimBuilder::new(&nodes, uav(10.0, 50.0), &radio, &p).build().unwrap().run(&mut obs);
            obs.records
        };
        assert_eq!(run(3), run(3));
        assert_ne!(run(3), run(4));
    }

    #[test]
    fn empty_node_set_terminates_immediately() {
        let (nodes, radio) = (Vec::<Node>::new(), radio());
        let p = params(Policy::RoundRobin, false, 600.0);
        let mut sim = SimBuilder::new(&nodes, uav(10.0, 50.0), &radio, &p).build().unwrap();
        let mut obs = MemoryObserver::default();
        let summary = sim.run(&mut obs);

        assert_eq!(summary.termination, Termination::NoNodes);
        assert_eq!(summary.cycles, 0);
        assert!(obs.records.is_empty());
        assert_eq!(summary.visited_path, vec![Point2::ORIGIN]);
        assert_eq!(summary.aoi_avg, 0.0);
        assert_eq!(summary.final_energy_wh, 0.0);
    }

    #[test]
    fn zero_speed_exhausts_battery_without_moving() {
        let (nodes, radio) = (line_nodes(), radio());
        let p = params(Policy::RoundRobin, true, 600.0);
        let mut sim = SimBuilder::new(&nodes, uav(0.0, 50.0), &radio, &p).build().unwrap();
        let summary = sim.run(&mut NoopObserver);

        assert_eq!(summary.termination, Termination::BatteryExhausted);
        assert_eq!(summary.cycles, 0);
        assert!(summary.final_energy_wh.is_infinite());
        assert_eq!(sim.uav().position(), Point2::ORIGIN);
        assert!(summary.visited_nodes.is_empty());
    }

    #[test]
    fn mission_time_limit_stops_run() {
        let (nodes, radio) = (line_nodes(), radio());
        let p = params(Policy::RoundRobin, true, 30.0);
        let summary = SimBuilder::new(&nodes, uav(10.0, 1e6), &radio, &p)
            .build()
            .unwrap()
            .run(&mut NoopObserver);
        assert_eq!(summary.termination, Termination::MissionTime);
        assert!(summary.final_time_s >= 30.0);
    }

    #[test]
    fn small_battery_stops_run() {
        let (nodes, radio) = (line_nodes(), radio());
        let p = params(Policy::RoundRobin, true, 1e6);
        let summary = SimBuilder::new(&nodes, uav(10.0, 0.5), &radio, &p)
            .build()
            .unwrap()
            .run(&mut NoopObserver);
        assert_eq!(summary.termination, Termination::BatteryExhausted);
        assert!(summary.final_energy_wh >= 0.5);
    }

    #[test]
    fn greedy_round_robin_visits_in_index_order() {
        let (nodes, radio) = (line_nodes(), radio());
        let p = params(Policy::RoundRobin, true, 20.0);
        let summary = SimBuilder::new(&nodes, uav(10.0, 1e6), &radio, &p)
            .build()
            .unwrap()
            .run(&mut NoopObserver);
        assert!(summary.visited_nodes.len() >= 4);
        assert_eq!(&summary.visited_nodes[..4], &[0, 1, 2, 0]);
    }

    #[test]
    fn served_node_aoi_resets_when_covered() {
        let (nodes, radio) = (line_nodes(), radio());
        let p = params(Policy::RoundRobin, true, 600.0);
        let mut sim = SimBuilder::new(&nodes, uav(10.0, 50.0), &radio, &p).build().unwrap();
        let Step::Visited(record) = sim.step() else { panic!("expected a visit") };
        assert_eq!(record.served_node, 0);
        assert_eq!(sim.aoi().values()[0], 0.0);
        assert!(sim.aoi().values()[1] > 0.0);
    }

    #[test]
    fn failed_link_keeps_aoi_accumulating() {
        let nodes = line_nodes();
        let radio = Radio {
            comm_radius_m:        -1.0,
            snr_threshold_linear: f64::INFINITY,
            ..radio()
        };
        let p = params(Policy::RoundRobin, true, 600.0);
        let mut sim = SimBuilder::new(&nodes, uav(10.0, 50.0), &radio, &p).build().unwrap();
        let mut last_max = 0.0;
        for _ in 0..5 {
            let Step::Visited(record) = sim.step() else { panic!("expected a visit") };
            assert!(sim.aoi().values()[record.served_node] > 0.0);
            assert!(record.aoi_max > last_max);
            last_max = record.aoi_max;
        }
    }

    #[test]
    fn zero_hover_cap_skips_hover_and_transmit_energy() {
        let (nodes, radio) = (line_nodes(), radio());
        let mut p = params(Policy::RoundRobin, true, 60.0);
        p.hover_cap_s = Some(0.0);
        let mut obs = MemoryObserver::default();
        SimBuilder::new(&nodes, uav(10.0, 50.0), &radio, &p)
            .aerodynamics(zeng_spec())
            .build()
            .unwrap()
            .run(&mut obs);
        assert!(!obs.records.is_empty());
        for r in &obs.records {
            assert_eq!(r.hover_wh, 0.0);
            assert_eq!(r.tx_wh, 0.0);
            assert!((r.energy_wh - r.fly_wh).abs() < 1e-12);
        }
    }

    #[test]
    fn aerodynamic_subtotals_sum_to_total() {
        let (nodes, radio) = (random_nodes(6, 11), radio());
        let p = params(Policy::AgeWeightedNearest, true, 300.0);
        let mut obs = MemoryObserver::default();
        SimBuilder::new(&nodes, uav(10.0, 50.0), &radio, &p)
            .aerodynamics(zeng_spec())
            .build()
            .unwrap()
            .run(&mut obs);
        assert_eq!(obs.schema, Some(crate::LogSchema::Aerodynamic));
        for r in &obs.records {
            assert!((r.fly_wh + r.hover_wh + r.tx_wh - r.energy_wh).abs() < 1e-9);
        }
    }

    #[test]
    fn battery_exhausted_during_hover_skips_credit_and_record() {
        let nodes = vec![Node::new(NodeId(0), 10.0, 0.0)];
        let radio = radio();
        let mut p = params(Policy::RoundRobin, true, 1e6);
        // ~141 s of upload: the hover alone costs ~3 Wh, the 1 s flight ~0.03 Wh.
        p.payload_bits = 10_000_000_000;
        let mut sim = SimBuilder::new(&nodes, uav(10.0, 1.0), &radio, &p).build().unwrap();
        let mut obs = MemoryObserver::default();
        let summary = sim.run(&mut obs);

        assert_eq!(summary.termination, Termination::BatteryExhausted);
        assert_eq!(sim.termination(), Some(Termination::BatteryExhausted));
        assert!(obs.records.is_empty());
        assert_eq!(summary.cycles, 0);
        assert_eq!(sim.uav().position(), Point2::new(10.0, 0.0));
        assert_eq!(summary.visited_nodes, vec![0]);
        assert!(sim.aoi().values()[0] > 0.0);
        assert!(sim.energy().fly_wh() < 1.0);
        assert!(sim.energy().total_wh() >= 1.0);
    }

    #[test]
    fn partial_hover_cap_limits_hover_and_transmit() {
        let nodes = vec![Node::new(NodeId(0), 10.0, 0.0)];
        let radio = radio();
        let mut p = params(Policy::RoundRobin, true, 600.0);
        let rate = uav_channel::achievable_rate_bps(2.0, 0.0, &radio);
        let t_tx = p.payload_bits as f64 / rate;
        let cap = t_tx / 2.0;
        p.hover_cap_s = Some(cap);

        let mut sim = SimBuilder::new(&nodes, uav(10.0, 50.0), &radio, &p).build().unwrap();
        let Step::Visited(record) = sim.step() else { panic!("expected a visit") };

        assert!(cap > 0.0 && cap < t_tx);
        assert!((record.time_s - (1.0 + cap)).abs() < 1e-12);
        assert_eq!(record.tx_wh, sim.model().transmit_wh(cap));
        assert_eq!(record.hover_wh, sim.model().hover_wh(cap));
        assert_eq!(sim.energy().tx_wh(), record.tx_wh);
    }

    #[test]
    fn node_under_uav_does_not_stop_round_robin() {
        let nodes = vec![Node::new(NodeId(0), 0.0, 0.0), Node::new(NodeId(1), 100.0, 0.0)];
        let radio = radio();
        let mut p = params(Policy::RoundRobin, true, 600.0);
        p.payload_bits = 0;
        let summary = SimBuilder::new(&nodes, uav(10.0, 50.0), &radio, &p)
            .build()
            .unwrap()
            .run(&mut NoopObserver);

        assert_eq!(summary.termination, Termination::MissionTime);
        assert_eq!(&summary.visited_nodes[..3], &[0, 1, 0]);
        assert!(summary.final_time_s >= 600.0);
    }

    #[test]
    fn colocated_nodes_do_not_stop_round_robin() {
        let nodes = vec![
            Node::new(NodeId(0), 50.0, 0.0),
            Node::new(NodeId(1), 50.0, 0.0),
            Node::new(NodeId(2), 150.0, 0.0),
        ];
        let radio = radio();
        let mut p = params(Policy::RoundRobin, true, 600.0);
        p.hover_cap_s = Some(0.0);
        let summary = SimBuilder::new(&nodes, uav(10.0, 50.0), &radio, &p)
            .build()
            .unwrap()
            .run(&mut NoopObserver);

        assert_eq!(summary.termination, Termination::MissionTime);
        assert!(summary.visited_nodes.contains(&2));
    }

    #[test]
    fn repeated_zero_progress_cycles_stall() {
        let nodes = vec![Node::new(NodeId(0), 0.0, 0.0)];
        let radio = radio();
        let mut p = params(Policy::RoundRobin, true, 600.0);
        p.payload_bits = 0;
        let mut sim = SimBuilder::new(&nodes, uav(10.0, 50.0), &radio, &p).build().unwrap();

        assert!(matches!(sim.step(), Step::Visited(_)));
        assert_eq!(sim.termination(), None);
        assert!(matches!(sim.step(), Step::Visited(_)));
        assert_eq!(sim.step(), Step::Finished(Termination::Stalled));
        assert_eq!(sim.step(), Step::Finished(Termination::Stalled));
        assert_eq!(sim.summary(Termination::Stalled).cycles, 2);
    }
}
