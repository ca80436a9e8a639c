//! Unit tests for uav-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Point2, path_length};

    #[test]
    fn three_four_five() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert!((a.distance_m(b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance_m(b), b.distance_m(a));
    }

    #[test]
    fn zero_distance() {
        let p = Point2::new(12.5, -3.0);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn open_path_length() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        // No closing edge back to the start.
        assert!((path_length(&pts) - 3.0).abs() < 1e-12);
        assert_eq!(path_length(&pts[..1]), 0.0);
        assert_eq!(path_length(&[]), 0.0);
    }
}

#[cfg(test)]
mod aoi {
    use crate::AoiState;

    #[test]
    fn increment_and_reset() {
        let mut aoi = AoiState::zeroed(3);
        aoi.increment_all(5.0);
        assert_eq!(aoi.values(), &[5.0, 5.0, 5.0]);
        aoi.reset(1);
        assert_eq!(aoi.values(), &[5.0, 0.0, 5.0]);
        aoi.increment_all(2.5);
        assert_eq!(aoi.values(), &[7.5, 2.5, 7.5]);
    }

    #[test]
    fn increment_raises_every_entry_by_delta() {
        let mut aoi = AoiState::zeroed(4);
        aoi.increment_all(1.0);
        aoi.reset(2);
        let before = aoi.clone();
        aoi.increment_all(0.75);
        for (b, a) in before.values().iter().zip(aoi.values()) {
            assert_eq!(*a, b + 0.75);
        }
    }

    #[test]
    fn reset_leaves_others_unchanged() {
        let mut aoi = AoiState::zeroed(3);
        aoi.increment_all(4.0);
        aoi.reset(0);
        assert_eq!(aoi.values()[0], 0.0);
        assert_eq!(&aoi.values()[1..], &[4.0, 4.0]);
    }

    #[test]
    fn copies_are_independent() {
        let mut a = AoiState::zeroed(2);
        let b = a.clone();
        a.increment_all(3.0);
        assert_eq!(b.values(), &[0.0, 0.0]);
    }

    #[test]
    fn stats() {
        let mut aoi = AoiState::zeroed(4);
        aoi.increment_all(2.0);
        aoi.reset(3);
        assert!((aoi.mean() - 1.5).abs() < 1e-12);
        assert_eq!(aoi.max(), 2.0);
    }

    #[test]
    fn empty_stats_are_zero() {
        let aoi = AoiState::zeroed(0);
        assert!(aoi.is_empty());
        assert_eq!(aoi.mean(), 0.0);
        assert_eq!(aoi.max(), 0.0);
    }
}

#[cfg(test)]
mod placement {
    use crate::{NodeId, SimRng, place_random};

    #[test]
    fn nodes_inside_field_with_sequential_ids() {
        let mut rng = SimRng::new(7);
        let nodes = place_random(50, (200.0, 100.0), &mut rng).unwrap();
        assert_eq!(nodes.len(), 50);
        for (i, n) in nodes.iter().enumerate() {
            assert_eq!(n.id, NodeId(i as u32));
            assert!((0.0..200.0).contains(&n.pos.x));
            assert!((0.0..100.0).contains(&n.pos.y));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = place_random(20, (500.0, 500.0), &mut SimRng::new(42)).unwrap();
        let b = place_random(20, (500.0, 500.0), &mut SimRng::new(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_different_layout() {
        let a = place_random(20, (500.0, 500.0), &mut SimRng::new(1)).unwrap();
        let b = place_random(20, (500.0, 500.0), &mut SimRng::new(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn zero_nodes_is_empty() {
        let nodes = place_random(0, (10.0, 10.0), &mut SimRng::new(0)).unwrap();
        assert!(nodes.is_empty());
    }

    #[test]
    fn degenerate_field_places_on_axis() {
        let nodes = place_random(3, (0.0, 10.0), &mut SimRng::new(3)).unwrap();
        assert!(nodes.iter().all(|n| n.pos.x == 0.0));
    }

    #[test]
    fn negative_field_rejected() {
        assert!(place_random(3, (-1.0, 10.0), &mut SimRng::new(3)).is_err());
        assert!(place_random(3, (f64::NAN, 10.0), &mut SimRng::new(3)).is_err());
    }
}

#[cfg(test)]
mod uav {
    use crate::{Point2, Uav};

    #[test]
    fn move_to_repositions() {
        let mut uav = Uav {
            pos:        Point2::ORIGIN,
            speed_mps:  10.0,
            battery_wh: 50.0,
            p_move_w:   100.0,
            p_hover_w:  80.0,
            p_tx_w:     1.0,
        };
        uav.move_to(Point2::new(3.0, 4.0));
        assert_eq!(uav.position(), Point2::new(3.0, 4.0));
    }
}
