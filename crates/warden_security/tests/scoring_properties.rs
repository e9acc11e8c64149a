//! Property tests for violation scoring and action lookup.

use proptest::prelude::*;
use warden_security::{Action, ActionList, ActionStep, CheckType, ViolationLevel};

proptest! {
    #[test]
    fn zero_stream_only_decays(start in 0.0f64..10_000.0, decay in 0.5f64..0.99) {
        let mut level = ViolationLevel { vl: start, last_violation_ms: None };
        let mut previous = level.vl;
        for _ in 0..50 {
            level.record(decay, 0.0);
            prop_assert!(level.vl <= previous);
            prop_assert!(level.vl >= 0.0);
            previous = level.vl;
        }
    }

    #[test]
    fn constant_stream_converges(magnitude in 0.1f64..100.0, decay in 0.5f64..0.95) {
        let mut level = ViolationLevel::default();
        for _ in 0..1_000 {
            level.record(decay, magnitude);
        }
        let limit = magnitude / (1.0 - decay);
        prop_assert!((level.vl - limit).abs() < limit * 1e-9);
    }

    #[test]
    fn matching_step_is_highest_at_or_below(
        thresholds in prop::collection::btree_set(0u32..1_000, 1..8),
        vl in 0.0f64..1_200.0,
    ) {
        let steps: Vec<_> = thresholds
            .into_iter()
            .map(|t| ActionStep::new(f64::from(t), vec![Action::Cancel]))
            .collect();
        let expected = steps.iter().rev().find(|s| s.threshold <= vl).map(|s| s.threshold);
        let list = ActionList::new(CheckType::WaterWalk, steps).unwrap();

        prop_assert_eq!(list.matching(vl).map(|s| s.threshold), expected);
    }
}
