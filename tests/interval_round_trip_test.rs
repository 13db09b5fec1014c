//! Property tests for the bounds <-> interval round trip.
//!
//! Any valid bounds array with any closure converts to intervals and back
//! without changing an edge, and the reverse composition holds for any
//! interval sequence with a uniform closure.

use cf_bounds::{bounds_to_interval, interval_to_bounds, BoundsArray, ClosurePolicy, Interval};
use proptest::prelude::*;

fn arb_closure() -> impl Strategy<Value = ClosurePolicy> {
    prop::sample::select(ClosurePolicy::ALL.to_vec())
}

fn arb_float_bounds() -> impl Strategy<Value = BoundsArray<f64>> {
    prop::collection::vec((-1.0e9..1.0e9f64, 0.0..1.0e6f64), 1..64)
        .prop_map(|rows| BoundsArray::from_pairs(rows.into_iter().map(|(lower, width)| (lower, lower + width))))
}

fn arb_integer_bounds() -> impl Strategy<Value = BoundsArray<i64>> {
    prop::collection::vec((-1_000_000_000..1_000_000_000i64, 0..1_000_000i64), 1..64)
        .prop_map(|rows| BoundsArray::from_pairs(rows.into_iter().map(|(lower, width)| (lower, lower + width))))
}

proptest! {
    #[test]
    fn test_float_bounds_round_trip(bounds in arb_float_bounds(), closed in arb_closure()) {
        let intervals = bounds_to_interval(&bounds, closed).unwrap();
        prop_assert_eq!(intervals.len(), bounds.len());
        prop_assert_eq!(interval_to_bounds(&intervals).unwrap(), (bounds, closed));
    }

    #[test]
    fn test_integer_bounds_round_trip(bounds in arb_integer_bounds(), closed in arb_closure()) {
        let intervals = bounds_to_interval(&bounds, closed).unwrap();
        prop_assert_eq!(interval_to_bounds(&intervals).unwrap(), (bounds, closed));
    }

    #[test]
    fn test_intervals_round_trip(bounds in arb_float_bounds(), closed in arb_closure()) {
        let intervals: Vec<Interval<f64>> = bounds
            .iter()
            .map(|row| Interval::new(row.lower, row.upper, closed))
            .collect();
        let (restored, restored_closed) = interval_to_bounds(&intervals).unwrap();
        prop_assert_eq!(bounds_to_interval(&restored, restored_closed).unwrap(), intervals);
    }
}
