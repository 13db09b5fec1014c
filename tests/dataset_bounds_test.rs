//! Integration tests for the dataset shell.
//!
//! Builds small CF-style grids, infers and assigns bounds, and reads them back
//! as intervals.

use approx::assert_relative_eq;
use chrono::{NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Europe::Oslo;
use cf_bounds::dataset::{
    BoundsData, Coordinate, CoordinateData, IntervalData, AXIS_ATTR, BOUNDS_ATTR, CLOSED_ATTR,
    STANDARD_NAME_ATTR,
};
use cf_bounds::{BoundsArray, BoundsError, BoundsOptions, ClosurePolicy, Dataset, LabelPolicy};

fn daily(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 1, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// A daily time axis over a small lat/lon grid.
fn grid() -> Dataset {
    Dataset::new()
        .with_coord(
            "time",
            Coordinate::new(CoordinateData::Time((1..=5).map(daily).collect()))
                .with_attr(AXIS_ATTR, "T")
                .with_attr(STANDARD_NAME_ATTR, "time"),
        )
        .with_coord(
            "lat",
            Coordinate::new(CoordinateData::Float(vec![61.5, 61.0, 60.5, 60.0]))
                .with_attr(AXIS_ATTR, "Y")
                .with_attr(STANDARD_NAME_ATTR, "latitude"),
        )
        .with_coord(
            "lon",
            Coordinate::new(CoordinateData::Float(vec![4.5, 5.0, 5.5]))
                .with_attr(AXIS_ATTR, "X")
                .with_attr(STANDARD_NAME_ATTR, "longitude"),
        )
}

#[test]
fn test_infer_all_axes() {
    let ds = grid().infer_bounds(&[], &BoundsOptions::default()).unwrap();

    let view = ds.bounds();
    assert_eq!(view.dims(), vec!["lat", "lon", "time"]);
    assert_eq!(view.len(), 3);
    for (dim, var) in view.iter() {
        assert_eq!(var.dim, dim);
        assert_eq!(var.len(), ds.coord(dim).unwrap().len());
        // Latitude runs north to south, so its closed side is swapped
        let expected = if dim == "lat" { "right" } else { "left" };
        assert_eq!(var.attrs.get(CLOSED_ATTR).map(String::as_str), Some(expected));
        assert_eq!(
            ds.coord(dim).unwrap().attr(BOUNDS_ATTR),
            Some(format!("{}_bnds", dim).as_str())
        );
    }
}

#[test]
fn test_right_closed_time_axis_labels_cell_end() {
    let options = BoundsOptions::default().with_closed(ClosurePolicy::Right);
    let ds = grid().infer_bounds(&["T"], &options).unwrap();

    match &ds.bounds().get("time").unwrap().data {
        BoundsData::Time(b) => {
            assert_eq!(b[0].as_tuple(), (&NaiveDate::from_ymd_opt(2022, 12, 31).unwrap().and_hms_opt(0, 0, 0).unwrap(), &daily(1)));
            assert_eq!(b[4].upper, daily(5));
        }
        other => panic!("expected time bounds, got {:?}", other),
    }

    match ds.intervals("time").unwrap() {
        IntervalData::Time(intervals) => {
            assert_eq!(intervals[0].closed, ClosurePolicy::Right);
            assert!(intervals[0].contains(&daily(1)));
            assert!(!intervals[1].contains(&daily(1)));
        }
        other => panic!("expected time intervals, got {:?}", other),
    }
}

#[test]
fn test_decreasing_latitude_by_standard_name() {
    let options = BoundsOptions::default().with_label(LabelPolicy::Middle);
    let ds = grid().infer_bounds(&["latitude"], &options).unwrap();

    match &ds.bounds().get("lat").unwrap().data {
        BoundsData::Float(b) => {
            assert_relative_eq!(b[0].lower, 61.25);
            assert_relative_eq!(b[0].upper, 61.75);
            assert_relative_eq!(b[3].lower, 59.75);
        }
        other => panic!("expected float bounds, got {:?}", other),
    }
    match ds.intervals("Y").unwrap() {
        IntervalData::Float(intervals) => {
            assert_eq!(intervals[0].closed, ClosurePolicy::Right);
            assert!(intervals.iter().zip([61.5, 61.0, 60.5, 60.0]).all(|(iv, v)| iv.contains(&v)));
        }
        other => panic!("expected float intervals, got {:?}", other),
    }
}

#[test]
fn test_assign_bounds_of_wrong_kind() {
    let rows = (1..=3).map(|d| (daily(d), daily(d + 1)));
    let err = grid()
        .assign_bounds("lon", BoundsData::Time(BoundsArray::from_pairs(rows)), ClosurePolicy::Left, &BoundsOptions::default())
        .unwrap_err();
    assert!(matches!(err, BoundsError::KindMismatch { coordinate: "float", bounds: "time", .. }));
}

#[test]
fn test_coordinate_from_intervals() {
    let inferred = grid().infer_bounds(&["T"], &BoundsOptions::default().with_closed(ClosurePolicy::Right)).unwrap();
    let intervals = inferred.intervals("time").unwrap();

    // Rebuild the time axis on a fresh dataset from its intervals alone
    let rebuilt = Dataset::new()
        .with_intervals("time", &intervals, &BoundsOptions::default())
        .unwrap();
    assert_eq!(rebuilt.coord("time").unwrap().data, inferred.coord("time").unwrap().data);
    assert_eq!(rebuilt.bounds().get("time").unwrap().data, inferred.bounds().get("time").unwrap().data);
    assert_eq!(rebuilt.bounds().get("time").unwrap().closed().unwrap(), ClosurePolicy::Right);
}

#[test]
fn test_unknown_and_duplicate_keys() {
    let ds = grid();
    assert_eq!(
        ds.infer_bounds(&["Z"], &BoundsOptions::default()),
        Err(BoundsError::UnknownKey("Z".into()))
    );

    // "Y" and "lat" name the same coordinate
    let ds = ds.infer_bounds(&["Y", "lat"], &BoundsOptions::default()).unwrap();
    assert_eq!(ds.bounds().dims(), vec!["lat"]);
    assert!(matches!(
        ds.infer_bounds(&["lat"], &BoundsOptions::default()),
        Err(BoundsError::BoundsAlreadyExist(_))
    ));

    // Remaining axes only
    let ds = ds.infer_bounds(&[], &BoundsOptions::default()).unwrap();
    assert_eq!(ds.bounds().len(), 3);
}

#[test]
fn test_zoned_axis_across_dst_fails_without_partial_result() {
    // Europe/Oslo springs forward at 02:00 on 2023-03-26
    let hours: Vec<_> = [0, 1, 3]
        .iter()
        .map(|&h| {
            Oslo.from_local_datetime(&NaiveDate::from_ymd_opt(2023, 3, 26).unwrap().and_hms_opt(h, 30, 0).unwrap())
                .unwrap()
        })
        .collect();
    let ds = grid().with_coord(
        "valid_time",
        Coordinate::new(CoordinateData::ZonedTime(hours)).with_attr(AXIS_ATTR, "T"),
    );

    let options = BoundsOptions::default().with_label(LabelPolicy::Middle);
    let err = ds.infer_bounds(&["valid_time"], &options).unwrap_err();
    assert!(err.is_ambiguous_offset());
    assert!(ds.bounds().is_empty());
}

#[test]
fn test_assign_bounds() {
    let ds = grid();
    let lon_bounds = BoundsArray::from_pairs(vec![(4.0, 4.75), (4.75, 5.25), (5.25, 6.0)]);
    let ds = ds
        .assign_bounds("X", BoundsData::Float(lon_bounds.clone()), ClosurePolicy::Both, &BoundsOptions::default())
        .unwrap();

    let var = ds.bounds().get("lon").unwrap();
    assert_eq!(var.closed().unwrap(), ClosurePolicy::Both);
    assert_eq!(var.data, BoundsData::Float(lon_bounds));

    let inverted = BoundsArray::from_pairs(vec![(4.0, 4.75), (5.25, 4.75), (5.25, 6.0)]);
    assert!(matches!(
        ds.assign_bounds("lon", BoundsData::Float(inverted), ClosurePolicy::Left, &BoundsOptions::default()),
        Err(BoundsError::InvalidBounds { row: 1, .. })
    ));
}
