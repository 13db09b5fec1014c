//! Coordinate and bounds variables.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;

use crate::coordinate::CoordinateValue;
use crate::error::BoundsResult;
use crate::inference::build_bounds;
use crate::interval::{bounds_to_interval, interval_labels, interval_to_bounds, Interval};
use crate::types::{BoundsArray, ClosurePolicy, LabelPolicy};

/// CF attribute linking a coordinate to its bounds variable.
pub const BOUNDS_ATTR: &str = "bounds";
/// Attribute recording the closure of a bounds variable.
pub const CLOSED_ATTR: &str = "closed";
/// CF axis attribute (`T`, `X`, `Y`, `Z`).
pub const AXIS_ATTR: &str = "axis";
/// CF standard name attribute.
pub const STANDARD_NAME_ATTR: &str = "standard_name";

/// String attributes of a variable, sorted by name.
pub type Attributes = BTreeMap<String, String>;

/// Values of a 1-D coordinate variable.
#[derive(Clone, Debug, PartialEq)]
pub enum CoordinateData {
    /// Floating point values
    Float(Vec<f64>),
    /// Integer values
    Integer(Vec<i64>),
    /// Timestamps without a time zone
    Time(Vec<NaiveDateTime>),
    /// Timestamps in an IANA time zone
    ZonedTime(Vec<DateTime<Tz>>),
}

impl CoordinateData {
    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            CoordinateData::Float(v) => v.len(),
            CoordinateData::Integer(v) => v.len(),
            CoordinateData::Time(v) => v.len(),
            CoordinateData::ZonedTime(v) => v.len(),
        }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the value kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CoordinateData::Float(_) => "float",
            CoordinateData::Integer(_) => "integer",
            CoordinateData::Time(_) => "time",
            CoordinateData::ZonedTime(_) => "zoned time",
        }
    }

    /// Infer bounds of the matching kind, with the closure on the sorted edges.
    ///
    /// # Errors
    /// Any error of [`build_bounds`].
    pub fn infer_bounds(&self, label: LabelPolicy, closed: ClosurePolicy) -> BoundsResult<(BoundsData, ClosurePolicy)> {
        let inferred = match self {
            CoordinateData::Float(v) => {
                let (bounds, closed) = build_bounds(v, label, closed)?.into_parts();
                (BoundsData::Float(bounds), closed)
            }
            CoordinateData::Integer(v) => {
                let (bounds, closed) = build_bounds(v, label, closed)?.into_parts();
                (BoundsData::Integer(bounds), closed)
            }
            CoordinateData::Time(v) => {
                let (bounds, closed) = build_bounds(v, label, closed)?.into_parts();
                (BoundsData::Time(bounds), closed)
            }
            CoordinateData::ZonedTime(v) => {
                let (bounds, closed) = build_bounds(v, label, closed)?.into_parts();
                (BoundsData::ZonedTime(bounds), closed)
            }
        };
        Ok(inferred)
    }
}

/// Edges of a bounds variable, one kind per coordinate kind.
#[derive(Clone, Debug, PartialEq)]
pub enum BoundsData {
    Float(BoundsArray<f64>),
    Integer(BoundsArray<i64>),
    Time(BoundsArray<NaiveDateTime>),
    ZonedTime(BoundsArray<DateTime<Tz>>),
}

impl BoundsData {
    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            BoundsData::Float(b) => b.len(),
            BoundsData::Integer(b) => b.len(),
            BoundsData::Time(b) => b.len(),
            BoundsData::ZonedTime(b) => b.len(),
        }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the value kind, matching [`CoordinateData::kind`].
    pub fn kind(&self) -> &'static str {
        match self {
            BoundsData::Float(_) => "float",
            BoundsData::Integer(_) => "integer",
            BoundsData::Time(_) => "time",
            BoundsData::ZonedTime(_) => "zoned time",
        }
    }

    /// Check `lower <= upper` on every row.
    ///
    /// # Errors
    /// - `InvalidBounds` naming the first offending row
    pub fn validate(&self) -> BoundsResult<()> {
        match self {
            BoundsData::Float(b) => b.validate(),
            BoundsData::Integer(b) => b.validate(),
            BoundsData::Time(b) => b.validate(),
            BoundsData::ZonedTime(b) => b.validate(),
        }
    }

    /// Interpret rows as intervals with the given closure.
    ///
    /// # Errors
    /// - `InvalidBounds` if a row is inverted
    pub fn to_intervals(&self, closed: ClosurePolicy) -> BoundsResult<IntervalData> {
        let data = match self {
            BoundsData::Float(b) => IntervalData::Float(bounds_to_interval(b, closed)?),
            BoundsData::Integer(b) => IntervalData::Integer(bounds_to_interval(b, closed)?),
            BoundsData::Time(b) => IntervalData::Time(bounds_to_interval(b, closed)?),
            BoundsData::ZonedTime(b) => IntervalData::ZonedTime(bounds_to_interval(b, closed)?),
        };
        Ok(data)
    }
}

/// Intervals of a bounds variable.
#[derive(Clone, Debug, PartialEq)]
pub enum IntervalData {
    Float(Vec<Interval<f64>>),
    Integer(Vec<Interval<i64>>),
    Time(Vec<Interval<NaiveDateTime>>),
    ZonedTime(Vec<Interval<DateTime<Tz>>>),
}

impl IntervalData {
    /// Number of intervals.
    pub fn len(&self) -> usize {
        match self {
            IntervalData::Float(v) => v.len(),
            IntervalData::Integer(v) => v.len(),
            IntervalData::Time(v) => v.len(),
            IntervalData::ZonedTime(v) => v.len(),
        }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Split into labelling coordinate values, bounds and their shared closure.
    ///
    /// Without a label, the coordinate labels the closed side (`Right` -> `End`,
    /// otherwise `Start`).
    ///
    /// # Errors
    /// - `EmptyIntervals` / `InconsistentClosure` from [`interval_to_bounds`]
    /// - `InvalidBounds` if an interval is inverted
    /// - Any error of [`interval_labels`]
    pub fn split(&self, label: Option<LabelPolicy>) -> BoundsResult<(CoordinateData, BoundsData, ClosurePolicy)> {
        let split = match self {
            IntervalData::Float(v) => {
                let (values, bounds, closed) = split_intervals(v, label)?;
                (CoordinateData::Float(values), BoundsData::Float(bounds), closed)
            }
            IntervalData::Integer(v) => {
                let (values, bounds, closed) = split_intervals(v, label)?;
                (CoordinateData::Integer(values), BoundsData::Integer(bounds), closed)
            }
            IntervalData::Time(v) => {
                let (values, bounds, closed) = split_intervals(v, label)?;
                (CoordinateData::Time(values), BoundsData::Time(bounds), closed)
            }
            IntervalData::ZonedTime(v) => {
                let (values, bounds, closed) = split_intervals(v, label)?;
                (CoordinateData::ZonedTime(values), BoundsData::ZonedTime(bounds), closed)
            }
        };
        Ok(split)
    }
}

fn split_intervals<T: CoordinateValue>(
    intervals: &[Interval<T>],
    label: Option<LabelPolicy>,
) -> BoundsResult<(Vec<T>, BoundsArray<T>, ClosurePolicy)> {
    let (bounds, closed) = interval_to_bounds(intervals)?;
    bounds.validate()?;
    let label = label.unwrap_or_else(|| LabelPolicy::implied_by(closed));
    let values = interval_labels(intervals, label)?;
    Ok((values, bounds, closed))
}

/// A named 1-D coordinate variable along its own dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinate {
    /// Values along the dimension
    pub data: CoordinateData,
    /// CF attributes
    pub attrs: Attributes,
}

impl Coordinate {
    /// Create a coordinate without attributes.
    pub fn new(data: CoordinateData) -> Self {
        Self {
            data,
            attrs: Attributes::new(),
        }
    }

    /// Set an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Look up an attribute.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A 2-D `(dim, bounds_dim)` bounds variable.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundsVariable {
    /// Dimension (and coordinate) the bounds belong to
    pub dim: String,
    /// Trailing dimension of size 2
    pub bounds_dim: String,
    /// Cell edges
    pub data: BoundsData,
    /// Attributes, including `closed`
    pub attrs: Attributes,
}

impl BoundsVariable {
    /// Create a bounds variable with its `closed` attribute set.
    pub fn new(
        dim: impl Into<String>,
        bounds_dim: impl Into<String>,
        data: BoundsData,
        closed: ClosurePolicy,
    ) -> Self {
        let mut attrs = Attributes::new();
        attrs.insert(CLOSED_ATTR.to_string(), closed.as_str().to_string());
        Self {
            dim: dim.into(),
            bounds_dim: bounds_dim.into(),
            data,
            attrs,
        }
    }

    /// Closure from the `closed` attribute, `Left` when absent.
    ///
    /// # Errors
    /// - `UnknownPolicy` if the attribute holds an unknown value
    pub fn closed(&self) -> BoundsResult<ClosurePolicy> {
        match self.attrs.get(CLOSED_ATTR) {
            Some(value) => value.parse(),
            None => Ok(ClosurePolicy::Left),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Rows as intervals using the recorded closure.
    ///
    /// # Errors
    /// - `UnknownPolicy` for an unreadable `closed` attribute
    /// - `InvalidBounds` if a row is inverted
    pub fn to_intervals(&self) -> BoundsResult<IntervalData> {
        self.data.to_intervals(self.closed()?)
    }
}
