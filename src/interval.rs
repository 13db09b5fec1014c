//! Conversion between bounds arrays and interval sequences.
//!
//! A bounds array and a sequence of [`Interval`]s carry the same edges: row
//! `i` maps to interval `i` with `left = lower` and `right = upper`. Closure is
//! one policy for the whole sequence, so converting intervals back to bounds
//! requires every interval to share it.
//!
//! # Example
//!
//! ```
//! use cf_bounds::{bounds_to_interval, interval_to_bounds};
//! use cf_bounds::types::{BoundsArray, ClosurePolicy};
//!
//! let bounds = BoundsArray::from_pairs(vec![(0.0, 1.0), (1.0, 2.0)]);
//! let intervals = bounds_to_interval(&bounds, ClosurePolicy::Right).unwrap();
//! assert!(intervals[0].contains(&1.0));
//!
//! let (restored, closed) = interval_to_bounds(&intervals).unwrap();
//! assert_eq!(restored, bounds);
//! assert_eq!(closed, ClosurePolicy::Right);
//! ```

use std::fmt;

use crate::coordinate::{CoordinateStep, CoordinateValue};
use crate::error::{BoundsError, BoundsResult};
use crate::types::{BoundsArray, CellBounds, ClosurePolicy, LabelPolicy};

/// A cell interval with explicit closure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    /// Left (lower) edge
    pub left: T,
    /// Right (upper) edge
    pub right: T,
    /// Which edges are inclusive
    pub closed: ClosurePolicy,
}

impl<T> Interval<T> {
    /// Create a new interval.
    pub fn new(left: T, right: T, closed: ClosurePolicy) -> Self {
        Self {
            left,
            right,
            closed,
        }
    }

    /// Edges as cell bounds, dropping the closure.
    pub fn into_cell(self) -> CellBounds<T> {
        CellBounds::new(self.left, self.right)
    }
}

impl<T: PartialOrd> Interval<T> {
    /// Check if a value lies in the interval.
    pub fn contains(&self, value: &T) -> bool {
        let above = if self.closed.closed_left() {
            *value >= self.left
        } else {
            *value > self.left
        };
        let below = if self.closed.closed_right() {
            *value <= self.right
        } else {
            *value < self.right
        };
        above && below
    }

    /// Check if the interval contains no points.
    pub fn is_empty(&self) -> bool {
        match self.left.partial_cmp(&self.right) {
            Some(std::cmp::Ordering::Less) => false,
            Some(std::cmp::Ordering::Equal) => self.closed != ClosurePolicy::Both,
            _ => true,
        }
    }

    /// Check if two intervals share at least one point.
    pub fn overlaps(&self, other: &Self) -> bool {
        let left_ok = if self.closed.closed_left() && other.closed.closed_right() {
            self.left <= other.right
        } else {
            self.left < other.right
        };
        let right_ok = if other.closed.closed_left() && self.closed.closed_right() {
            other.left <= self.right
        } else {
            other.left < self.right
        };
        left_ok && right_ok
    }
}

impl Interval<f64> {
    /// Interval length (right - left).
    #[inline]
    pub fn length(&self) -> f64 {
        self.right - self.left
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.closed.closed_left() { '[' } else { '(' };
        let close = if self.closed.closed_right() { ']' } else { ')' };
        write!(f, "{}{}, {}{}", open, self.left, self.right, close)
    }
}

/// Convert bounds rows into intervals with a uniform closure.
///
/// # Errors
/// - `InvalidBounds` if any row has `lower > upper`
pub fn bounds_to_interval<T>(bounds: &BoundsArray<T>, closed: ClosurePolicy) -> BoundsResult<Vec<Interval<T>>>
where
    T: PartialOrd + Clone + fmt::Debug,
{
    bounds.validate()?;
    Ok(bounds
        .iter()
        .map(|row| Interval::new(row.lower.clone(), row.upper.clone(), closed))
        .collect())
}

/// Convert intervals back into a bounds array and their shared closure.
///
/// Edges are copied unchanged.
///
/// # Errors
/// - `EmptyIntervals` if `intervals` is empty
/// - `InconsistentClosure` naming the first interval whose closure differs
pub fn interval_to_bounds<T: Clone>(intervals: &[Interval<T>]) -> BoundsResult<(BoundsArray<T>, ClosurePolicy)> {
    let first = intervals.first().ok_or(BoundsError::EmptyIntervals)?;
    let expected = first.closed;

    if let Some(index) = intervals.iter().position(|iv| iv.closed != expected) {
        return Err(BoundsError::InconsistentClosure {
            index,
            expected,
            found: intervals[index].closed,
        });
    }

    let bounds: BoundsArray<T> = intervals
        .iter()
        .map(|iv| CellBounds::new(iv.left.clone(), iv.right.clone()))
        .collect();
    Ok((bounds, expected))
}

/// Coordinate values labelling each interval.
///
/// `Start` takes the left edge, `End` the right edge and `Middle` the point
/// half way between, computed with the same calendar-safe arithmetic as
/// inference.
///
/// # Errors
/// - `InexactHalfStep` if a midpoint is not representable
/// - `AmbiguousOffset` if a calendar midpoint falls across a DST transition
pub fn interval_labels<T: CoordinateValue>(intervals: &[Interval<T>], label: LabelPolicy) -> BoundsResult<Vec<T>> {
    intervals
        .iter()
        .map(|iv| match label {
            LabelPolicy::Start => Ok(iv.left.clone()),
            LabelPolicy::End => Ok(iv.right.clone()),
            LabelPolicy::Middle => {
                let half = iv.left.step_to(&iv.right)?.half()?;
                iv.left.offset_by(&half)
            }
        })
        .collect()
}
