//! Bounds construction for regularly spaced coordinates.

use tracing::debug;

use crate::coordinate::CoordinateValue;
use crate::error::BoundsResult;
use crate::inference::{analyze, compute_offset};
use crate::interval::{bounds_to_interval, Interval};
use crate::types::{BoundsArray, ClosurePolicy, Direction, LabelPolicy};

/// Bounds inferred from a coordinate, with the policies that produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct InferredBounds<T: CoordinateValue> {
    /// One row per coordinate value, in input order
    pub bounds: BoundsArray<T>,
    /// Label policy used to place the edges
    pub label: LabelPolicy,
    /// Closure on the sorted edges, used to interpret rows as intervals
    pub closed: ClosurePolicy,
    /// Traversal direction of the source coordinate
    pub direction: Direction,
    /// Signed step of the source coordinate
    pub step: T::Step,
}

impl<T: CoordinateValue> InferredBounds<T> {
    /// Number of cells.
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Check if empty. Never true for bounds returned by [`build_bounds`].
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Interpret the rows as intervals with the recorded closure.
    ///
    /// # Errors
    /// - `InvalidBounds` if a row was modified to be inverted
    pub fn to_intervals(&self) -> BoundsResult<Vec<Interval<T>>> {
        bounds_to_interval(&self.bounds, self.closed)
    }

    /// Split into the bounds array and its closure.
    pub fn into_parts(self) -> (BoundsArray<T>, ClosurePolicy) {
        (self.bounds, self.closed)
    }
}

/// Build cell bounds for a monotonic, regularly spaced coordinate.
///
/// Row `i` holds the edges of the cell labelled by `coords[i]`, with
/// `lower <= upper` whatever the traversal direction. `closed` does not move
/// any edge. Like `label`, it is taken relative to traversal order: on a
/// decreasing coordinate `Left` and `Right` swap, and the swapped value is
/// recorded in [`InferredBounds::closed`].
///
/// # Errors
/// - `EmptyCoordinate` / `TooFewValues` for fewer than two values
/// - `NonMonotonicCoordinate` if values are not strictly ordered
/// - `IrregularSpacing` if steps differ
/// - `InexactHalfStep` if `Middle` needs a half step that cannot be represented
/// - `AmbiguousOffset` if a calendar edge falls across a DST transition
/// - `OffsetOverflow` if the step or an edge cannot be represented
///
/// # Example
///
/// ```
/// use cf_bounds::build_bounds;
/// use cf_bounds::types::{ClosurePolicy, LabelPolicy};
///
/// let inferred = build_bounds(&[0.0, 1.0, 2.0], LabelPolicy::Middle, ClosurePolicy::Left).unwrap();
/// assert_eq!(inferred.bounds.to_pairs(), vec![[-0.5, 0.5], [0.5, 1.5], [1.5, 2.5]]);
/// ```
pub fn build_bounds<T: CoordinateValue>(
    coords: &[T],
    label: LabelPolicy,
    closed: ClosurePolicy,
) -> BoundsResult<InferredBounds<T>> {
    let report = analyze(coords)?;
    let (step, direction) = report.require_regular()?;
    let offsets = compute_offset(step, label)?;
    let closed = closed.oriented(direction);

    let bounds = coords
        .iter()
        .map(|value| offsets.apply(value))
        .collect::<BoundsResult<BoundsArray<T>>>()?;

    debug!(
        n = coords.len(),
        ?direction,
        ?step,
        %label,
        %closed,
        "inferred cell bounds"
    );

    Ok(InferredBounds {
        bounds,
        label,
        closed,
        direction,
        step: step.clone(),
    })
}

/// Build bounds for many independent coordinates in parallel.
///
/// Results are returned in input order; one failing coordinate does not
/// affect the others.
#[cfg(feature = "parallel")]
pub fn build_bounds_par<T>(
    coords: &[Vec<T>],
    label: LabelPolicy,
    closed: ClosurePolicy,
) -> Vec<BoundsResult<InferredBounds<T>>>
where
    T: CoordinateValue + Send + Sync,
    T::Step: Send,
{
    use rayon::prelude::*;

    coords
        .par_iter()
        .map(|c| build_bounds(c, label, closed))
        .collect()
}
