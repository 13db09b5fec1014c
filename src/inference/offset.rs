//! Edge offsets relative to a coordinate value.
//!
//! For a value `v` with signed step `s`:
//!
//! | label    | lower edge  | upper edge  |
//! |----------|-------------|-------------|
//! | `Start`  | `v`         | `v + s`     |
//! | `Middle` | `v - s / 2` | `v + s / 2` |
//! | `End`    | `v - s`     | `v`         |
//!
//! With a negative step the two edges come out reversed; [`EdgeOffsets::apply`]
//! reorders them.

use crate::coordinate::{CoordinateStep, CoordinateValue};
use crate::error::BoundsResult;
use crate::types::{CellBounds, LabelPolicy};

/// Offsets from a coordinate value to its two cell edges.
///
/// `None` means the edge is the value itself.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeOffsets<S> {
    /// Offset to the edge before the value in traversal order
    pub before: Option<S>,
    /// Offset to the edge after the value in traversal order
    pub after: Option<S>,
}

impl<S: CoordinateStep> EdgeOffsets<S> {
    /// Apply both offsets to `value`, returning ordered cell bounds.
    ///
    /// # Errors
    /// - `AmbiguousOffset` if a calendar offset is not well-defined at `value`
    /// - `OffsetOverflow` if an edge is out of range
    pub fn apply<T>(&self, value: &T) -> BoundsResult<CellBounds<T>>
    where
        T: CoordinateValue<Step = S>,
    {
        let before = shift(value, self.before.as_ref())?;
        let after = shift(value, self.after.as_ref())?;
        Ok(CellBounds::ordered(before, after))
    }
}

fn shift<T: CoordinateValue>(value: &T, offset: Option<&T::Step>) -> BoundsResult<T> {
    match offset {
        Some(offset) => value.offset_by(offset),
        None => Ok(value.clone()),
    }
}

/// Compute edge offsets for a signed step under a label policy.
///
/// # Errors
/// - `InexactHalfStep` if `Middle` needs half of a step that cannot be halved
/// - `OffsetOverflow` if `End` needs a step that cannot be negated
///
/// # Example
///
/// ```
/// use cf_bounds::compute_offset;
/// use cf_bounds::types::{CellBounds, LabelPolicy};
///
/// let offsets = compute_offset(&2.0, LabelPolicy::Middle).unwrap();
/// assert_eq!(offsets.before, Some(-1.0));
/// assert_eq!(offsets.after, Some(1.0));
/// assert_eq!(offsets.apply(&10.0).unwrap(), CellBounds::new(9.0, 11.0));
/// ```
pub fn compute_offset<S: CoordinateStep>(step: &S, label: LabelPolicy) -> BoundsResult<EdgeOffsets<S>> {
    let offsets = match label {
        LabelPolicy::Start => EdgeOffsets {
            before: None,
            after: Some(step.clone()),
        },
        LabelPolicy::Middle => {
            let half = step.half()?;
            EdgeOffsets {
                before: Some(half.negated()?),
                after: Some(half),
            }
        }
        LabelPolicy::End => EdgeOffsets {
            before: Some(step.negated()?),
            after: None,
        },
    };
    Ok(offsets)
}
