//! Error type for bounds inference and interval conversion.

use thiserror::Error;

use crate::types::ClosurePolicy;

/// Result alias for operations that may produce [`BoundsError`].
pub type BoundsResult<T> = Result<T, BoundsError>;

/// Error type for bounds inference, interval conversion and the dataset shell.
///
/// Coordinate values and steps are rendered with `Debug` so the error does not
/// depend on the coordinate type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundsError {
    // ---- Spacing ----
    /// Coordinate has no values
    #[error("coordinate is empty")]
    EmptyCoordinate,

    /// Too few values to define a spacing
    #[error("coordinate must have at least {required} values to infer bounds, got {actual}")]
    TooFewValues { required: usize, actual: usize },

    /// Adjacent values at `index` and `index + 1` are not strictly ordered
    #[error("coordinate is not monotonic: values at index {index} and {} are out of order or equal", .index + 1)]
    NonMonotonicCoordinate { index: usize },

    /// Step between `index` and `index + 1` differs from the first step
    #[error("coordinate is not regularly spaced: step at index {index} is {actual}, expected {expected}")]
    IrregularSpacing {
        index: usize,
        expected: String,
        actual: String,
    },

    // ---- Offsets ----
    /// Offset cannot be applied unambiguously under the value's calendar
    #[error(
        "offset {offset} from {value} is ambiguous across a daylight saving transition; \
         consider converting the coordinate to UTC or a fixed offset first"
    )]
    AmbiguousOffset { value: String, offset: String },

    /// Half of the step is not exactly representable
    #[error("half of step {step} is not exactly representable")]
    InexactHalfStep { step: String },

    /// Applying the offset overflows the value type
    #[error("applying offset {offset} to {value} overflows")]
    OffsetOverflow { value: String, offset: String },

    // ---- Bounds and intervals ----
    /// A bounds row has its lower edge above its upper edge
    #[error("invalid bounds at row {row}: lower {lower} is not <= upper {upper}")]
    InvalidBounds {
        row: usize,
        lower: String,
        upper: String,
    },

    /// Intervals in one sequence use different closure
    #[error("inconsistent interval closure: interval {index} is closed {found}, expected {expected}")]
    InconsistentClosure {
        index: usize,
        expected: ClosurePolicy,
        found: ClosurePolicy,
    },

    /// Interval sequence is empty, so its closure is undefined
    #[error("cannot convert an empty interval sequence to bounds")]
    EmptyIntervals,

    // ---- Configuration ----
    /// String does not name a known policy
    #[error("unknown {kind} policy: {value:?}")]
    UnknownPolicy { kind: &'static str, value: String },

    // ---- Dataset ----
    /// Key does not resolve to a coordinate
    #[error("no coordinate found for key {0:?}")]
    UnknownKey(String),

    /// Coordinate already has a bounds variable
    #[error("bounds already exist for dimension {0:?}")]
    BoundsAlreadyExist(String),

    /// Bounds length differs from the coordinate length
    #[error("bounds for {name:?} have {actual} rows, coordinate has {expected} values")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// Bounds values are of a different kind than the coordinate
    #[error("bounds for {name:?} hold {bounds} values, coordinate holds {coordinate} values")]
    KindMismatch {
        name: String,
        coordinate: &'static str,
        bounds: &'static str,
    },
}

impl BoundsError {
    /// Check if this error comes from an unsafe calendar offset.
    pub fn is_ambiguous_offset(&self) -> bool {
        matches!(self, BoundsError::AmbiguousOffset { .. })
    }

    /// Check if this error rejects the coordinate spacing itself.
    pub fn is_spacing_error(&self) -> bool {
        matches!(
            self,
            BoundsError::EmptyCoordinate
                | BoundsError::TooFewValues { .. }
                | BoundsError::NonMonotonicCoordinate { .. }
                | BoundsError::IrregularSpacing { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_monotonic_message_names_both_indices() {
        let err = BoundsError::NonMonotonicCoordinate { index: 1 };
        assert_eq!(
            err.to_string(),
            "coordinate is not monotonic: values at index 1 and 2 are out of order or equal"
        );
    }

    #[test]
    fn test_ambiguous_offset_suggests_workaround() {
        let err = BoundsError::AmbiguousOffset {
            value: "2024-03-10T01:30:00 EST".into(),
            offset: "PT1800S".into(),
        };
        assert!(err.is_ambiguous_offset());
        assert!(err.to_string().contains("UTC"));
    }

    #[test]
    fn test_error_classification() {
        assert!(BoundsError::EmptyCoordinate.is_spacing_error());
        assert!(BoundsError::NonMonotonicCoordinate { index: 0 }.is_spacing_error());
        assert!(!BoundsError::EmptyIntervals.is_spacing_error());
        assert!(!BoundsError::EmptyIntervals.is_ambiguous_offset());
    }
}
