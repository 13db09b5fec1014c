//! Spacing analysis: monotonicity, direction and regular step.

use crate::coordinate::{CoordinateStep, CoordinateValue};
use crate::error::{BoundsError, BoundsResult};
use crate::types::Direction;

/// Result of analyzing a coordinate sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingReport<S> {
    /// Strictly increasing or strictly decreasing
    pub is_monotonic: bool,
    /// Traversal direction; `None` for a single value or a non-monotonic sequence
    pub direction: Option<Direction>,
    /// All adjacent steps equal the first one
    pub is_regular: bool,
    /// Signed first step, present only when regular
    pub step: Option<S>,
    /// First pair index `i` where `(i, i + 1)` breaks the ordering
    non_monotonic_at: Option<usize>,
    /// First pair index whose step differs, with the first step and that step
    irregular_at: Option<(usize, S, S)>,
    /// Step that could not be represented in the step type
    step_error: Option<BoundsError>,
}

impl<S: CoordinateStep> SpacingReport<S> {
    fn single() -> Self {
        Self {
            is_monotonic: true,
            direction: None,
            is_regular: false,
            step: None,
            non_monotonic_at: None,
            irregular_at: None,
            step_error: None,
        }
    }

    /// Index `i` of the first adjacent pair `(i, i + 1)` out of order.
    pub fn non_monotonic_at(&self) -> Option<usize> {
        self.non_monotonic_at
    }

    /// Index `i` of the first step `(i, i + 1)` that differs from the first step.
    pub fn irregular_at(&self) -> Option<usize> {
        self.irregular_at.as_ref().map(|(i, _, _)| *i)
    }

    /// The regular step, or the error explaining why there is none.
    ///
    /// # Errors
    /// - `NonMonotonicCoordinate` if the ordering is broken
    /// - `OffsetOverflow` if a step is not representable
    /// - `IrregularSpacing` if a step differs from the first one
    /// - `TooFewValues` if there is a single value
    pub fn require_regular(&self) -> BoundsResult<(&S, Direction)> {
        if let Some(index) = self.non_monotonic_at {
            return Err(BoundsError::NonMonotonicCoordinate { index });
        }
        if let Some(err) = &self.step_error {
            return Err(err.clone());
        }
        if let Some((index, expected, actual)) = &self.irregular_at {
            return Err(BoundsError::IrregularSpacing {
                index: *index,
                expected: format!("{:?}", expected),
                actual: format!("{:?}", actual),
            });
        }
        match (&self.step, self.direction) {
            (Some(step), Some(direction)) => Ok((step, direction)),
            _ => Err(BoundsError::TooFewValues {
                required: 2,
                actual: 1,
            }),
        }
    }
}

/// Analyze ordering and spacing of a coordinate sequence.
///
/// Steps are compared with [`CoordinateStep::approx_eq`]; for calendar values
/// they are elapsed absolute durations.
///
/// A monotonic sequence whose step cannot be represented (an `i64` range
/// wider than `i64::MAX`) is reported as not regular.
///
/// # Errors
/// - `EmptyCoordinate` if `coords` is empty
///
/// # Example
///
/// ```
/// use cf_bounds::analyze;
/// use cf_bounds::types::Direction;
///
/// let report = analyze(&[3.0, 2.0, 1.0]).unwrap();
/// assert!(report.is_monotonic && report.is_regular);
/// assert_eq!(report.direction, Some(Direction::Decreasing));
/// assert_eq!(report.step, Some(-1.0));
///
/// let report = analyze(&[1.0, 2.0, 4.0]).unwrap();
/// assert!(report.is_monotonic && !report.is_regular);
/// ```
pub fn analyze<T: CoordinateValue>(coords: &[T]) -> BoundsResult<SpacingReport<T::Step>> {
    if coords.is_empty() {
        return Err(BoundsError::EmptyCoordinate);
    }
    if coords.len() == 1 {
        return Ok(SpacingReport::single());
    }

    let direction = if coords[1] > coords[0] {
        Direction::Increasing
    } else if coords[1] < coords[0] {
        Direction::Decreasing
    } else {
        return Ok(non_monotonic(0));
    };

    for (i, pair) in coords.windows(2).enumerate().skip(1) {
        let ordered = match direction {
            Direction::Increasing => pair[1] > pair[0],
            Direction::Decreasing => pair[1] < pair[0],
        };
        if !ordered {
            return Ok(non_monotonic(i));
        }
    }

    let first = match coords[0].step_to(&coords[1]) {
        Ok(step) => step,
        Err(err) => return Ok(unrepresentable(direction, err)),
    };
    for (i, pair) in coords.windows(2).enumerate().skip(1) {
        let step = match pair[0].step_to(&pair[1]) {
            Ok(step) => step,
            Err(err) => return Ok(unrepresentable(direction, err)),
        };
        if !step.approx_eq(&first) {
            return Ok(SpacingReport {
                is_monotonic: true,
                direction: Some(direction),
                is_regular: false,
                step: None,
                non_monotonic_at: None,
                irregular_at: Some((i, first, step)),
                step_error: None,
            });
        }
    }

    Ok(SpacingReport {
        is_monotonic: true,
        direction: Some(direction),
        is_regular: true,
        step: Some(first),
        non_monotonic_at: None,
        irregular_at: None,
        step_error: None,
    })
}

fn non_monotonic<S>(index: usize) -> SpacingReport<S> {
    SpacingReport {
        is_monotonic: false,
        direction: None,
        is_regular: false,
        step: None,
        non_monotonic_at: Some(index),
        irregular_at: None,
        step_error: None,
    }
}

fn unrepresentable<S>(direction: Direction, err: BoundsError) -> SpacingReport<S> {
    SpacingReport {
        is_monotonic: true,
        direction: Some(direction),
        is_regular: false,
        step: None,
        non_monotonic_at: None,
        irregular_at: None,
        step_error: Some(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_increasing() {
        let report = analyze(&[1_i64, 2, 4]).unwrap();
        assert!(report.is_monotonic);
        assert!(!report.is_regular);
        assert_eq!(report.direction, Some(Direction::Increasing));
        assert_eq!(report.step, None);
        assert_eq!(report.irregular_at(), Some(1));
    }

    #[test]
    fn test_regular_decreasing_has_signed_step() {
        let report = analyze(&[3_i64, 2, 1]).unwrap();
        assert!(report.is_monotonic);
        assert!(report.is_regular);
        assert_eq!(report.direction, Some(Direction::Decreasing));
        assert_eq!(report.step, Some(-1));
    }

    #[test]
    fn test_ties_are_not_monotonic() {
        let report = analyze(&[1.0, 1.0, 2.0]).unwrap();
        assert!(!report.is_monotonic);
        assert_eq!(report.non_monotonic_at(), Some(0));

        let report = analyze(&[1.0, 2.0, 2.0]).unwrap();
        assert!(!report.is_monotonic);
        assert_eq!(report.non_monotonic_at(), Some(1));
    }

    #[test]
    fn test_reversal_is_not_monotonic() {
        let report = analyze(&[1.0, 3.0, 2.0]).unwrap();
        assert!(!report.is_monotonic);
        assert!(!report.is_regular);
        assert_eq!(report.direction, None);
        assert!(matches!(
            report.require_regular(),
            Err(BoundsError::NonMonotonicCoordinate { index: 1 })
        ));
    }

    #[test]
    fn test_nan_breaks_monotonicity() {
        let report = analyze(&[0.0, f64::NAN, 2.0]).unwrap();
        assert!(!report.is_monotonic);
    }

    #[test]
    fn test_single_value() {
        let report = analyze(&[5.0]).unwrap();
        assert!(report.is_monotonic);
        assert!(!report.is_regular);
        assert!(matches!(
            report.require_regular(),
            Err(BoundsError::TooFewValues { required: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_empty_is_error() {
        let coords: [f64; 0] = [];
        assert_eq!(analyze(&coords), Err(BoundsError::EmptyCoordinate));
    }

    #[test]
    fn test_float_rounding_is_still_regular() {
        let coords: Vec<f64> = (0..50).map(|i| i as f64 * 0.1).collect();
        let report = analyze(&coords).unwrap();
        assert!(report.is_regular);
    }

    #[test]
    fn test_unrepresentable_step_is_not_regular() {
        let report = analyze(&[i64::MIN, i64::MAX]).unwrap();
        assert!(report.is_monotonic);
        assert!(!report.is_regular);
        assert_eq!(report.direction, Some(Direction::Increasing));
        assert!(matches!(
            report.require_regular(),
            Err(BoundsError::OffsetOverflow { .. })
        ));
    }

    #[test]
    fn test_irregular_error_reports_steps() {
        let report = analyze(&[0_i64, 2, 4, 7]).unwrap();
        match report.require_regular() {
            Err(BoundsError::IrregularSpacing {
                index,
                expected,
                actual,
            }) => {
                assert_eq!(index, 2);
                assert_eq!(expected, "2");
                assert_eq!(actual, "3");
            }
            other => panic!("expected IrregularSpacing, got {:?}", other),
        }
    }
}
