//! Coordinate value abstractions.
//!
//! The inference engine is generic over the scalar type of a coordinate. A
//! type plugs in by implementing [`CoordinateValue`], which defines how to
//! measure the step between adjacent values and how to apply an offset to a
//! value, and [`CoordinateStep`] for the step type itself.
//!
//! Provided implementations:
//! - `f64` with `f64` steps, compared with an `allclose`-style tolerance
//! - `i64` with exact, overflow-checked `i64` steps
//! - `chrono::NaiveDateTime` with `chrono::TimeDelta` steps
//! - `chrono::DateTime<Tz>` for any time zone, with `TimeDelta` steps and
//!   daylight-saving-safe offsets
//!
//! # Calendar safety
//!
//! Steps between zoned timestamps are elapsed absolute durations. Offsets are
//! applied on the wall clock of the value's time zone and accepted only when
//! the result is a single instant, shifting back reproduces the original value
//! and the elapsed time equals the offset. Anything else is
//! [`BoundsError::AmbiguousOffset`](crate::BoundsError::AmbiguousOffset).

mod calendar;
mod numeric;

use std::fmt;

use crate::error::BoundsResult;

pub use numeric::{FLOAT_STEP_ATOL, FLOAT_STEP_RTOL};

/// Step (signed difference) between two coordinate values.
pub trait CoordinateStep: Clone + PartialEq + fmt::Debug {
    /// Whether two steps count as the same spacing.
    fn approx_eq(&self, other: &Self) -> bool;

    /// Exactly half of this step.
    ///
    /// # Errors
    /// - `InexactHalfStep` if the half is not representable
    fn half(&self) -> BoundsResult<Self>;

    /// The step in the opposite direction.
    ///
    /// # Errors
    /// - `OffsetOverflow` if the negation is not representable
    fn negated(&self) -> BoundsResult<Self>;
}

/// A scalar coordinate value.
pub trait CoordinateValue: Clone + PartialOrd + fmt::Debug {
    /// Step type between two values.
    type Step: CoordinateStep;

    /// Signed step from `self` to `next` (`next - self`).
    ///
    /// # Errors
    /// - `OffsetOverflow` if the difference is not representable
    fn step_to(&self, next: &Self) -> BoundsResult<Self::Step>;

    /// Apply an offset to this value.
    ///
    /// # Errors
    /// - `OffsetOverflow` if the result is out of range
    /// - `AmbiguousOffset` if the result is not a well-defined calendar value
    fn offset_by(&self, offset: &Self::Step) -> BoundsResult<Self>;
}
