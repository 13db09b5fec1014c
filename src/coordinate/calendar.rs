//! Calendar coordinates: naive and zoned timestamps.
//!
//! Zoned values shift on the local wall clock. Across a daylight saving
//! transition a wall-clock shift may land in a gap (no instant), in an overlap
//! (two instants), or on an instant whose elapsed distance from the value is
//! not the requested offset. All three are rejected.

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone};
use tracing::debug;

use crate::coordinate::{CoordinateStep, CoordinateValue};
use crate::error::{BoundsError, BoundsResult};

impl CoordinateStep for TimeDelta {
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn half(&self) -> BoundsResult<Self> {
        let half = *self / 2;
        if half * 2 != *self {
            return Err(BoundsError::InexactHalfStep {
                step: self.to_string(),
            });
        }
        Ok(half)
    }

    #[inline]
    fn negated(&self) -> BoundsResult<Self> {
        Ok(-*self)
    }
}

impl CoordinateValue for NaiveDateTime {
    type Step = TimeDelta;

    #[inline]
    fn step_to(&self, next: &Self) -> BoundsResult<TimeDelta> {
        Ok(next.signed_duration_since(*self))
    }

    fn offset_by(&self, offset: &TimeDelta) -> BoundsResult<Self> {
        self.checked_add_signed(*offset)
            .ok_or_else(|| overflow(self, offset))
    }
}

impl<Tz: TimeZone> CoordinateValue for DateTime<Tz> {
    type Step = TimeDelta;

    /// Elapsed absolute duration, independent of any wall-clock change.
    #[inline]
    fn step_to(&self, next: &Self) -> BoundsResult<TimeDelta> {
        Ok(next.naive_utc().signed_duration_since(self.naive_utc()))
    }

    fn offset_by(&self, offset: &TimeDelta) -> BoundsResult<Self> {
        let shifted = shift_wall_clock(self, self.naive_local(), *offset)?;
        let restored = shift_wall_clock(self, shifted.naive_local(), -*offset)?;
        let elapsed = shifted.naive_utc().signed_duration_since(self.naive_utc());

        if restored != *self || elapsed != *offset {
            debug!(
                value = ?self,
                %offset,
                %elapsed,
                "calendar offset does not round-trip"
            );
            return Err(ambiguous(self, offset));
        }
        Ok(shifted)
    }
}

/// Shift a local wall-clock time and resolve it in `origin`'s time zone.
fn shift_wall_clock<Tz: TimeZone>(
    origin: &DateTime<Tz>,
    local: NaiveDateTime,
    offset: TimeDelta,
) -> BoundsResult<DateTime<Tz>> {
    let target = local
        .checked_add_signed(offset)
        .ok_or_else(|| overflow(origin, &offset))?;

    match origin.timezone().from_local_datetime(&target).single() {
        Some(resolved) => Ok(resolved),
        None => {
            debug!(value = ?origin, %offset, %target, "wall-clock time is not a single instant");
            Err(ambiguous(origin, &offset))
        }
    }
}

fn ambiguous<T: std::fmt::Debug>(value: &T, offset: &TimeDelta) -> BoundsError {
    BoundsError::AmbiguousOffset {
        value: format!("{:?}", value),
        offset: offset.to_string(),
    }
}

fn overflow<T: std::fmt::Debug>(value: &T, offset: &TimeDelta) -> BoundsError {
    BoundsError::OffsetOverflow {
        value: format!("{:?}", value),
        offset: offset.to_string(),
    }
}
