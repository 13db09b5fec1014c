//! Numeric coordinates: `f64` and `i64`.

use approx::relative_eq;

use crate::coordinate::{CoordinateStep, CoordinateValue};
use crate::error::{BoundsError, BoundsResult};

/// Absolute tolerance when comparing float steps.
pub const FLOAT_STEP_ATOL: f64 = 1e-8;

/// Relative tolerance when comparing float steps.
pub const FLOAT_STEP_RTOL: f64 = 1e-5;

impl CoordinateStep for f64 {
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        relative_eq!(
            *self,
            *other,
            epsilon = FLOAT_STEP_ATOL,
            max_relative = FLOAT_STEP_RTOL
        )
    }

    #[inline]
    fn half(&self) -> BoundsResult<Self> {
        Ok(self / 2.0)
    }

    #[inline]
    fn negated(&self) -> BoundsResult<Self> {
        Ok(-self)
    }
}

impl CoordinateValue for f64 {
    type Step = f64;

    #[inline]
    fn step_to(&self, next: &Self) -> BoundsResult<f64> {
        Ok(next - self)
    }

    fn offset_by(&self, offset: &f64) -> BoundsResult<Self> {
        let shifted = self + offset;
        if self.is_finite() && offset.is_finite() && !shifted.is_finite() {
            return Err(BoundsError::OffsetOverflow {
                value: format!("{:?}", self),
                offset: format!("{:?}", offset),
            });
        }
        Ok(shifted)
    }
}

impl CoordinateStep for i64 {
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn half(&self) -> BoundsResult<Self> {
        if self % 2 != 0 {
            return Err(BoundsError::InexactHalfStep {
                step: self.to_string(),
            });
        }
        Ok(self / 2)
    }

    fn negated(&self) -> BoundsResult<Self> {
        self.checked_neg().ok_or_else(|| BoundsError::OffsetOverflow {
            value: self.to_string(),
            offset: "negation".to_string(),
        })
    }
}

impl CoordinateValue for i64 {
    type Step = i64;

    fn step_to(&self, next: &Self) -> BoundsResult<i64> {
        next.checked_sub(*self)
            .ok_or_else(|| BoundsError::OffsetOverflow {
                value: next.to_string(),
                offset: format!("-{}", self),
            })
    }

    fn offset_by(&self, offset: &i64) -> BoundsResult<Self> {
        self.checked_add(*offset)
            .ok_or_else(|| BoundsError::OffsetOverflow {
                value: self.to_string(),
                offset: offset.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_steps_use_tolerance() {
        assert!(0.1_f64.approx_eq(&(0.3 - 0.2)));
        assert!(1.0_f64.approx_eq(&(1.0 + 1e-9)));
        assert!(!1.0_f64.approx_eq(&1.001));
    }

    #[test]
    fn test_float_offset_overflow() {
        assert!(matches!(
            f64::MAX.offset_by(&f64::MAX),
            Err(BoundsError::OffsetOverflow { .. })
        ));
        assert_eq!(1.5_f64.offset_by(&-0.5).unwrap(), 1.0);
    }

    #[test]
    fn test_integer_half_step_must_be_exact() {
        assert_eq!(4_i64.half().unwrap(), 2);
        assert_eq!((-6_i64).half().unwrap(), -3);
        assert!(matches!(
            3_i64.half(),
            Err(BoundsError::InexactHalfStep { .. })
        ));
    }

    #[test]
    fn test_integer_arithmetic_is_checked() {
        assert!(i64::MAX.offset_by(&1).is_err());
        assert!(i64::MIN.negated().is_err());
        assert!(i64::MIN.step_to(&i64::MAX).is_err());
        assert_eq!(10_i64.step_to(&7).unwrap(), -3);
    }
}
