//! Label and closure policies for cell intervals.
//!
//! A coordinate value labels one point of its cell ([`LabelPolicy`]), and each
//! cell is an interval whose edges may or may not be inclusive
//! ([`ClosurePolicy`]).

use std::fmt;
use std::str::FromStr;

use crate::error::BoundsError;

/// Where a coordinate value sits within its cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LabelPolicy {
    /// Value is the lower edge of its cell in traversal order
    #[default]
    Start,
    /// Value is the midpoint of its cell
    Middle,
    /// Value is the upper edge of its cell in traversal order
    End,
}

impl LabelPolicy {
    /// All label policies.
    pub const ALL: [LabelPolicy; 3] = [LabelPolicy::Start, LabelPolicy::Middle, LabelPolicy::End];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelPolicy::Start => "start",
            LabelPolicy::Middle => "middle",
            LabelPolicy::End => "end",
        }
    }

    /// Label implied by a closure when no label is given.
    ///
    /// `Left` -> `Start`, `Right` -> `End`, anything else -> `Start`.
    pub fn implied_by(closed: ClosurePolicy) -> Self {
        match closed {
            ClosurePolicy::Right => LabelPolicy::End,
            _ => LabelPolicy::Start,
        }
    }
}

impl fmt::Display for LabelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelPolicy {
    type Err = BoundsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "left" => Ok(LabelPolicy::Start),
            "middle" | "center" | "centre" | "mid" => Ok(LabelPolicy::Middle),
            "end" | "right" => Ok(LabelPolicy::End),
            _ => Err(BoundsError::UnknownPolicy {
                kind: "label",
                value: s.to_string(),
            }),
        }
    }
}

/// Which edges of a cell interval are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ClosurePolicy {
    /// `[lower, upper)`
    #[default]
    Left,
    /// `(lower, upper]`
    Right,
    /// `[lower, upper]`
    Both,
    /// `(lower, upper)`
    Neither,
}

impl ClosurePolicy {
    /// All closure policies.
    pub const ALL: [ClosurePolicy; 4] = [
        ClosurePolicy::Left,
        ClosurePolicy::Right,
        ClosurePolicy::Both,
        ClosurePolicy::Neither,
    ];

    /// Canonical lowercase name, as written to the `closed` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClosurePolicy::Left => "left",
            ClosurePolicy::Right => "right",
            ClosurePolicy::Both => "both",
            ClosurePolicy::Neither => "neither",
        }
    }

    /// Whether the lower edge belongs to the interval.
    #[inline]
    pub fn closed_left(&self) -> bool {
        matches!(self, ClosurePolicy::Left | ClosurePolicy::Both)
    }

    /// Whether the upper edge belongs to the interval.
    #[inline]
    pub fn closed_right(&self) -> bool {
        matches!(self, ClosurePolicy::Right | ClosurePolicy::Both)
    }

    /// Closure with the left and right sides swapped.
    ///
    /// `Both` and `Neither` are symmetric and stay as they are.
    pub fn flipped(&self) -> Self {
        match self {
            ClosurePolicy::Left => ClosurePolicy::Right,
            ClosurePolicy::Right => ClosurePolicy::Left,
            other => *other,
        }
    }

    /// Closure on sorted cell edges for a coordinate traversed in `direction`.
    ///
    /// Closure is given relative to traversal order, so a decreasing
    /// coordinate swaps the sides.
    pub fn oriented(&self, direction: Direction) -> Self {
        match direction {
            Direction::Increasing => *self,
            Direction::Decreasing => self.flipped(),
        }
    }

    /// Closure implied by a label when no closure is given.
    ///
    /// `End` -> `Right`, anything else -> `Left`.
    pub fn implied_by(label: LabelPolicy) -> Self {
        match label {
            LabelPolicy::End => ClosurePolicy::Right,
            _ => ClosurePolicy::Left,
        }
    }
}

impl fmt::Display for ClosurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClosurePolicy {
    type Err = BoundsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(ClosurePolicy::Left),
            "right" => Ok(ClosurePolicy::Right),
            "both" => Ok(ClosurePolicy::Both),
            "neither" => Ok(ClosurePolicy::Neither),
            _ => Err(BoundsError::UnknownPolicy {
                kind: "closure",
                value: s.to_string(),
            }),
        }
    }
}

/// Traversal direction of a monotonic coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Strictly increasing
    Increasing,
    /// Strictly decreasing
    Decreasing,
}

impl Direction {
    /// Check if this is the increasing direction.
    pub fn is_increasing(&self) -> bool {
        matches!(self, Direction::Increasing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parsing_accepts_aliases() {
        assert_eq!("left".parse::<LabelPolicy>().unwrap(), LabelPolicy::Start);
        assert_eq!("Middle".parse::<LabelPolicy>().unwrap(), LabelPolicy::Middle);
        assert_eq!(" right ".parse::<LabelPolicy>().unwrap(), LabelPolicy::End);
        assert!(matches!(
            "top".parse::<LabelPolicy>(),
            Err(BoundsError::UnknownPolicy { kind: "label", .. })
        ));
    }

    #[test]
    fn test_closure_round_trips_through_str() {
        for closed in ClosurePolicy::ALL {
            assert_eq!(closed.as_str().parse::<ClosurePolicy>().unwrap(), closed);
        }
        assert!("middle".parse::<ClosurePolicy>().is_err());
    }

    #[test]
    fn test_closed_sides() {
        assert!(ClosurePolicy::Left.closed_left());
        assert!(!ClosurePolicy::Left.closed_right());
        assert!(ClosurePolicy::Both.closed_left() && ClosurePolicy::Both.closed_right());
        assert!(!ClosurePolicy::Neither.closed_left() && !ClosurePolicy::Neither.closed_right());
    }

    #[test]
    fn test_decreasing_direction_swaps_sides() {
        assert_eq!(ClosurePolicy::Left.oriented(Direction::Decreasing), ClosurePolicy::Right);
        assert_eq!(ClosurePolicy::Right.oriented(Direction::Decreasing), ClosurePolicy::Left);
        assert_eq!(ClosurePolicy::Both.oriented(Direction::Decreasing), ClosurePolicy::Both);
        assert_eq!(ClosurePolicy::Neither.flipped(), ClosurePolicy::Neither);
        for closed in ClosurePolicy::ALL {
            assert_eq!(closed.oriented(Direction::Increasing), closed);
            assert_eq!(closed.flipped().flipped(), closed);
        }
    }

    #[test]
    fn test_implied_defaults() {
        assert_eq!(LabelPolicy::implied_by(ClosurePolicy::Right), LabelPolicy::End);
        assert_eq!(LabelPolicy::implied_by(ClosurePolicy::Both), LabelPolicy::Start);
        assert_eq!(ClosurePolicy::implied_by(LabelPolicy::Middle), ClosurePolicy::Left);
        assert_eq!(ClosurePolicy::implied_by(LabelPolicy::End), ClosurePolicy::Right);
    }
}
