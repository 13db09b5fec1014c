//! Cell bounds and bounds arrays.

use std::fmt;
use std::ops::Index;

use crate::error::{BoundsError, BoundsResult};
use crate::types::ClosurePolicy;

/// Edges of a single grid cell.
///
/// # Example
///
/// ```
/// use cf_bounds::types::{CellBounds, ClosurePolicy};
///
/// let cell = CellBounds::new(0.0, 10.0);
///
/// assert_eq!(cell.width(), 10.0);
/// assert_eq!(cell.midpoint(), 5.0);
/// assert!(cell.contains(&0.0, ClosurePolicy::Left));
/// assert!(!cell.contains(&10.0, ClosurePolicy::Left));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellBounds<T> {
    /// Lower edge
    pub lower: T,
    /// Upper edge
    pub upper: T,
}

impl<T> CellBounds<T> {
    /// Create cell bounds as given, without reordering.
    pub fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    /// Return bounds as tuple (lower, upper).
    #[inline]
    pub fn as_tuple(&self) -> (&T, &T) {
        (&self.lower, &self.upper)
    }

    /// Consume into a `[lower, upper]` pair.
    #[inline]
    pub fn into_pair(self) -> [T; 2] {
        [self.lower, self.upper]
    }
}

impl<T: PartialOrd> CellBounds<T> {
    /// Create cell bounds from two edges in either order.
    pub fn ordered(a: T, b: T) -> Self {
        if b < a {
            Self { lower: b, upper: a }
        } else {
            Self { lower: a, upper: b }
        }
    }

    /// Check `lower <= upper`. Unordered edges (NaN) are invalid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.lower <= self.upper
    }

    /// Check if a value lies in the cell under the given closure.
    pub fn contains(&self, value: &T, closed: ClosurePolicy) -> bool {
        let above = if closed.closed_left() {
            *value >= self.lower
        } else {
            *value > self.lower
        };
        let below = if closed.closed_right() {
            *value <= self.upper
        } else {
            *value < self.upper
        };
        above && below
    }
}

impl CellBounds<f64> {
    /// Cell width (upper - lower).
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Cell midpoint.
    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }
}

impl<T: fmt::Display> fmt::Display for CellBounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

impl<T> From<(T, T)> for CellBounds<T> {
    fn from((lower, upper): (T, T)) -> Self {
        Self::new(lower, upper)
    }
}

/// Two-column bounds array: row `i` holds the edges of cell `i`.
///
/// Construction does not validate; [`BoundsArray::validate`] checks the
/// `lower <= upper` invariant for bounds that come from outside the builder.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct BoundsArray<T> {
    rows: Vec<CellBounds<T>>,
}

impl<T> BoundsArray<T> {
    /// Wrap rows of cell bounds.
    pub fn new(rows: Vec<CellBounds<T>>) -> Self {
        Self { rows }
    }

    /// Build from `(lower, upper)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (T, T)>) -> Self {
        Self {
            rows: pairs.into_iter().map(CellBounds::from).collect(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Access the rows.
    pub fn rows(&self) -> &[CellBounds<T>] {
        &self.rows
    }

    /// Get row `i`.
    pub fn get(&self, i: usize) -> Option<&CellBounds<T>> {
        self.rows.get(i)
    }

    /// Iterate over rows.
    pub fn iter(&self) -> std::slice::Iter<'_, CellBounds<T>> {
        self.rows.iter()
    }

    /// Lower edges, in row order.
    pub fn lower(&self) -> impl Iterator<Item = &T> + '_ {
        self.rows.iter().map(|r| &r.lower)
    }

    /// Upper edges, in row order.
    pub fn upper(&self) -> impl Iterator<Item = &T> + '_ {
        self.rows.iter().map(|r| &r.upper)
    }

    /// Consume into the underlying rows.
    pub fn into_rows(self) -> Vec<CellBounds<T>> {
        self.rows
    }
}

impl<T: Clone> BoundsArray<T> {
    /// Row-major `(n, 2)` layout: `[lower_0, upper_0, lower_1, upper_1, ...]`.
    pub fn to_flat(&self) -> Vec<T> {
        let mut flat = Vec::with_capacity(self.rows.len() * 2);
        for row in &self.rows {
            flat.push(row.lower.clone());
            flat.push(row.upper.clone());
        }
        flat
    }

    /// Rows as `[lower, upper]` pairs.
    pub fn to_pairs(&self) -> Vec<[T; 2]> {
        self.rows
            .iter()
            .map(|r| [r.lower.clone(), r.upper.clone()])
            .collect()
    }
}

impl<T: PartialOrd + fmt::Debug> BoundsArray<T> {
    /// Check that every row has `lower <= upper`.
    ///
    /// # Errors
    /// - `InvalidBounds` naming the first offending row
    pub fn validate(&self) -> BoundsResult<()> {
        match self.rows.iter().position(|r| !r.is_valid()) {
            Some(row) => Err(BoundsError::InvalidBounds {
                row,
                lower: format!("{:?}", self.rows[row].lower),
                upper: format!("{:?}", self.rows[row].upper),
            }),
            None => Ok(()),
        }
    }

    /// Index of the first cell containing `value` under `closed`.
    pub fn locate(&self, value: &T, closed: ClosurePolicy) -> Option<usize> {
        self.rows.iter().position(|r| r.contains(value, closed))
    }
}

impl<T> Index<usize> for BoundsArray<T> {
    type Output = CellBounds<T>;

    fn index(&self, i: usize) -> &CellBounds<T> {
        &self.rows[i]
    }
}

impl<'a, T> IntoIterator for &'a BoundsArray<T> {
    type Item = &'a CellBounds<T>;
    type IntoIter = std::slice::Iter<'a, CellBounds<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<T> FromIterator<CellBounds<T>> for BoundsArray<T> {
    fn from_iter<I: IntoIterator<Item = CellBounds<T>>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
