//! In-memory dataset shell around the inference engine.
//!
//! A [`Dataset`] holds named 1-D coordinates and their CF bounds variables.
//! Operations never modify the dataset they are called on; each returns a new
//! one with the bounds added.
//!
//! # Example
//!
//! ```
//! use cf_bounds::BoundsOptions;
//! use cf_bounds::dataset::{Coordinate, CoordinateData, Dataset};
//!
//! let ds = Dataset::new()
//!     .with_coord("lat", Coordinate::new(CoordinateData::Float(vec![50.0, 51.0, 52.0])).with_attr("axis", "Y"))
//!     .with_coord("lon", Coordinate::new(CoordinateData::Float(vec![0.0, 2.0])).with_attr("axis", "X"));
//!
//! let with_bounds = ds.infer_bounds(&["Y"], &BoundsOptions::default()).unwrap();
//! assert_eq!(with_bounds.bounds().dims(), vec!["lat"]);
//! assert_eq!(with_bounds.coord("lat").unwrap().attr("bounds"), Some("lat_bnds"));
//! assert!(ds.bounds().is_empty());
//! ```

mod variable;

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::config::BoundsOptions;
use crate::error::{BoundsError, BoundsResult};
use crate::types::ClosurePolicy;

pub use variable::{
    Attributes, BoundsData, BoundsVariable, Coordinate, CoordinateData, IntervalData, AXIS_ATTR,
    BOUNDS_ATTR, CLOSED_ATTR, STANDARD_NAME_ATTR,
};

/// Named coordinates and their bounds variables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    coords: BTreeMap<String, Coordinate>,
    bounds: BTreeMap<String, BoundsVariable>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a coordinate, named after its dimension.
    pub fn with_coord(mut self, name: impl Into<String>, coord: Coordinate) -> Self {
        self.coords.insert(name.into(), coord);
        self
    }

    /// Look up a coordinate by name.
    pub fn coord(&self, name: &str) -> Option<&Coordinate> {
        self.coords.get(name)
    }

    /// Iterate over coordinates in name order.
    pub fn coords(&self) -> impl Iterator<Item = (&str, &Coordinate)> + '_ {
        self.coords.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up a bounds variable by its own name.
    pub fn bounds_var(&self, name: &str) -> Option<&BoundsVariable> {
        self.bounds.get(name)
    }

    /// Iterate over bounds variables in name order.
    pub fn bounds_vars(&self) -> impl Iterator<Item = (&str, &BoundsVariable)> + '_ {
        self.bounds.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// View of the bounds linked from coordinates.
    pub fn bounds(&self) -> BoundsView<'_> {
        BoundsView { dataset: self }
    }

    /// Resolve a key to a coordinate name.
    ///
    /// The key is a coordinate name, or a value of exactly one coordinate's
    /// `axis` or `standard_name` attribute.
    ///
    /// # Errors
    /// - `UnknownKey` if nothing, or more than one coordinate, matches
    pub fn resolve_dim(&self, key: &str) -> BoundsResult<String> {
        if self.coords.contains_key(key) {
            return Ok(key.to_string());
        }

        let mut matches = self.coords.iter().filter(|(_, c)| {
            c.attr(AXIS_ATTR) == Some(key) || c.attr(STANDARD_NAME_ATTR) == Some(key)
        });
        match (matches.next(), matches.next()) {
            (Some((name, _)), None) => Ok(name.clone()),
            _ => Err(BoundsError::UnknownKey(key.to_string())),
        }
    }

    /// Return a new dataset with bounds inferred for the given keys.
    ///
    /// With no keys, bounds are inferred for every coordinate that has an
    /// `axis` attribute and no bounds yet. The `closed` attribute records the
    /// closure on the sorted edges, so `Left` and `Right` swap for a
    /// decreasing coordinate.
    ///
    /// # Errors
    /// - `UnknownKey` if a key does not resolve
    /// - `BoundsAlreadyExist` if a resolved coordinate already has bounds
    /// - Any inference error for the coordinate values
    pub fn infer_bounds(&self, keys: &[&str], options: &BoundsOptions) -> BoundsResult<Dataset> {
        let dims: BTreeSet<String> = if keys.is_empty() {
            let view = self.bounds();
            self.coords
                .iter()
                .filter(|(name, c)| c.attr(AXIS_ATTR).is_some() && !view.contains(name))
                .map(|(name, _)| name.clone())
                .collect()
        } else {
            keys.iter()
                .map(|key| self.resolve_dim(key))
                .collect::<BoundsResult<_>>()?
        };

        let (label, closed) = options.resolve();
        let mut out = self.clone();

        for dim in dims {
            if self.bounds().contains(&dim) {
                return Err(BoundsError::BoundsAlreadyExist(dim));
            }
            let coord = &self.coords[&dim];
            trace!(%dim, kind = coord.data.kind(), n = coord.len(), "inferring bounds");

            let (data, oriented) = coord.data.infer_bounds(label, closed)?;
            let name = options.bounds_name(&dim);
            out.link_bounds(&dim, name, BoundsVariable::new(&dim, &options.bounds_dim, data, oriented));
        }
        Ok(out)
    }

    /// Return a new dataset with externally supplied bounds attached.
    ///
    /// Replaces any bounds the coordinate already has.
    ///
    /// # Errors
    /// - `UnknownKey` if the key does not resolve
    /// - `KindMismatch` if the bounds hold a different kind of value
    /// - `LengthMismatch` if the row count differs from the coordinate length
    /// - `InvalidBounds` if a row has `lower > upper`
    pub fn assign_bounds(
        &self,
        key: &str,
        data: BoundsData,
        closed: ClosurePolicy,
        options: &BoundsOptions,
    ) -> BoundsResult<Dataset> {
        let dim = self.resolve_dim(key)?;
        let coord = &self.coords[&dim];
        if coord.data.kind() != data.kind() {
            return Err(BoundsError::KindMismatch {
                name: dim,
                coordinate: coord.data.kind(),
                bounds: data.kind(),
            });
        }
        let expected = coord.len();
        if data.len() != expected {
            return Err(BoundsError::LengthMismatch {
                name: dim,
                expected,
                actual: data.len(),
            });
        }
        data.validate()?;

        let mut out = self.clone();
        if let Some(old) = self.bounds().name_of(&dim) {
            out.bounds.remove(old);
        }
        let name = options.bounds_name(&dim);
        out.link_bounds(&dim, name, BoundsVariable::new(&dim, &options.bounds_dim, data, closed));
        Ok(out)
    }

    /// Return a new dataset with a coordinate and bounds built from intervals.
    ///
    /// The coordinate `dim` holds the value each interval is labelled by:
    /// `options.label` if set, otherwise the closed side. An existing
    /// coordinate keeps its attributes and loses its old bounds.
    ///
    /// # Errors
    /// - `EmptyIntervals` / `InconsistentClosure` for unusable intervals
    /// - `InvalidBounds` if an interval is inverted
    /// - `InexactHalfStep` / `AmbiguousOffset` for an unrepresentable midpoint
    pub fn with_intervals(
        &self,
        dim: &str,
        intervals: &IntervalData,
        options: &BoundsOptions,
    ) -> BoundsResult<Dataset> {
        let (data, bounds, closed) = intervals.split(options.label)?;
        trace!(%dim, kind = data.kind(), n = data.len(), %closed, "coordinate from intervals");

        let mut out = self.clone();
        if let Some(old) = self.bounds().name_of(dim) {
            out.bounds.remove(old);
        }
        let coord = match out.coords.remove(dim) {
            Some(old) => Coordinate { data, attrs: old.attrs },
            None => Coordinate::new(data),
        };
        out.coords.insert(dim.to_string(), coord);
        out.link_bounds(
            dim,
            options.bounds_name(dim),
            BoundsVariable::new(dim, &options.bounds_dim, bounds, closed),
        );
        Ok(out)
    }

    /// Intervals of a coordinate's bounds, using their recorded closure.
    ///
    /// # Errors
    /// - `UnknownKey` if the key does not resolve or has no bounds
    /// - `InvalidBounds` / `UnknownPolicy` from the bounds variable
    pub fn intervals(&self, key: &str) -> BoundsResult<IntervalData> {
        let dim = self.resolve_dim(key)?;
        self.bounds()
            .get(&dim)
            .ok_or(BoundsError::UnknownKey(dim))?
            .to_intervals()
    }

    fn link_bounds(&mut self, dim: &str, name: String, var: BoundsVariable) {
        if let Some(coord) = self.coords.get_mut(dim) {
            coord.attrs.insert(BOUNDS_ATTR.to_string(), name.clone());
        }
        self.bounds.insert(name, var);
    }
}

/// Read-only mapping from coordinate name to its bounds variable.
///
/// A coordinate has bounds when its `bounds` attribute names a bounds
/// variable present in the dataset.
#[derive(Clone, Copy, Debug)]
pub struct BoundsView<'a> {
    dataset: &'a Dataset,
}

impl<'a> BoundsView<'a> {
    /// Bounds variable for a coordinate.
    pub fn get(&self, dim: &str) -> Option<&'a BoundsVariable> {
        self.name_of(dim).and_then(|name| self.dataset.bounds.get(name))
    }

    /// Check if a coordinate has bounds.
    pub fn contains(&self, dim: &str) -> bool {
        self.get(dim).is_some()
    }

    /// Coordinates with bounds, in name order.
    pub fn dims(&self) -> Vec<&'a str> {
        self.iter().map(|(dim, _)| dim).collect()
    }

    /// Number of coordinates with bounds.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if no coordinate has bounds.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over `(coordinate, bounds variable)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a BoundsVariable)> + 'a {
        let dataset = self.dataset;
        dataset.coords.iter().filter_map(move |(dim, coord)| {
            coord
                .attr(BOUNDS_ATTR)
                .and_then(|name| dataset.bounds.get(name))
                .map(|var| (dim.as_str(), var))
        })
    }

    fn name_of(&self, dim: &str) -> Option<&'a str> {
        self.dataset.coords.get(dim).and_then(|c| c.attr(BOUNDS_ATTR))
    }
}
