//! # cf-bounds
//!
//! Cell bounds inference for CF-convention coordinates.
//!
//! Gridded data stores a single value per cell along each axis. This crate
//! reconstructs the cell edges from those values and converts between edge
//! pairs and intervals with explicit closure:
//! - Spacing analysis (monotonicity, regular step, direction)
//! - Calendar-safe edge offsets for numbers, naive timestamps and time zones
//! - Bounds inference for `Start`, `Middle` and `End` labelling
//! - Bounds <-> interval conversion with a uniform closure
//! - An in-memory dataset shell with CF `bounds` linkage
//! - NetCDF export (`netcdf` feature)
//!
//! # Example
//!
//! ```
//! use cf_bounds::{build_bounds, interval_to_bounds};
//! use cf_bounds::types::{ClosurePolicy, LabelPolicy};
//!
//! let inferred = build_bounds(&[0.5, 1.5, 2.5], LabelPolicy::Middle, ClosurePolicy::Left).unwrap();
//! assert_eq!(inferred.bounds.to_pairs(), vec![[0.0, 1.0], [1.0, 2.0], [2.0, 3.0]]);
//!
//! let intervals = inferred.to_intervals().unwrap();
//! assert_eq!(intervals[0].to_string(), "[0, 1)");
//! assert_eq!(interval_to_bounds(&intervals).unwrap().0, inferred.bounds);
//! ```

pub mod config;
pub mod coordinate;
pub mod dataset;
pub mod error;
pub mod inference;
pub mod interval;
pub mod io;
pub mod types;

pub use config::{BoundsOptions, DEFAULT_BOUNDS_DIM};
pub use coordinate::{CoordinateStep, CoordinateValue};
pub use dataset::{BoundsView, Dataset};
pub use error::{BoundsError, BoundsResult};
#[cfg(feature = "parallel")]
pub use inference::build_bounds_par;
pub use inference::{analyze, build_bounds, compute_offset, EdgeOffsets, InferredBounds, SpacingReport};
pub use interval::{bounds_to_interval, interval_labels, interval_to_bounds, Interval};
pub use types::{BoundsArray, CellBounds, ClosurePolicy, Direction, LabelPolicy};
