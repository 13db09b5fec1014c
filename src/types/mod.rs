//! Strongly-typed domain types for bounds inference.
//!
//! This module provides the enumerated policies and the bounds containers
//! shared by the inference engine, the interval converter and the dataset
//! shell.
//!
//! # Example
//!
//! ```
//! use cf_bounds::types::{BoundsArray, CellBounds, ClosurePolicy, LabelPolicy};
//!
//! let label: LabelPolicy = "middle".parse().unwrap();
//! assert_eq!(label, LabelPolicy::Middle);
//!
//! let bounds = BoundsArray::from_pairs(vec![(-0.5, 0.5), (0.5, 1.5)]);
//! assert_eq!(bounds[1], CellBounds::new(0.5, 1.5));
//! assert_eq!(bounds.locate(&0.5, ClosurePolicy::Left), Some(1));
//! ```

mod bounds;
mod policy;

pub use bounds::{BoundsArray, CellBounds};
pub use policy::{ClosurePolicy, Direction, LabelPolicy};
