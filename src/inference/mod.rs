//! Bounds inference for 1-D coordinates.
//!
//! Inference runs in three stages:
//! - [`analyze`]: check ordering and regular spacing, find the signed step
//! - [`compute_offset`]: turn the step and a [`LabelPolicy`](crate::types::LabelPolicy)
//!   into offsets to each cell edge
//! - [`build_bounds`]: apply the offsets to every value, producing a
//!   [`BoundsArray`](crate::types::BoundsArray)
//!
//! Every stage is pure and O(N). A failure anywhere aborts the whole call.
//!
//! # Example
//!
//! ```
//! use cf_bounds::inference::build_bounds;
//! use cf_bounds::types::{ClosurePolicy, LabelPolicy};
//!
//! let inferred = build_bounds(&[0_i64, 1, 2], LabelPolicy::Start, ClosurePolicy::Left).unwrap();
//! assert_eq!(inferred.bounds.to_pairs(), vec![[0, 1], [1, 2], [2, 3]]);
//! ```

mod builder;
mod offset;
mod spacing;

pub use builder::{build_bounds, InferredBounds};
#[cfg(feature = "parallel")]
pub use builder::build_bounds_par;
pub use offset::{compute_offset, EdgeOffsets};
pub use spacing::{analyze, SpacingReport};
