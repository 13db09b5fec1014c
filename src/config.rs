//! Options for bounds inference on datasets.

use crate::types::{ClosurePolicy, LabelPolicy};

/// Default name of the bounds dimension (size 2).
pub const DEFAULT_BOUNDS_DIM: &str = "bnds";

/// Options for inferring and naming bounds variables.
///
/// # Example
///
/// ```
/// use cf_bounds::BoundsOptions;
/// use cf_bounds::types::{ClosurePolicy, LabelPolicy};
///
/// let options = BoundsOptions::default().with_closed(ClosurePolicy::Right);
/// assert_eq!(options.resolve(), (LabelPolicy::End, ClosurePolicy::Right));
/// assert_eq!(options.bounds_name("time"), "time_bnds");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundsOptions {
    /// Name of the trailing bounds dimension
    pub bounds_dim: String,
    /// Label policy; derived from `closed` when unset
    pub label: Option<LabelPolicy>,
    /// Closure policy; derived from `label` when unset
    pub closed: Option<ClosurePolicy>,
}

impl Default for BoundsOptions {
    fn default() -> Self {
        Self {
            bounds_dim: DEFAULT_BOUNDS_DIM.to_string(),
            label: None,
            closed: None,
        }
    }
}

impl BoundsOptions {
    /// Options with explicit label and closure.
    pub fn new(label: LabelPolicy, closed: ClosurePolicy) -> Self {
        Self::default().with_label(label).with_closed(closed)
    }

    /// Set the label policy.
    pub fn with_label(mut self, label: LabelPolicy) -> Self {
        self.label = Some(label);
        self
    }

    /// Set the closure policy.
    pub fn with_closed(mut self, closed: ClosurePolicy) -> Self {
        self.closed = Some(closed);
        self
    }

    /// Set the bounds dimension name.
    pub fn with_bounds_dim(mut self, bounds_dim: impl Into<String>) -> Self {
        self.bounds_dim = bounds_dim.into();
        self
    }

    /// Effective label and closure.
    ///
    /// An unset label follows the closure and an unset closure follows the
    /// label; with neither set the result is `(Start, Left)`.
    pub fn resolve(&self) -> (LabelPolicy, ClosurePolicy) {
        match (self.label, self.closed) {
            (Some(label), Some(closed)) => (label, closed),
            (Some(label), None) => (label, ClosurePolicy::implied_by(label)),
            (None, Some(closed)) => (LabelPolicy::implied_by(closed), closed),
            (None, None) => (LabelPolicy::Start, ClosurePolicy::Left),
        }
    }

    /// Name of the bounds variable for a dimension.
    pub fn bounds_name(&self, dim: &str) -> String {
        format!("{}_{}", dim, self.bounds_dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolution() {
        assert_eq!(
            BoundsOptions::default().resolve(),
            (LabelPolicy::Start, ClosurePolicy::Left)
        );
    }

    #[test]
    fn test_closed_follows_label() {
        let options = BoundsOptions::default().with_label(LabelPolicy::End);
        assert_eq!(options.resolve(), (LabelPolicy::End, ClosurePolicy::Right));

        let options = BoundsOptions::default().with_label(LabelPolicy::Middle);
        assert_eq!(options.resolve(), (LabelPolicy::Middle, ClosurePolicy::Left));
    }

    #[test]
    fn test_explicit_values_win() {
        let options = BoundsOptions::new(LabelPolicy::Start, ClosurePolicy::Right);
        assert_eq!(options.resolve(), (LabelPolicy::Start, ClosurePolicy::Right));
    }

    #[test]
    fn test_custom_bounds_dim() {
        let options = BoundsOptions::default().with_bounds_dim("nv");
        assert_eq!(options.bounds_name("lat"), "lat_nv");
    }
}
