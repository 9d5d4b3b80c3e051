//! The cost oracle abstraction.

use crate::error::Result;

/// Read-only lookup of the cost of traversing arc `(tail, head)`.
///
/// Implementations must return [`TourError::MissingEdgeCost`] for pairs
/// they do not know about rather than defaulting to zero or infinity.
/// Lookups must be free of side effects; heuristics may query the same
/// pair any number of times.
///
/// [`TourError::MissingEdgeCost`]: crate::error::TourError::MissingEdgeCost
pub trait CostOracle<N: ?Sized> {
    /// Returns the cost of arc `(tail, head)`.
    fn cost(&self, tail: &N, head: &N) -> Result<f64>;
}

impl<N: ?Sized, O: CostOracle<N> + ?Sized> CostOracle<N> for &O {
    fn cost(&self, tail: &N, head: &N) -> Result<f64> {
        (**self).cost(tail, head)
    }
}
