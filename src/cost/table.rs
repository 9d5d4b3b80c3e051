//! Sparse cost table keyed by node pairs.

use std::collections::HashMap;

use crate::error::{Result, TourError};
use crate::models::Node;

use super::CostOracle;

/// Arc costs stored per ordered node pair.
///
/// Works with any hashable node type. Pairs that were never inserted are
/// reported as missing, never as zero.
///
/// # Examples
///
/// ```
/// use u_tour::cost::{CostOracle, CostTable};
///
/// let mut costs = CostTable::new();
/// costs.insert_symmetric("A", "B", 4.0);
/// costs.insert("B", "C", 2.5);
/// assert_eq!(costs.cost(&"B", &"A").unwrap(), 4.0);
/// assert!(costs.cost(&"C", &"B").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CostTable<N> {
    costs: HashMap<(N, N), f64>,
}

impl<N: Node> CostTable<N> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            costs: HashMap::new(),
        }
    }

    /// Sets the cost of arc `(tail, head)`.
    pub fn insert(&mut self, tail: N, head: N, cost: f64) {
        self.costs.insert((tail, head), cost);
    }

    /// Sets the cost of both `(a, b)` and `(b, a)`.
    pub fn insert_symmetric(&mut self, a: N, b: N, cost: f64) {
        self.costs.insert((a.clone(), b.clone()), cost);
        self.costs.insert((b, a), cost);
    }

    /// Number of arcs with a known cost.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Returns `true` if no arc cost is known.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

impl<N: Node> Default for CostTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> CostOracle<N> for CostTable<N> {
    fn cost(&self, tail: &N, head: &N) -> Result<f64> {
        // Keys are owned pairs, so the lookup clones the two nodes.
        self.costs
            .get(&(tail.clone(), head.clone()))
            .copied()
            .ok_or_else(|| TourError::missing_edge(tail, head))
    }
}

impl<N: Node> FromIterator<((N, N), f64)> for CostTable<N> {
    fn from_iter<I: IntoIterator<Item = ((N, N), f64)>>(iter: I) -> Self {
        Self {
            costs: iter.into_iter().collect(),
        }
    }
}
