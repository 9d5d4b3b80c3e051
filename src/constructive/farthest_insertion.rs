//! Farthest-insertion constructive heuristic.
//!
//! Same loop as nearest insertion, but the next node is the uninserted node
//! whose closest tour node is *farthest* away. Placing outliers early tends
//! to fix the rough shape of the tour before the cheap nodes are filled in.

use crate::cost::CostOracle;
use crate::error::Result;
use crate::models::{Cycle, Node};

use super::nearest_insertion::{insert_by_proximity, Proximity};

/// Constructs a tour using the farthest-insertion heuristic.
///
/// Without a seed the tour opens as `[u, v, u]` over the costliest arc
/// `(u, v)`. Every step picks the uninserted node with the largest cost to
/// the current tour (first in universe order on ties) and inserts it at its
/// cheapest arc.
///
/// Returns the closed tour and its total cost.
pub fn farthest_insertion<N, C>(
    universe: &[N],
    costs: &C,
    seed: Option<&Cycle<N>>,
) -> Result<(Cycle<N>, f64)>
where
    N: Node,
    C: CostOracle<N> + ?Sized,
{
    insert_by_proximity(universe, costs, seed, Proximity::Farthest)
}
