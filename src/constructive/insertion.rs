//! Cheapest insertion location for a single node.

use crate::cost::CostOracle;
use crate::error::{Result, TourError};
use crate::models::{Cycle, Node};

/// Where and at what marginal cost a node is best spliced into a cycle.
///
/// `cost` is `c(pred, node) + c(node, succ) - c(pred, succ)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Insertion<N> {
    /// Tail of the arc to be split.
    pub pred: N,
    /// Head of the arc to be split.
    pub succ: N,
    /// Marginal cost of the insertion.
    pub cost: f64,
}

/// Marginal cost of splitting arc `(pred, succ)` with `node`.
pub(crate) fn insertion_cost<N, C>(pred: &N, node: &N, succ: &N, costs: &C) -> Result<f64>
where
    C: CostOracle<N> + ?Sized,
{
    Ok(costs.cost(pred, node)? + costs.cost(node, succ)? - costs.cost(pred, succ)?)
}

/// Finds the arc of `cycle` into which `node` is cheapest to insert.
///
/// Every arc is tried in traversal order; on equal cost the first arc
/// encountered is kept. The cycle is not modified.
///
/// # Errors
///
/// [`TourError::EmptyCycle`] if the cycle has fewer than 2 distinct nodes
/// (the loop `[a, a]` has no arc between different nodes), and
/// [`TourError::MissingEdgeCost`] for any undefined arc.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::find_insertion;
/// use u_tour::cost::CostTable;
/// use u_tour::models::Cycle;
///
/// let mut costs = CostTable::new();
/// costs.insert_symmetric('A', 'B', 5.0);
/// costs.insert_symmetric('A', 'C', 3.0);
/// costs.insert_symmetric('C', 'B', 4.0);
///
/// let cycle = Cycle::from_closed(vec!['A', 'B', 'A']).unwrap();
/// let best = find_insertion(&cycle, &'C', &costs).unwrap();
/// assert_eq!((best.pred, best.succ), ('A', 'B'));
/// assert!((best.cost - 2.0).abs() < 1e-10);
/// ```
pub fn find_insertion<N, C>(cycle: &Cycle<N>, node: &N, costs: &C) -> Result<Insertion<N>>
where
    N: Node,
    C: CostOracle<N> + ?Sized,
{
    if cycle.num_nodes() < 2 {
        return Err(TourError::EmptyCycle { len: cycle.len() });
    }
    let mut best: Option<Insertion<N>> = None;
    for (pred, succ) in cycle.edges() {
        let cost = insertion_cost(pred, node, succ, costs)?;
        if best.as_ref().is_none_or(|b| cost < b.cost) {
            best = Some(Insertion {
                pred: pred.clone(),
                succ: succ.clone(),
                cost,
            });
        }
    }
    best.ok_or(TourError::EmptyCycle { len: cycle.len() })
}
