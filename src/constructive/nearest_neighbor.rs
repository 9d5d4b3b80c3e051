//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from a given node, always travel to the
//! nearest unvisited node, then return to the start once every node has
//! been visited.
//!
//! # Complexity
//!
//! O(n²) cost lookups where n = number of nodes.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for the TSP. While solution
//! quality is typically 20-25% above optimal, it provides a fast baseline.

use crate::cost::CostOracle;
use crate::error::{Result, TourError};
use crate::models::{Cycle, Node};

use super::seed::distinct_nodes;

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// Unvisited nodes are scanned in universe order and a candidate replaces
/// the running best when its cost is less than *or equal to* it, so among
/// equally near nodes the one scanned last is chosen.
///
/// Returns the closed tour and its total cost. A universe of one node gives
/// `[start, start]` at cost 0; the self-arc is never looked up.
///
/// # Errors
///
/// [`TourError::EmptyUniverse`] if `universe` is empty,
/// [`TourError::NodeNotFound`] if `start` is not in `universe`, and
/// [`TourError::MissingEdgeCost`] for any undefined arc.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::nearest_neighbor;
/// use u_tour::cost::CostTable;
///
/// let mut costs = CostTable::new();
/// costs.insert_symmetric("A", "B", 1.0);
/// costs.insert_symmetric("B", "C", 2.0);
/// costs.insert_symmetric("A", "C", 10.0);
///
/// let (tour, cost) = nearest_neighbor(&["A", "B", "C"], &costs, &"A").unwrap();
/// assert_eq!(tour.nodes(), &["A", "B", "C", "A"]);
/// assert!((cost - 13.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor<N, C>(universe: &[N], costs: &C, start: &N) -> Result<(Cycle<N>, f64)>
where
    N: Node,
    C: CostOracle<N> + ?Sized,
{
    if universe.is_empty() {
        return Err(TourError::EmptyUniverse);
    }
    if !universe.contains(start) {
        return Err(TourError::node_not_found(start));
    }

    let mut unvisited: Vec<N> = distinct_nodes(universe)
        .into_iter()
        .filter(|n| n != start)
        .collect();
    let mut path = Vec::with_capacity(unvisited.len() + 2);
    path.push(start.clone());
    let mut total = 0.0;

    while !unvisited.is_empty() {
        let end = &path[path.len() - 1];
        let mut best: Option<(usize, f64)> = None;
        for (i, node) in unvisited.iter().enumerate() {
            let c = costs.cost(end, node)?;
            if best.is_none_or(|(_, b)| c <= b) {
                best = Some((i, c));
            }
        }
        // The loop guard ensures at least one candidate was scanned.
        if let Some((idx, c)) = best {
            path.push(unvisited.remove(idx));
            total += c;
        }
    }

    if path.len() > 1 {
        total += costs.cost(&path[path.len() - 1], start)?;
    }
    path.push(start.clone());

    let cycle = Cycle::from_closed(path)?;
    tracing::debug!(
        heuristic = "nearest_neighbor",
        nodes = cycle.num_nodes(),
        cost = total,
        "tour constructed"
    );
    Ok((cycle, total))
}

/// Runs [`nearest_neighbor`] from every node and keeps the cheapest tour.
///
/// Start nodes are tried in universe order; a later tour replaces the
/// incumbent only if it is strictly cheaper.
pub fn best_nearest_neighbor<N, C>(universe: &[N], costs: &C) -> Result<(Cycle<N>, f64)>
where
    N: Node,
    C: CostOracle<N> + ?Sized,
{
    let mut best: Option<(Cycle<N>, f64)> = None;
    for start in distinct_nodes(universe) {
        let (cycle, cost) = nearest_neighbor(universe, costs, &start)?;
        if best.as_ref().is_none_or(|(_, b)| cost < *b) {
            best = Some((cycle, cost));
        }
    }
    best.ok_or(TourError::EmptyUniverse)
}
