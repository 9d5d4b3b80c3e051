//! Cheapest-insertion constructive heuristic.
//!
//! Every uninserted node keeps its best [`Insertion`] into the current tour.
//! Each step performs the globally cheapest of these.
//!
//! After node `j` is spliced into arc `(i, k)` only two things change: arc
//! `(i, k)` is gone and arcs `(i, j)`, `(j, k)` are new. Nodes whose best
//! insertion used `(i, k)` are rescanned against the whole tour; every other
//! node only needs to be tried against the two new arcs.
//!
//! # Complexity
//!
//! O(n²) cost lookups in the typical case, O(n³) if most nodes keep
//! targeting the arc that was just split.

use crate::cost::CostOracle;
use crate::error::Result;
use crate::models::{Cycle, Node};

use super::insertion::{find_insertion, insertion_cost, Insertion};
use super::seed::{initial_cycle, SeedArc};

/// Constructs a tour using the cheapest-insertion heuristic.
///
/// Without a seed the tour opens as `[u, v, u]` over the cheapest arc.
/// Ties between nodes go to the first in universe order.
///
/// Returns the closed tour and its total cost.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::cheapest_insertion;
/// use u_tour::cost::DistanceMatrix;
/// use u_tour::models::Point;
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(4.0, 0.0),
///     Point::new(4.0, 3.0),
///     Point::new(0.0, 3.0),
/// ]);
/// let (tour, cost) = cheapest_insertion(&dm.nodes(), &dm, None).unwrap();
/// assert!(tour.is_tour_of(&dm.nodes()));
/// assert!((cost - 14.0).abs() < 1e-10);
/// ```
pub fn cheapest_insertion<N, C>(
    universe: &[N],
    costs: &C,
    seed: Option<&Cycle<N>>,
) -> Result<(Cycle<N>, f64)>
where
    N: Node,
    C: CostOracle<N> + ?Sized,
{
    let (mut cycle, remaining) = initial_cycle(universe, costs, seed, SeedArc::Cheapest)?;
    let mut total = cycle.cost(costs)?;

    let mut pending: Vec<(N, Insertion<N>)> = Vec::with_capacity(remaining.len());
    for node in remaining {
        let best = find_insertion(&cycle, &node, costs)?;
        pending.push((node, best));
    }

    while !pending.is_empty() {
        let mut pick = 0;
        for (idx, (_, ins)) in pending.iter().enumerate().skip(1) {
            if ins.cost < pending[pick].1.cost {
                pick = idx;
            }
        }
        let (j, Insertion { pred: i, succ: k, cost }) = pending.remove(pick);
        cycle.insert_after(&i, j.clone())?;
        total += cost;

        for (node, best) in pending.iter_mut() {
            if best.pred == i && best.succ == k {
                *best = find_insertion(&cycle, node, costs)?;
                continue;
            }
            for (pred, succ) in [(&i, &j), (&j, &k)] {
                let trial = insertion_cost(pred, node, succ, costs)?;
                if trial < best.cost {
                    *best = Insertion {
                        pred: pred.clone(),
                        succ: succ.clone(),
                        cost: trial,
                    };
                }
            }
        }
    }

    tracing::debug!(
        heuristic = "cheapest_insertion",
        nodes = cycle.num_nodes(),
        cost = total,
        "tour constructed"
    );
    Ok((cycle, total))
}
