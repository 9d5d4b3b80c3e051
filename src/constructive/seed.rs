//! Starting cycles for the insertion heuristics.

use std::collections::HashSet;

use crate::cost::CostOracle;
use crate::error::{Result, TourError};
use crate::models::{Cycle, Node};

/// Which extreme arc opens an unseeded tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SeedArc {
    Cheapest,
    Costliest,
}

/// Universe nodes in first-seen order with repeats dropped.
pub(crate) fn distinct_nodes<N: Node>(universe: &[N]) -> Vec<N> {
    let mut seen = HashSet::with_capacity(universe.len());
    universe
        .iter()
        .filter(|n| seen.insert(*n))
        .cloned()
        .collect()
}

/// The cheapest (or costliest) arc `(u, v)`, `u != v`, over the universe.
///
/// Ordered pairs are scanned row by row in universe order and the first
/// extreme arc found is kept.
fn extreme_arc<N, C>(nodes: &[N], costs: &C, which: SeedArc) -> Result<Option<(N, N)>>
where
    N: Node,
    C: CostOracle<N> + ?Sized,
{
    let mut best: Option<(&N, &N, f64)> = None;
    for u in nodes {
        for v in nodes {
            if u == v {
                continue;
            }
            let c = costs.cost(u, v)?;
            let better = match (which, &best) {
                (_, None) => true,
                (SeedArc::Cheapest, Some((_, _, b))) => c < *b,
                (SeedArc::Costliest, Some((_, _, b))) => c > *b,
            };
            if better {
                best = Some((u, v, c));
            }
        }
    }
    Ok(best.map(|(u, v, _)| (u.clone(), v.clone())))
}

/// The cycle an insertion heuristic starts from, plus the nodes left to insert.
///
/// A provided seed is copied as is. Otherwise the tour opens as the loop
/// `[u, v, u]` over the extreme arc.
pub(crate) fn initial_cycle<N, C>(
    universe: &[N],
    costs: &C,
    seed: Option<&Cycle<N>>,
    which: SeedArc,
) -> Result<(Cycle<N>, Vec<N>)>
where
    N: Node,
    C: CostOracle<N> + ?Sized,
{
    let nodes = distinct_nodes(universe);
    let cycle = match seed {
        Some(seed) => seed.clone(),
        None => {
            let (u, v) = extreme_arc(&nodes, costs, which)?.ok_or(TourError::EmptyUniverse)?;
            Cycle::from_closed(vec![u.clone(), v, u])?
        }
    };
    let remaining = nodes.into_iter().filter(|n| !cycle.contains(n)).collect();
    Ok((cycle, remaining))
}
