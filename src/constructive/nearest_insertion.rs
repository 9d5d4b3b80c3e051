//! Nearest-insertion constructive heuristic.
//!
//! Grows a tour one node at a time. The next node is the uninserted node
//! closest to any node already on the tour; it is spliced into the arc
//! where it adds the least cost.
//!
//! # Complexity
//!
//! O(n²) cost lookups: each step scans the uninserted nodes and every
//! arc of the tour once.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem",
//! *SIAM Journal on Computing* 6(3), 563-581.

use crate::cost::CostOracle;
use crate::error::Result;
use crate::models::{Cycle, Node};

use super::insertion::find_insertion;
use super::seed::{initial_cycle, SeedArc};

/// Which uninserted node is taken next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Proximity {
    /// Smallest distance to the tour; seeded with the cheapest arc.
    Nearest,
    /// Largest distance to the tour; seeded with the costliest arc.
    Farthest,
}

impl Proximity {
    fn seed_arc(self) -> SeedArc {
        match self {
            Proximity::Nearest => SeedArc::Cheapest,
            Proximity::Farthest => SeedArc::Costliest,
        }
    }

    fn prefers(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Proximity::Nearest => candidate < incumbent,
            Proximity::Farthest => candidate > incumbent,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Proximity::Nearest => "nearest_insertion",
            Proximity::Farthest => "farthest_insertion",
        }
    }
}

/// Constructs a tour using the nearest-insertion heuristic.
///
/// Without a seed the tour opens as `[u, v, u]` over the cheapest arc
/// `(u, v)`. Every step picks the uninserted node with the smallest cost
/// to the current tour (first in universe order on ties) and inserts it
/// at its cheapest arc.
///
/// Returns the closed tour and its total cost. A seed must span at least
/// two distinct nodes if any node is left to insert, otherwise the first
/// insertion fails with [`TourError::EmptyCycle`].
///
/// [`TourError::EmptyCycle`]: crate::TourError::EmptyCycle
///
/// # Examples
///
/// ```
/// use u_tour::constructive::nearest_insertion;
/// use u_tour::cost::DistanceMatrix;
/// use u_tour::models::Point;
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(4.0, 0.0),
///     Point::new(4.0, 3.0),
///     Point::new(0.0, 3.0),
/// ]);
/// let (tour, cost) = nearest_insertion(&dm.nodes(), &dm, None).unwrap();
/// assert!(tour.is_tour_of(&dm.nodes()));
/// assert!((cost - 14.0).abs() < 1e-10);
/// ```
pub fn nearest_insertion<N, C>(
    universe: &[N],
    costs: &C,
    seed: Option<&Cycle<N>>,
) -> Result<(Cycle<N>, f64)>
where
    N: Node,
    C: CostOracle<N> + ?Sized,
{
    insert_by_proximity(universe, costs, seed, Proximity::Nearest)
}

/// Shared loop of nearest and farthest insertion.
pub(crate) fn insert_by_proximity<N, C>(
    universe: &[N],
    costs: &C,
    seed: Option<&Cycle<N>>,
    proximity: Proximity,
) -> Result<(Cycle<N>, f64)>
where
    N: Node,
    C: CostOracle<N> + ?Sized,
{
    let (mut cycle, remaining) = initial_cycle(universe, costs, seed, proximity.seed_arc())?;
    let mut total = cycle.cost(costs)?;

    // Cost from each uninserted node to its closest node on the tour.
    let mut to_tour: Vec<(N, f64)> = Vec::with_capacity(remaining.len());
    for node in remaining {
        let mut closest = f64::INFINITY;
        for v in cycle.nodes() {
            closest = closest.min(costs.cost(&node, v)?);
        }
        to_tour.push((node, closest));
    }

    while !to_tour.is_empty() {
        let mut pick = 0;
        for (i, (_, d)) in to_tour.iter().enumerate().skip(1) {
            if proximity.prefers(*d, to_tour[pick].1) {
                pick = i;
            }
        }
        let (node, _) = to_tour.remove(pick);

        let best = find_insertion(&cycle, &node, costs)?;
        cycle.insert_after(&best.pred, node.clone())?;
        total += best.cost;

        // Distances to the tour only shrink as it grows.
        for (other, d) in to_tour.iter_mut() {
            *d = d.min(costs.cost(other, &node)?);
        }
    }

    tracing::debug!(
        heuristic = proximity.name(),
        nodes = cycle.num_nodes(),
        cost = total,
        "tour constructed"
    );
    Ok((cycle, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::{CostTable, DistanceMatrix};
    use crate::error::TourError;
    use crate::models::Point;

    fn rectangle() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 3.0),
            Point::new(0.0, 3.0),
            Point::new(2.0, -1.0),
        ])
    }

    #[test]
    fn test_ni_visits_every_node() {
        let dm = rectangle();
        let (tour, cost) = nearest_insertion(&dm.nodes(), &dm, None).expect("complete");
        assert!(tour.is_tour_of(&dm.nodes()));
        assert!((tour.cost(&dm).expect("complete") - cost).abs() < 1e-10);
    }

    #[test]
    fn test_ni_seeds_with_cheapest_arc() {
        // Cheapest arc is 0-4 (√5, tied with 1-4 but scanned first).
        let dm = rectangle();
        let (tour, cost) = nearest_insertion(&dm.nodes(), &dm, None).expect("complete");
        assert_eq!(tour.nodes(), &[0, 3, 2, 1, 4, 0]);
        assert!((cost - (10.0 + 2.0 * 5f64.sqrt())).abs() < 1e-10);
    }

    #[test]
    fn test_ni_with_seed() {
        let dm = rectangle();
        let seed = Cycle::from_open(vec![2, 3, 0]).expect("valid");
        let (tour, cost) = nearest_insertion(&dm.nodes(), &dm, Some(&seed)).expect("complete");
        assert_eq!(*tour.first(), 2);
        assert!(tour.is_tour_of(&dm.nodes()));
        assert!((tour.cost(&dm).expect("complete") - cost).abs() < 1e-10);
    }

    #[test]
    fn test_ni_full_seed_unchanged() {
        let dm = rectangle();
        let seed = Cycle::from_open(dm.nodes()).expect("valid");
        let (tour, cost) = nearest_insertion(&dm.nodes(), &dm, Some(&seed)).expect("complete");
        assert_eq!(tour, seed);
        assert!((cost - seed.cost(&dm).expect("complete")).abs() < 1e-10);
    }

    #[test]
    fn test_ni_single_node_seed_rejected() {
        let dm = rectangle();
        let seed = Cycle::from_open(vec![2]).expect("valid");
        assert_eq!(
            nearest_insertion(&dm.nodes(), &dm, Some(&seed)),
            Err(TourError::EmptyCycle { len: 2 })
        );
    }

    #[test]
    fn test_ni_too_few_nodes() {
        let dm = DistanceMatrix::new(1);
        assert_eq!(
            nearest_insertion(&dm.nodes(), &dm, None),
            Err(TourError::EmptyUniverse)
        );
    }

    #[test]
    fn test_ni_missing_cost() {
        let mut costs = CostTable::new();
        costs.insert_symmetric('A', 'B', 1.0);
        costs.insert_symmetric('B', 'C', 1.0);
        assert!(matches!(
            nearest_insertion(&['A', 'B', 'C'], &costs, None),
            Err(TourError::MissingEdgeCost { .. })
        ));
    }
}
