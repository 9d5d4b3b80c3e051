//! 2-opt tour improvement.
//!
//! # Algorithm
//!
//! For positions `1 <= a < b <= len - 2` of the closed sequence, removing
//! arcs `(pred(a), a)` and `(b, succ(b))` and reconnecting with
//! `(pred(a), b)` and `(a, succ(b))` saves
//!
//! ```text
//! savings = c(pred(a), a) + c(b, succ(b)) - c(pred(a), b) - c(a, succ(b))
//!         + sum over a <= k < b of (c(x_k, x_k+1) - c(x_k+1, x_k))
//! ```
//!
//! Pairs are scanned row by row and the *first* pair saving more than the
//! tolerance is applied by reversing the run `a..=b`. The scan then restarts
//! from the top of the new sequence (first-improvement strategy). The search
//! ends when a full scan finds nothing to apply.
//!
//! The second line accounts for the arcs inside the run, which change
//! direction when it is reversed. It is zero for symmetric costs. With it
//! the savings are the exact drop in tour cost, so every applied exchange
//! lowers the cost by more than the tolerance and the search terminates on
//! asymmetric oracles too.
//!
//! # Complexity
//!
//! O(n²) per scan, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::cost::CostOracle;
use crate::error::Result;
use crate::models::{Cycle, Node};

use super::TwoOptConfig;

/// An improving 2-opt move.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange<N> {
    /// Arcs `(pred(a), a)` and `(b, succ(b))`.
    pub removed: [(N, N); 2],
    /// Arcs `(pred(a), b)` and `(a, succ(b))`.
    pub added: [(N, N); 2],
    /// Exact decrease in tour cost, including the arcs of the reversed run.
    pub savings: f64,
}

impl<N> Exchange<N> {
    /// First node of the reversed run.
    pub fn segment_start(&self) -> &N {
        &self.removed[0].1
    }

    /// Last node of the reversed run.
    pub fn segment_end(&self) -> &N {
        &self.removed[1].0
    }
}

/// Returns the first exchange, in scan order, that saves more than `tolerance`.
///
/// Cycles with fewer than 4 distinct nodes have no exchange.
pub fn find_first_improving_exchange<N, C>(
    cycle: &Cycle<N>,
    costs: &C,
    tolerance: f64,
) -> Result<Option<Exchange<N>>>
where
    N: Node,
    C: CostOracle<N> + ?Sized,
{
    let seq = cycle.nodes();
    if seq.len() < 5 {
        return Ok(None);
    }

    for a_idx in 1..seq.len() - 2 {
        let pred_a = &seq[a_idx - 1];
        let a = &seq[a_idx];
        let leaving_a = costs.cost(pred_a, a)?;
        // Forward minus backward cost of the run a..=b, extended as b moves.
        let mut reversal = 0.0;
        for b_idx in a_idx + 1..seq.len() - 1 {
            let prev_b = &seq[b_idx - 1];
            let b = &seq[b_idx];
            let succ_b = &seq[b_idx + 1];
            reversal += costs.cost(prev_b, b)? - costs.cost(b, prev_b)?;
            let savings = leaving_a + costs.cost(b, succ_b)?
                - costs.cost(pred_a, b)?
                - costs.cost(a, succ_b)?
                + reversal;
            if savings > tolerance {
                return Ok(Some(Exchange {
                    removed: [(pred_a.clone(), a.clone()), (b.clone(), succ_b.clone())],
                    added: [(pred_a.clone(), b.clone()), (a.clone(), succ_b.clone())],
                    savings,
                }));
            }
        }
    }
    Ok(None)
}

/// Improves a tour with first-improvement 2-opt using the default config.
///
/// Returns the locally optimal tour and its total cost. The result never
/// costs more than the input.
///
/// # Examples
///
/// ```
/// use u_tour::cost::DistanceMatrix;
/// use u_tour::local_search::two_opt;
/// use u_tour::models::{Cycle, Point};
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ]);
///
/// // 0→2→1→3→0 crosses itself along both diagonals.
/// let crossing = Cycle::from_open(vec![0, 2, 1, 3]).unwrap();
/// let (improved, cost) = two_opt(&crossing, &dm).unwrap();
/// assert_eq!(improved.nodes(), &[0, 1, 2, 3, 0]);
/// assert!((cost - 4.0).abs() < 1e-10);
/// ```
pub fn two_opt<N, C>(cycle: &Cycle<N>, costs: &C) -> Result<(Cycle<N>, f64)>
where
    N: Node,
    C: CostOracle<N> + ?Sized,
{
    two_opt_with_config(cycle, costs, &TwoOptConfig::default())
}

/// Improves a tour with first-improvement 2-opt.
///
/// Each applied exchange lowers the running cost by its savings. With
/// `max_iterations` set, the search stops after that many exchanges even if
/// more improvement is available.
pub fn two_opt_with_config<N, C>(
    cycle: &Cycle<N>,
    costs: &C,
    config: &TwoOptConfig,
) -> Result<(Cycle<N>, f64)>
where
    N: Node,
    C: CostOracle<N> + ?Sized,
{
    let mut current = cycle.clone();
    let mut total = current.cost(costs)?;
    let mut applied = 0usize;

    loop {
        if config.max_iterations.is_some_and(|max| applied >= max) {
            tracing::debug!(exchanges = applied, cost = total, "2-opt iteration limit reached");
            return Ok((current, total));
        }
        let Some(exchange) = find_first_improving_exchange(&current, costs, config.tolerance)?
        else {
            break;
        };

        current.flip(exchange.segment_start(), exchange.segment_end())?;
        total -= exchange.savings;
        applied += 1;
        tracing::trace!(
            iteration = applied,
            savings = exchange.savings,
            cost = total,
            "2-opt exchange applied"
        );
    }

    tracing::debug!(exchanges = applied, cost = total, "2-opt reached local optimum");
    Ok((current, total))
}
