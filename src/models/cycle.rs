//! Closed tour sequence.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cost::CostOracle;
use crate::error::{Result, TourError};

use super::Node;

/// A closed tour `[v0, v1, ..., v(n-1), v0]` over distinct nodes.
///
/// The first and last entries are always the same node and no other node
/// repeats. Rotation and segment reversal work in place on the open part
/// `[v0, ..., v(n-1)]` and then rewrite the closing entry, so neither
/// allocates.
///
/// # Examples
///
/// ```
/// use u_tour::models::Cycle;
///
/// let cycle = Cycle::from_open(vec!['A', 'B', 'C']).unwrap();
/// assert_eq!(cycle.nodes(), &['A', 'B', 'C', 'A']);
/// assert_eq!(cycle.num_nodes(), 3);
///
/// let rotated = cycle.reorder(&'B').unwrap();
/// assert_eq!(rotated.nodes(), &['B', 'C', 'A', 'B']);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<N>",
    into = "Vec<N>",
    bound(serialize = "N: Node + Serialize", deserialize = "N: Node + Deserialize<'de>")
)]
pub struct Cycle<N> {
    nodes: Vec<N>,
}

impl<N: Node> Cycle<N> {
    /// Builds a cycle from a closed sequence whose last entry repeats the first.
    ///
    /// Fails with [`TourError::EmptyCycle`] below two entries and with
    /// [`TourError::InvalidCycle`] if the sequence is open or revisits a node.
    pub fn from_closed(nodes: Vec<N>) -> Result<Self> {
        if nodes.len() < 2 {
            return Err(TourError::EmptyCycle { len: nodes.len() });
        }
        if nodes[0] != nodes[nodes.len() - 1] {
            return Err(TourError::InvalidCycle(format!(
                "first entry {:?} differs from last entry {:?}",
                nodes[0],
                nodes[nodes.len() - 1]
            )));
        }
        let mut seen = HashSet::with_capacity(nodes.len());
        for node in &nodes[..nodes.len() - 1] {
            if !seen.insert(node) {
                return Err(TourError::InvalidCycle(format!(
                    "node {node:?} is visited more than once"
                )));
            }
        }
        Ok(Self { nodes })
    }

    /// Builds a cycle from an open visiting order, appending the closing entry.
    pub fn from_open(mut nodes: Vec<N>) -> Result<Self> {
        match nodes.first() {
            Some(first) => {
                let first = first.clone();
                nodes.push(first);
                Self::from_closed(nodes)
            }
            None => Err(TourError::EmptyCycle { len: 0 }),
        }
    }

    /// The full closed sequence, including the closing duplicate.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Consumes the cycle, returning the closed sequence.
    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    /// Number of entries, including the closing duplicate.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a cycle holds at least one node and its closing entry.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct nodes on the tour.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len() - 1
    }

    /// The start (and end) node.
    pub fn first(&self) -> &N {
        &self.nodes[0]
    }

    /// Position of `node` in the open part of the sequence.
    pub fn position(&self, node: &N) -> Option<usize> {
        self.open().iter().position(|n| n == node)
    }

    /// Returns `true` if `node` is on the tour.
    pub fn contains(&self, node: &N) -> bool {
        self.position(node).is_some()
    }

    /// Consecutive arcs `(v_i, v_i+1)` in traversal order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.nodes.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Total cost: the sum of oracle lookups over consecutive arcs.
    ///
    /// The one-node loop `[a, a]` costs 0 without a lookup for `(a, a)`.
    pub fn cost<C: CostOracle<N> + ?Sized>(&self, costs: &C) -> Result<f64> {
        if self.num_nodes() < 2 {
            return Ok(0.0);
        }
        self.edges()
            .try_fold(0.0, |total, (tail, head)| -> Result<f64> {
                Ok(total + costs.cost(tail, head)?)
            })
    }

    /// Returns `true` if the tour visits exactly the nodes of `universe`.
    pub fn is_tour_of(&self, universe: &[N]) -> bool {
        let expected: HashSet<&N> = universe.iter().collect();
        expected.len() == self.num_nodes() && self.open().iter().all(|n| expected.contains(n))
    }

    /// Rotates the tour in place so that it starts and ends at `start`.
    pub fn rotate_to(&mut self, start: &N) -> Result<()> {
        let idx = self
            .position(start)
            .ok_or_else(|| TourError::node_not_found(start))?;
        self.rotate_open(idx);
        Ok(())
    }

    /// Returns an equivalent tour that starts and ends at `start`.
    ///
    /// The arc set and total cost are unchanged.
    pub fn reorder(&self, start: &N) -> Result<Self> {
        let mut rotated = self.clone();
        rotated.rotate_to(start)?;
        Ok(rotated)
    }

    /// Reverses the path `a, ..., b` in place (the 2-opt move).
    ///
    /// The tour is first rotated to start at the predecessor of `a`, then
    /// the run from `a` through `b` is reversed, so the result starts and
    /// ends at `pred(a)`. Arcs `(pred(a), a)` and `(b, succ(b))` are
    /// replaced by `(pred(a), b)` and `(a, succ(b))`.
    ///
    /// A cycle with fewer than 5 entries has no 2-opt move: it is left
    /// untouched and [`TourError::DegenerateFlip`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tour::models::Cycle;
    ///
    /// let mut cycle = Cycle::from_open(vec![1, 2, 3, 4, 5]).unwrap();
    /// cycle.flip(&2, &4).unwrap();
    /// assert_eq!(cycle.nodes(), &[1, 4, 3, 2, 5, 1]);
    /// ```
    pub fn flip(&mut self, a: &N, b: &N) -> Result<()> {
        if self.nodes.len() < 5 {
            tracing::warn!(
                len = self.nodes.len(),
                cycle = ?self.nodes,
                "cycle with fewer than 4 nodes cannot be flipped"
            );
            return Err(TourError::DegenerateFlip {
                len: self.nodes.len(),
            });
        }
        let a_idx = self.position(a).ok_or_else(|| TourError::node_not_found(a))?;
        let b_idx = self.position(b).ok_or_else(|| TourError::node_not_found(b))?;

        let open = self.num_nodes();
        let pred_idx = (a_idx + open - 1) % open;
        self.rotate_open(pred_idx);

        let b_idx = (b_idx + open - pred_idx) % open;
        if b_idx > 1 {
            self.nodes[1..=b_idx].reverse();
        }
        Ok(())
    }

    /// Splices `node` in directly after `pred`.
    pub fn insert_after(&mut self, pred: &N, node: N) -> Result<()> {
        if self.contains(&node) {
            return Err(TourError::DuplicateNode {
                node: format!("{node:?}"),
            });
        }
        let idx = self
            .position(pred)
            .ok_or_else(|| TourError::node_not_found(pred))?;
        self.nodes.insert(idx + 1, node);
        Ok(())
    }

    fn open(&self) -> &[N] {
        &self.nodes[..self.nodes.len() - 1]
    }

    fn rotate_open(&mut self, idx: usize) {
        if idx == 0 {
            return;
        }
        let open = self.num_nodes();
        self.nodes[..open].rotate_left(idx);
        self.nodes[open] = self.nodes[0].clone();
    }
}

impl<N: Node> TryFrom<Vec<N>> for Cycle<N> {
    type Error = TourError;

    fn try_from(nodes: Vec<N>) -> Result<Self> {
        Self::from_closed(nodes)
    }
}

impl<N> From<Cycle<N>> for Vec<N> {
    fn from(cycle: Cycle<N>) -> Self {
        cycle.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostTable;

    fn square_costs() -> CostTable<char> {
        // Unit square A(0,0) B(1,0) C(1,1) D(0,1).
        let diag = 2f64.sqrt();
        let mut costs = CostTable::new();
        costs.insert_symmetric('A', 'B', 1.0);
        costs.insert_symmetric('B', 'C', 1.0);
        costs.insert_symmetric('C', 'D', 1.0);
        costs.insert_symmetric('D', 'A', 1.0);
        costs.insert_symmetric('A', 'C', diag);
        costs.insert_symmetric('B', 'D', diag);
        costs
    }

    #[test]
    fn test_from_closed_valid() {
        let cycle = Cycle::from_closed(vec![1, 2, 3, 1]).expect("valid");
        assert_eq!(cycle.len(), 4);
        assert_eq!(cycle.num_nodes(), 3);
        assert_eq!(*cycle.first(), 1);
    }

    #[test]
    fn test_from_closed_rejects_open() {
        assert!(matches!(
            Cycle::from_closed(vec![1, 2, 3]),
            Err(TourError::InvalidCycle(_))
        ));
    }

    #[test]
    fn test_from_closed_rejects_revisit() {
        assert!(matches!(
            Cycle::from_closed(vec![1, 2, 1, 3, 1]),
            Err(TourError::InvalidCycle(_))
        ));
    }

    #[test]
    fn test_from_closed_too_short() {
        assert_eq!(
            Cycle::from_closed(vec![1]),
            Err(TourError::EmptyCycle { len: 1 })
        );
        assert_eq!(
            Cycle::<u8>::from_open(vec![]),
            Err(TourError::EmptyCycle { len: 0 })
        );
    }

    #[test]
    fn test_cost_sums_arcs() {
        let cycle = Cycle::from_open(vec!['A', 'B', 'C', 'D']).expect("valid");
        assert!((cycle.cost(&square_costs()).expect("complete") - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_cost_single_node_loop() {
        let cycle = Cycle::from_open(vec!['A']).expect("valid");
        assert_eq!(cycle.cost(&CostTable::new()), Ok(0.0));
    }

    #[test]
    fn test_cost_missing_arc() {
        let mut costs = CostTable::new();
        costs.insert('A', 'B', 1.0);
        let cycle = Cycle::from_open(vec!['A', 'B']).expect("valid");
        assert_eq!(
            cycle.cost(&costs),
            Err(TourError::MissingEdgeCost {
                tail: "'B'".into(),
                head: "'A'".into()
            })
        );
    }

    #[test]
    fn test_reorder() {
        let cycle = Cycle::from_open(vec![1, 2, 3, 4]).expect("valid");
        let rotated = cycle.reorder(&3).expect("present");
        assert_eq!(rotated.nodes(), &[3, 4, 1, 2, 3]);
        assert_eq!(rotated.reorder(&3).expect("present"), rotated);
        assert_eq!(rotated.reorder(&1).expect("present"), cycle);
    }

    #[test]
    fn test_reorder_preserves_cost() {
        let costs = square_costs();
        let cycle = Cycle::from_open(vec!['A', 'C', 'B', 'D']).expect("valid");
        let before = cycle.cost(&costs).expect("complete");
        for start in ['A', 'B', 'C', 'D'] {
            let after = cycle.reorder(&start).expect("present").cost(&costs).expect("complete");
            assert!((before - after).abs() < 1e-10);
        }
    }

    #[test]
    fn test_reorder_missing_node() {
        let cycle = Cycle::from_open(vec![1, 2, 3]).expect("valid");
        assert_eq!(
            cycle.reorder(&9),
            Err(TourError::NodeNotFound { node: "9".into() })
        );
    }

    #[test]
    fn test_flip_inner_segment() {
        let mut cycle = Cycle::from_open(vec![1, 2, 3, 4, 5]).expect("valid");
        cycle.flip(&2, &4).expect("flippable");
        assert_eq!(cycle.nodes(), &[1, 4, 3, 2, 5, 1]);
    }

    #[test]
    fn test_flip_rotates_to_predecessor() {
        let mut cycle = Cycle::from_open(vec![1, 2, 3, 4, 5]).expect("valid");
        cycle.flip(&3, &5).expect("flippable");
        assert_eq!(cycle.nodes(), &[2, 5, 4, 3, 1, 2]);
    }

    #[test]
    fn test_flip_wraps_at_start() {
        // pred(1) is 5, so the run 1, 2 is reversed after rotating to 5.
        let mut cycle = Cycle::from_open(vec![1, 2, 3, 4, 5]).expect("valid");
        cycle.flip(&1, &2).expect("flippable");
        assert_eq!(cycle.nodes(), &[5, 2, 1, 3, 4, 5]);
    }

    #[test]
    fn test_flip_uncrosses_square() {
        let costs = square_costs();
        let mut cycle = Cycle::from_open(vec!['A', 'C', 'B', 'D']).expect("valid");
        cycle.flip(&'C', &'B').expect("flippable");
        assert_eq!(cycle.nodes(), &['A', 'B', 'C', 'D', 'A']);
        assert!((cycle.cost(&costs).expect("complete") - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_flip_degenerate() {
        let mut cycle = Cycle::from_open(vec![1, 2, 3]).expect("valid");
        let before = cycle.clone();
        assert_eq!(cycle.flip(&1, &2), Err(TourError::DegenerateFlip { len: 4 }));
        assert_eq!(cycle, before);
    }

    #[test]
    fn test_flip_missing_node_leaves_cycle() {
        let mut cycle = Cycle::from_open(vec![1, 2, 3, 4]).expect("valid");
        let before = cycle.clone();
        assert!(matches!(
            cycle.flip(&2, &7),
            Err(TourError::NodeNotFound { .. })
        ));
        assert_eq!(cycle, before);
    }

    #[test]
    fn test_insert_after() {
        let mut cycle = Cycle::from_open(vec!['A', 'B']).expect("valid");
        cycle.insert_after(&'B', 'C').expect("insertable");
        assert_eq!(cycle.nodes(), &['A', 'B', 'C', 'A']);
        cycle.insert_after(&'A', 'D').expect("insertable");
        assert_eq!(cycle.nodes(), &['A', 'D', 'B', 'C', 'A']);
    }

    #[test]
    fn test_insert_after_duplicate() {
        let mut cycle = Cycle::from_open(vec!['A', 'B']).expect("valid");
        assert!(matches!(
            cycle.insert_after(&'A', 'B'),
            Err(TourError::DuplicateNode { .. })
        ));
        assert!(matches!(
            cycle.insert_after(&'Z', 'C'),
            Err(TourError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn test_is_tour_of() {
        let cycle = Cycle::from_open(vec![3, 1, 2]).expect("valid");
        assert!(cycle.is_tour_of(&[1, 2, 3]));
        assert!(!cycle.is_tour_of(&[1, 2, 3, 4]));
        assert!(!cycle.is_tour_of(&[1, 2]));
    }

    #[test]
    fn test_serde_closed_list() {
        let cycle = Cycle::from_open(vec![1, 2, 3]).expect("valid");
        let json = serde_json::to_string(&cycle).expect("serializable");
        assert_eq!(json, "[1,2,3,1]");
        let back: Cycle<i32> = serde_json::from_str(&json).expect("valid cycle");
        assert_eq!(back, cycle);
        assert!(serde_json::from_str::<Cycle<i32>>("[1,2,3]").is_err());
    }
}
