//! Cost oracle over integer nodes backed by a flat n×n table.

use crate::error::{Result, TourError};
use crate::models::Point;

use super::CostOracle;

/// Arc costs between the nodes `0..size`, one row per tail node.
///
/// Entry `(i, j)` is the cost of travelling from `i` to `j`. The table may
/// be asymmetric; only [`from_points`](Self::from_points) guarantees
/// `c(i, j) == c(j, i)`.
///
/// # Examples
///
/// ```
/// use u_tour::cost::{CostOracle, DistanceMatrix};
/// use u_tour::models::Point;
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(6.0, 8.0),
/// ]);
/// assert_eq!(dm.nodes(), vec![0, 1, 2]);
/// assert!((dm.cost(&2, &0).unwrap() - 10.0).abs() < 1e-10);
/// assert!(dm.cost(&0, &3).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// A `size`-node table with every arc costing 0.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Straight-line distances between `points`; node `i` is `points[i]`.
    pub fn from_points(points: &[Point]) -> Self {
        let mut dm = Self::new(points.len());
        for (i, p) in points.iter().enumerate() {
            for (j, q) in points.iter().enumerate().skip(i + 1) {
                let d = p.distance_to(q);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Wraps row-major `data` as a `size`-node table.
    ///
    /// `None` unless `data` holds exactly `size * size` entries.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        (data.len() == size * size).then_some(Self { data, size })
    }

    /// Unchecked cost of the arc `(tail, head)`.
    ///
    /// # Panics
    ///
    /// If either node is `size` or more. [`CostOracle::cost`] reports
    /// those as a missing arc instead.
    pub fn get(&self, tail: usize, head: usize) -> f64 {
        self.data[tail * self.size + head]
    }

    /// Overwrites the cost of the arc `(tail, head)` only.
    pub fn set(&mut self, tail: usize, head: usize, cost: f64) {
        self.data[tail * self.size + head] = cost;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Every node of the table, ready to pass as a heuristic's universe.
    pub fn nodes(&self) -> Vec<usize> {
        (0..self.size).collect()
    }

    /// Whether each arc costs the same both ways, up to `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (0..self.size).all(|i| {
            (i + 1..self.size).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol)
        })
    }
}

impl CostOracle<usize> for DistanceMatrix {
    fn cost(&self, tail: &usize, head: &usize) -> Result<f64> {
        if *tail >= self.size || *head >= self.size {
            return Err(TourError::missing_edge(tail, head));
        }
        Ok(self.get(*tail, *head))
    }
}
