//! Constructive heuristics for building tours from scratch or from a seed.
//!
//! - [`nearest_neighbor`] — Greedy walk to the nearest unvisited node, O(n²)
//! - [`nearest_insertion`] — Insert the node closest to the tour, O(n²)
//! - [`farthest_insertion`] — Insert the node farthest from the tour, O(n²)
//! - [`cheapest_insertion`] — Perform the globally cheapest insertion, O(n²) typical
//!
//! The insertion heuristics share [`find_insertion`], which locates the
//! cheapest arc of a tour to split with a given node.

mod cheapest_insertion;
mod farthest_insertion;
mod insertion;
mod nearest_insertion;
mod nearest_neighbor;
mod seed;

pub use cheapest_insertion::cheapest_insertion;
pub use farthest_insertion::farthest_insertion;
pub use insertion::{find_insertion, Insertion};
pub use nearest_insertion::nearest_insertion;
pub use nearest_neighbor::{best_nearest_neighbor, nearest_neighbor};
