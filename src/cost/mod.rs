//! Arc cost oracles.
//!
//! Heuristics only ever see a [`CostOracle`]. Two stores are provided:
//!
//! - [`DistanceMatrix`] — dense matrix over index nodes `0..n`
//! - [`CostTable`] — hash map over arbitrary node keys

mod matrix;
mod oracle;
mod table;

pub use matrix::DistanceMatrix;
pub use oracle::CostOracle;
pub use table::CostTable;
