//! Domain model types for tours.
//!
//! Provides the node identifier bound, the closed [`Cycle`] sequence that
//! every heuristic produces and consumes, and planar [`Point`]s for
//! building Euclidean instances.

mod cycle;
mod node;
mod point;

pub use cycle::Cycle;
pub use node::Node;
pub use point::Point;
