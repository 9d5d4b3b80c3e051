//! Node identifier bound.

use std::fmt::Debug;
use std::hash::Hash;

/// An opaque node identifier.
///
/// Anything cloneable, hashable and comparable qualifies: indices, strings,
/// or composite keys. `Debug` is required so errors can name the node.
pub trait Node: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Node for T {}
