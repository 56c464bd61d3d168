//! Implicit word graph
//!
//! Nodes are dictionary words of one length; edges are single-letter
//! substitutions, discovered through shared wildcard patterns.

mod index;
mod neighbors;

pub use index::WordIndex;
pub use neighbors::{NeighborMode, NeighborResolver, VisitedSet};
