//! Primitives the algorithms are built on.

mod compact_map;
mod disjoint_set;
pub(crate) mod matrix;
mod priority_queue;

pub use compact_map::CompactVertexMap;
pub use disjoint_set::DisjointSet;
pub use priority_queue::{DecreasePriorityError, PriorityQueue};
