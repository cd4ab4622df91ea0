//! Graph storages.
//!
//! Both storages implement the same capabilities and are interchangeable
//! from the point of view of the algorithms:
//!
//! * [`AdjMatrix`] is dense. Edge lookup is _O(1)_ in the worst case, but
//!   memory is _O(V²)_ and iterating neighbors costs _O(V)_ per vertex.
//! * [`AdjSet`] is sparse. Memory is _O(V + E)_, edge lookup is _O(1)_
//!   expected and iterating neighbors costs _O(degree)_. Prefer it for
//!   traversal-heavy workloads.
//!
//! Both report neighbors ordered by the position of the neighbor in the
//! vertex insertion order, so the same sequence of insertions leads to the
//! same algorithm results regardless of the storage.

pub mod adj_matrix;
pub mod adj_set;
mod shared;

pub use adj_matrix::AdjMatrix;
pub use adj_set::AdjSet;
