//! Classical graph algorithms over interchangeable graph storages.
//!
//! Graphs are built from caller-supplied vertex labels in one of the
//! [storages](storage), which implement the capabilities from [`core`]. The
//! [algorithms](algo) only ever talk to the capabilities, so a graph built by
//! the same sequence of insertions gives the same results in any storage.
//!
//! ```
//! use graphkit::{
//!     algo::{ShortestPaths, SpanningForest, TopoSort},
//!     core::GraphAdd,
//!     storage::{AdjMatrix, AdjSet},
//! };
//!
//! let mut deps = AdjSet::new_directed();
//! deps.add_edge_connecting("core", "storage", 1).unwrap();
//! deps.add_edge_connecting("core", "algo", 1).unwrap();
//! deps.add_edge_connecting("storage", "algo", 1).unwrap();
//!
//! let order = TopoSort::on(&deps).run().unwrap();
//! assert_eq!(order.into_vec(), vec!["core", "storage", "algo"]);
//!
//! let mut roads = AdjMatrix::new_undirected();
//! roads.add_edge_connecting("A", "B", 1u32).unwrap();
//! roads.add_edge_connecting("B", "C", 2).unwrap();
//! roads.add_edge_connecting("A", "C", 4).unwrap();
//!
//! let paths = ShortestPaths::on(&roads).run("A").unwrap();
//! assert_eq!(paths.dist(&"C"), Some(&3));
//!
//! let tree = SpanningForest::on(&roads).run().unwrap();
//! assert_eq!(tree.total_weight(), &3);
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod infra;
pub mod storage;
