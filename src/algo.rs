pub mod shortest_paths;
pub mod spanning_tree;
pub mod toposort;

pub use shortest_paths::ShortestPaths;
pub use spanning_tree::SpanningForest;
pub use toposort::TopoSort;
