//! Find a [topologically sorted] sequence of vertices of a [directed acyclic
//! graph] (DAG).
//!
//! See available parameters [here](TopoSortBuilder#implementations).
//!
//! Both algorithms are deterministic: the vertices are considered in the
//! order in which they were added to the graph, and so are the neighbors of
//! each vertex. Running the sort twice on the same graph, or on two storages
//! filled by the same sequence of insertions, gives the same order.
//!
//! [topologically sorted]: https://en.wikipedia.org/wiki/Topological_sorting
//! [directed acyclic graph]:
//!     https://en.wikipedia.org/wiki/Directed_acyclic_graph
//!
//! # Examples
//!
//! ```
//! use graphkit::{algo::TopoSort, core::GraphAdd, storage::AdjSet};
//!
//! let mut dependencies = AdjSet::<_, u32, _>::new_directed();
//!
//! // Edge direction in "must be compiled before" relation.
//! for (before, after) in [
//!     ("serde", "serde_json"),
//!     ("serde", "cargo_credential"),
//!     ("serde_json", "cargo_credential"),
//!     ("libc", "time"),
//!     ("time", "cargo_credential"),
//!     ("cargo_credential", "cargo"),
//!     ("libc", "cargo_util"),
//!     ("cargo_util", "cargo"),
//! ] {
//!     dependencies.add_edge_connecting(before, after, 1).unwrap();
//! }
//!
//! let order = TopoSort::on(&dependencies).run().unwrap();
//!
//! assert_eq!(order.first(), Some(&"libc"));
//! assert_eq!(order.last(), Some(&"cargo"));
//! ```

use std::{ops::Deref, slice};

use thiserror::Error;

mod builder;
mod dfs;
mod kahn;

pub use builder::TopoSortBuilder;

/// Topologically sorted sequence of all vertices of a directed acyclic graph.
///
/// For every edge `(u, v)`, `u` precedes `v`. The sequence dereferences to a
/// slice.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopoSort<V> {
    order: Vec<V>,
    algo: Algo,
}

impl<V> TopoSort<V> {
    /// Algorithm that produced the order.
    pub fn algo(&self) -> Algo {
        self.algo
    }

    pub fn iter(&self) -> slice::Iter<'_, V> {
        self.order.iter()
    }

    pub fn into_vec(self) -> Vec<V> {
        self.order
    }
}

impl<V: PartialEq> TopoSort<V> {
    /// Index of the vertex in the order.
    pub fn position(&self, vertex: &V) -> Option<usize> {
        self.order.iter().position(|v| v == vertex)
    }
}

impl<V> Deref for TopoSort<V> {
    type Target = [V];

    fn deref(&self) -> &Self::Target {
        &self.order
    }
}

impl<V> IntoIterator for TopoSort<V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a TopoSort<V> {
    type Item = &'a V;
    type IntoIter = slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

/// Algorithm for [`TopoSort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Algo {
    /// A variation on the [depth-first
    /// search](https://en.wikipedia.org/wiki/Depth-first_search) traversal.
    ///
    /// Every vertex is in one of three states: unvisited, in progress (on the
    /// current traversal path) and done. A vertex is reported when it is
    /// done, and the reversed sequence of done vertices is the topological
    /// order. Reaching an in-progress vertex means that the edge closes a
    /// cycle, which is then reported with all its vertices.
    ///
    /// # Use cases
    ///
    /// * Scheduling tasks that have dependencies.
    /// * Determining the order of compilation in build systems.
    #[default]
    Dfs,

    /// [Kahn's
    /// algorithm](https://en.wikipedia.org/wiki/Topological_sorting#Kahn's_algorithm).
    ///
    /// Kahn's algorithm iteratively removes vertices with no incoming edges
    /// (in-degree of zero) and appends them to the sorted sequence. The
    /// vertices with in-degree zero are processed first in, first out, so
    /// vertices without dependencies come in the order of their insertion.
    ///
    /// # Use cases
    ///
    /// * Same as the depth-first search algorithm.
    /// * Layered processing where independent vertices should keep their
    ///   relative insertion order.
    Kahn,
}

mod algo {
    use super::Algo;

    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct SpecificAlgo(pub Option<Algo>);

    #[derive(Debug)]
    pub struct Dfs;

    #[derive(Debug)]
    pub struct Kahn;
}

/// Directed cycle in a graph.
///
/// The vertices are listed in the order of the path, and the last vertex has
/// an edge back to the first one. A self-loop is a cycle of length one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle<V> {
    vertices: Vec<V>,
}

impl<V> Cycle<V> {
    pub(crate) fn new(vertices: Vec<V>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the edges of the cycle, including the closing one.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }
}

/// The error encountered during a [`TopoSort`] run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<V> {
    /// The graph is undirected.
    ///
    /// Topological order is defined only for directed graphs.
    #[error("topological order is not defined for undirected graphs")]
    Undirected,

    /// The graph contains a cycle.
    ///
    /// Graphs with cycles don't have a topological order.
    #[error("graph contains cycle of length {}", .0.len())]
    Cycle(Cycle<V>),
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use rustc_hash::FxHashSet;

    use super::*;

    use crate::{
        core::{
            marker::{Directed, Undirected},
            Create, GraphAdd, GraphRef,
        },
        infra::proptest::{graph_recipe, Shape},
        storage::{AdjMatrix, AdjSet},
    };

    fn assert_valid<G>(order: &TopoSort<G::Vertex>, graph: &G)
    where
        G: GraphRef,
        G::Vertex: std::fmt::Debug,
    {
        assert_eq!(
            order.len(),
            graph.vertex_count(),
            "sorted sequence length is not equal to vertex count"
        );

        for (from, to, _) in graph.edges() {
            let i = order.position(from).unwrap();
            let j = order.position(to).unwrap();

            assert!(i < j, "invalid topological order for {from:?} -> {to:?}");
        }
    }

    fn assert_cycle<G>(cycle: &Cycle<G::Vertex>, graph: &G)
    where
        G: GraphRef,
    {
        assert!(!cycle.is_empty());

        let distinct = cycle.vertices().iter().collect::<FxHashSet<_>>();
        assert_eq!(distinct.len(), cycle.len(), "cycle repeats a vertex");

        for (from, to) in cycle.edges() {
            assert!(graph.has_edge(from, to), "cycle edge is not in the graph");
        }
    }

    fn create_graph<G>(edges: &[(&'static str, &'static str)]) -> G
    where
        G: Create<Vertex = &'static str, Weight = u32>,
    {
        let mut graph = G::empty();

        for &(from, to) in edges {
            graph.add_edge_connecting(from, to, 1).unwrap();
        }

        graph
    }

    fn create_basic_graph<G>() -> G
    where
        G: Create<Vertex = &'static str, Weight = u32>,
    {
        create_graph(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")])
    }

    fn create_cyclic_graph<G>() -> G
    where
        G: Create<Vertex = &'static str, Weight = u32>,
    {
        create_graph(&[
            ("F", "C"),
            ("F", "A"),
            ("E", "A"),
            ("E", "B"),
            ("C", "D"),
            ("D", "B"),
            ("B", "F"),
        ])
    }

    #[test]
    fn dfs_basic() {
        let graph: AdjSet<_, _, Directed> = create_basic_graph();
        let order = TopoSort::on(&graph).dfs().run().unwrap();

        assert_valid(&order, &graph);
        assert_eq!(&order[..], &["A", "C", "B", "D"]);
        assert_eq!(order.algo(), Algo::Dfs);
    }

    #[test]
    fn kahn_basic() {
        let graph: AdjSet<_, _, Directed> = create_basic_graph();
        let order = TopoSort::on(&graph).kahn().run().unwrap();

        assert_valid(&order, &graph);
        assert_eq!(&order[..], &["A", "B", "C", "D"]);
        assert_eq!(order.algo(), Algo::Kahn);
    }

    #[test]
    fn default_algo_is_dfs() {
        let graph: AdjMatrix<_, _, Directed> = create_basic_graph();
        let order = TopoSort::on(&graph).run().unwrap();

        assert_eq!(order.algo(), Algo::Dfs);
        assert_eq!(order.into_vec(), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn dfs_cycle() {
        let graph: AdjSet<_, _, Directed> = create_cyclic_graph();
        let result = TopoSort::on(&graph).dfs().run();

        assert_matches!(result, Err(Error::Cycle(ref cycle)) if cycle.len() == 4);
        if let Err(Error::Cycle(cycle)) = result {
            assert_cycle(&cycle, &graph);
        }
    }

    #[test]
    fn kahn_cycle() {
        let graph: AdjMatrix<_, _, Directed> = create_cyclic_graph();
        let result = TopoSort::on(&graph).kahn().run();

        assert_matches!(result, Err(Error::Cycle(_)));
        if let Err(Error::Cycle(cycle)) = result {
            assert_cycle(&cycle, &graph);
        }
    }

    #[test]
    fn three_cycle() {
        let graph: AdjSet<_, _, Directed> = create_graph(&[("A", "B"), ("B", "C"), ("C", "A")]);

        for algo in [Algo::Dfs, Algo::Kahn] {
            let result = TopoSort::on(&graph).using(algo).run();
            assert_matches!(
                result,
                Err(Error::Cycle(cycle)) if cycle.vertices() == ["A", "B", "C"]
            );
        }
    }

    #[test]
    fn self_loop_is_cycle() {
        let mut graph: AdjSet<_, u32, Directed> = create_graph(&[("A", "B")]);
        graph.add_edge(&"B", &"B", 1).unwrap();

        for algo in [Algo::Dfs, Algo::Kahn] {
            let result = TopoSort::on(&graph).using(algo).run();
            assert_matches!(result, Err(Error::Cycle(cycle)) if cycle.vertices() == ["B"]);
        }
    }

    #[test]
    fn undirected_is_error() {
        let graph: AdjSet<_, _, Undirected> =
            create_graph(&[("A", "C"), ("B", "C"), ("C", "D")]);

        for algo in [Algo::Dfs, Algo::Kahn] {
            assert_matches!(
                TopoSort::on(&graph).using(algo).run(),
                Err(Error::Undirected)
            );
        }
    }

    #[test]
    fn empty_graph() {
        let graph = AdjMatrix::<&str, u32, Directed>::new_directed();

        assert!(TopoSort::on(&graph).dfs().run().unwrap().is_empty());
        assert!(TopoSort::on(&graph).kahn().run().unwrap().is_empty());
    }

    #[test]
    fn disconnected() {
        let graph: AdjSet<_, _, Directed> = create_graph(&[
            ("A", "C"),
            ("B", "C"),
            ("D", "F"),
            ("E", "F"),
            ("C", "G"),
            ("F", "G"),
        ]);

        for algo in [Algo::Dfs, Algo::Kahn] {
            let order = TopoSort::on(&graph).using(algo).run().unwrap();
            assert_valid(&order, &graph);
        }
    }

    #[test]
    fn diamond_chain() {
        let graph: AdjMatrix<_, _, Directed> = create_graph(&[
            ("A", "B"),
            ("B", "C"),
            ("B", "D"),
            ("B", "E"),
            ("C", "F"),
            ("D", "F"),
            ("E", "F"),
            ("F", "G"),
        ]);

        let dfs = TopoSort::on(&graph).dfs().run().unwrap();
        assert_valid(&dfs, &graph);
        assert_eq!(dfs.first(), Some(&"A"));
        assert_eq!(dfs.last(), Some(&"G"));

        let kahn = TopoSort::on(&graph).kahn().run().unwrap();
        assert_eq!(&kahn[..], &["A", "B", "C", "D", "E", "F", "G"]);
    }

    #[test]
    fn kahn_keeps_insertion_order_of_sources() {
        let mut graph = AdjSet::<_, u32, Directed>::new_directed();
        graph.extend_with_vertices(["D", "A", "C", "B"]).unwrap();
        graph.add_edge(&"C", &"B", 1).unwrap();

        let order = TopoSort::on(&graph).kahn().run().unwrap();
        assert_eq!(&order[..], &["D", "A", "C", "B"]);
    }

    #[test]
    fn using_opt_none_is_dfs() {
        let graph: AdjSet<_, _, Directed> = create_basic_graph();
        let order = TopoSort::on(&graph).using_opt(None).run().unwrap();

        assert_eq!(order.algo(), Algo::Dfs);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_toposort_dfs_acyclic(recipe in graph_recipe(64, 0u32..10, Shape::Acyclic)) {
            let graph: AdjSet<u32, u32, Directed> = recipe.build();
            let order = TopoSort::on(&graph).dfs().run().unwrap();

            assert_valid(&order, &graph);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_toposort_kahn_acyclic(recipe in graph_recipe(64, 0u32..10, Shape::Acyclic)) {
            let graph: AdjMatrix<u32, u32, Directed> = recipe.build();
            let order = TopoSort::on(&graph).kahn().run().unwrap();

            assert_valid(&order, &graph);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_toposort_dfs_any(recipe in graph_recipe(32, 0u32..10, Shape::Any)) {
            let graph: AdjSet<u32, u32, Directed> = recipe.build();

            match TopoSort::on(&graph).dfs().run() {
                Ok(order) => assert_valid(&order, &graph),
                Err(Error::Cycle(cycle)) => assert_cycle(&cycle, &graph),
                Err(error) => prop_assert!(false, "unexpected error: {error}"),
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_toposort_kahn_any(recipe in graph_recipe(32, 0u32..10, Shape::Any)) {
            let graph: AdjMatrix<u32, u32, Directed> = recipe.build();

            let kahn = TopoSort::on(&graph).kahn().run();
            let dfs = TopoSort::on(&graph).dfs().run();
            prop_assert_eq!(kahn.is_ok(), dfs.is_ok());

            match kahn {
                Ok(order) => assert_valid(&order, &graph),
                Err(Error::Cycle(cycle)) => assert_cycle(&cycle, &graph),
                Err(error) => prop_assert!(false, "unexpected error: {error}"),
            }
        }
    }
}
