//! Find a [minimum spanning tree] of a connected undirected graph, or a
//! minimum spanning forest of a graph with several components.
//!
//! See available parameters [here](SpanningForestBuilder#implementations).
//!
//! # Examples
//!
//! ```
//! use graphkit::{algo::SpanningForest, core::GraphAdd, storage::AdjSet};
//!
//! let mut graph = AdjSet::new_undirected();
//!
//! graph.add_edge_connecting("A", "B", 1).unwrap();
//! graph.add_edge_connecting("B", "C", 2).unwrap();
//! graph.add_edge_connecting("A", "C", 4).unwrap();
//!
//! let tree = SpanningForest::on(&graph).prim().run().unwrap();
//!
//! assert_eq!(tree.total_weight(), &3);
//! assert!(tree.contains(&"B", &"A"));
//! assert!(!tree.contains(&"A", &"C"));
//! ```
//!
//! [minimum spanning tree]: https://en.wikipedia.org/wiki/Minimum_spanning_tree

use thiserror::Error;

mod builder;
mod kruskal;
mod prim;

pub use builder::SpanningForestBuilder;

/// Edges of a minimum spanning tree for each connected component of a graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningForest<V, W> {
    edges: Vec<(V, V, W)>,
    total_weight: W,
    component_count: usize,
    algo: Algo,
}

impl<V, W> SpanningForest<V, W> {
    /// Edges in the order in which they were added to the forest.
    ///
    /// Edges found by [Prim's algorithm](Algo::Prim) go from the vertex
    /// already in the tree to the newly connected one.
    pub fn edges(&self) -> &[(V, V, W)] {
        &self.edges
    }

    pub fn total_weight(&self) -> &W {
        &self.total_weight
    }

    /// Number of edges in the forest.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of trees in the forest, counting isolated vertices. It is
    /// always one for a successful run of Prim's algorithm on a non-empty
    /// graph.
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    pub fn algo(&self) -> Algo {
        self.algo
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (V, V, W)> {
        self.edges.iter()
    }

    pub fn into_edges(self) -> Vec<(V, V, W)> {
        self.edges
    }
}

impl<V: PartialEq, W> SpanningForest<V, W> {
    /// Returns `true` if the forest contains an edge between the two
    /// vertices, in any direction.
    pub fn contains(&self, u: &V, v: &V) -> bool {
        self.edges
            .iter()
            .any(|(from, to, _)| (from == u && to == v) || (from == v && to == u))
    }
}

impl<'a, V, W> IntoIterator for &'a SpanningForest<V, W> {
    type Item = &'a (V, V, W);
    type IntoIter = std::slice::Iter<'a, (V, V, W)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Algorithm for [`SpanningForest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Algo {
    /// [Prim's algorithm](https://en.wikipedia.org/wiki/Prim%27s_algorithm)
    ///
    /// Grows a single tree from the start vertex, always attaching the
    /// vertex that is closest to the tree. Fails if the graph is not
    /// connected.
    Prim,

    /// [Kruskal's
    /// algorithm](https://en.wikipedia.org/wiki/Kruskal%27s_algorithm)
    ///
    /// Considers all edges from the lightest and keeps those that join two
    /// different trees. Produces a forest for disconnected graphs. Edges of
    /// equal weight are considered in the order of
    /// [`edges`](crate::core::EdgeSet::edges).
    #[default]
    Kruskal,
}

mod algo {
    use super::Algo;

    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct SpecificAlgo(pub Option<Algo>);

    #[derive(Debug)]
    pub struct Prim;

    #[derive(Debug)]
    pub struct Kruskal;
}

/// The error encountered during a [`SpanningForest`] run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<V> {
    /// The graph is directed.
    #[error("graph is directed")]
    Directed,

    /// Not all vertices are reachable from the start vertex.
    #[error("graph is disconnected, spanned {reached} of {total} vertices")]
    Disconnected { reached: usize, total: usize },

    /// The start vertex is not in the graph.
    #[error("vertex does not exist")]
    UnknownVertex(V),

    /// The total weight does not fit the weight type.
    #[error("sum of weights overflowed")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{
        common::DisjointSet,
        core::{
            marker::{Directed, Undirected},
            Create, EdgeSet, GraphAdd, VertexSet,
        },
        infra::{
            proptest::{graph_recipe, Shape},
            testing::create_complete,
        },
        storage::{AdjMatrix, AdjSet},
    };

    use super::*;

    fn create_graph<G>(edges: &[(&'static str, &'static str, i32)]) -> G
    where
        G: Create<Vertex = &'static str, Weight = i32>,
    {
        let mut graph = G::empty();

        for &(from, to, weight) in edges {
            graph.add_edge_connecting(from, to, weight).unwrap();
        }

        graph
    }

    const TRIANGLE: &[(&str, &str, i32)] = &[("A", "B", 1), ("B", "C", 2), ("A", "C", 4)];

    const SIX: &[(&str, &str, i32)] = &[
        ("A", "B", 5),
        ("A", "C", 7),
        ("B", "C", 2),
        ("B", "D", 3),
        ("B", "E", 4),
        ("C", "D", 4),
        ("C", "E", 6),
        ("D", "E", 8),
        ("D", "F", 10),
        ("E", "F", 4),
    ];

    const EIGHT: &[(&str, &str, i32)] = &[
        ("A", "B", 7),
        ("A", "C", 8),
        ("A", "D", 3),
        ("B", "C", 5),
        ("B", "E", 2),
        ("C", "D", 1),
        ("C", "F", 2),
        ("D", "G", 6),
        ("E", "F", 1),
        ("E", "H", 3),
        ("F", "G", 2),
        ("F", "H", 8),
        ("G", "H", 9),
    ];

    const TWELVE: &[(&str, &str, i32)] = &[
        ("A", "B", 7),
        ("B", "C", 4),
        ("A", "D", 2),
        ("B", "E", 6),
        ("C", "F", 1),
        ("D", "E", 3),
        ("E", "F", 5),
        ("D", "G", 5),
        ("E", "H", 2),
        ("F", "I", 2),
        ("G", "H", 2),
        ("H", "I", 3),
        ("G", "J", 1),
        ("H", "K", 7),
        ("I", "L", 3),
        ("J", "K", 2),
        ("K", "L", 8),
    ];

    fn check_totals<G>(edges: &[(&'static str, &'static str, i32)], total: i32, len: usize)
    where
        G: Create<Vertex = &'static str, Weight = i32, EdgeType = Undirected>,
    {
        let graph: G = create_graph(edges);

        let prim = SpanningForest::on(&graph).start("A").prim().run().unwrap();
        assert_eq!(prim.total_weight(), &total);
        assert_eq!(prim.len(), len);
        assert_eq!(prim.component_count(), 1);

        let kruskal = SpanningForest::on(&graph).kruskal().run().unwrap();
        assert_eq!(kruskal.total_weight(), &total);
        assert_eq!(kruskal.len(), len);
        assert_eq!(kruskal.component_count(), 1);
    }

    #[test]
    fn triangle() {
        for algo in [Algo::Prim, Algo::Kruskal] {
            let graph: AdjSet<_, _, Undirected> = create_graph(TRIANGLE);
            let tree = SpanningForest::on(&graph).using(algo).run().unwrap();

            assert_eq!(tree.total_weight(), &3);
            assert!(tree.contains(&"A", &"B"));
            assert!(tree.contains(&"C", &"B"));
            assert!(!tree.contains(&"A", &"C"));
            assert_eq!(tree.algo(), algo);
        }
    }

    #[test]
    fn six_vertices() {
        check_totals::<AdjSet<_, _, Undirected>>(SIX, 18, 5);
        check_totals::<AdjMatrix<_, _, Undirected>>(SIX, 18, 5);
    }

    #[test]
    fn eight_vertices() {
        check_totals::<AdjSet<_, _, Undirected>>(EIGHT, 14, 7);
        check_totals::<AdjMatrix<_, _, Undirected>>(EIGHT, 14, 7);
    }

    #[test]
    fn twelve_vertices() {
        check_totals::<AdjSet<_, _, Undirected>>(TWELVE, 25, 11);
        check_totals::<AdjMatrix<_, _, Undirected>>(TWELVE, 25, 11);
    }

    #[test]
    fn prim_edge_order() {
        let graph: AdjSet<_, _, Undirected> = create_graph(SIX);
        let tree = SpanningForest::on(&graph).prim().run().unwrap();

        assert_eq!(
            tree.edges(),
            &[
                ("A", "B", 5),
                ("B", "C", 2),
                ("B", "D", 3),
                ("B", "E", 4),
                ("E", "F", 4),
            ]
        );
    }

    #[test]
    fn kruskal_edge_order() {
        let graph: AdjMatrix<_, _, Undirected> = create_graph(SIX);
        let tree = SpanningForest::on(&graph).kruskal().run().unwrap();

        assert_eq!(
            tree.edges(),
            &[
                ("B", "C", 2),
                ("B", "D", 3),
                ("B", "E", 4),
                ("E", "F", 4),
                ("A", "B", 5),
            ]
        );
    }

    #[test]
    fn prim_from_other_start() {
        let graph: AdjSet<_, _, Undirected> = create_graph(SIX);
        let tree = SpanningForest::on(&graph).start("F").prim().run().unwrap();

        assert_eq!(tree.edges()[0], ("F", "E", 4));
        assert_eq!(tree.total_weight(), &18);
    }

    #[test]
    fn disconnected() {
        let graph: AdjSet<_, _, Undirected> =
            create_graph(&[("A", "B", 1), ("C", "D", 2), ("D", "E", 3)]);

        assert_matches!(
            SpanningForest::on(&graph).prim().run(),
            Err(Error::Disconnected {
                reached: 2,
                total: 5
            })
        );

        let forest = SpanningForest::on(&graph).kruskal().run().unwrap();
        assert_eq!(forest.len(), 3);
        assert_eq!(forest.component_count(), 2);
        assert_eq!(forest.total_weight(), &6);
    }

    #[test]
    fn isolated_vertex_is_component() {
        let mut graph: AdjMatrix<_, _, Undirected> = create_graph(TRIANGLE);
        graph.add_vertex("D").unwrap();

        let forest = SpanningForest::on(&graph).run().unwrap();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest.component_count(), 2);
    }

    #[test]
    fn directed_is_error() {
        let graph: AdjSet<_, _, Directed> = create_graph(TRIANGLE);

        assert_matches!(
            SpanningForest::on(&graph).prim().run(),
            Err(Error::Directed)
        );
        assert_matches!(
            SpanningForest::on(&graph).kruskal().run(),
            Err(Error::Directed)
        );
    }

    #[test]
    fn unknown_start() {
        let graph: AdjSet<_, _, Undirected> = create_graph(TRIANGLE);

        assert_matches!(
            SpanningForest::on(&graph).start("X").prim().run(),
            Err(Error::UnknownVertex("X"))
        );
    }

    #[test]
    fn empty_graph() {
        let graph = AdjSet::<&str, i32, Undirected>::new_undirected();

        let forest = SpanningForest::on(&graph).kruskal().run().unwrap();
        assert!(forest.is_empty());
        assert_eq!(forest.component_count(), 0);
        assert_eq!(forest.total_weight(), &0);

        let tree = SpanningForest::on(&graph).prim().run().unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn self_loop_is_ignored() {
        let graph: AdjSet<_, _, Undirected> =
            create_graph(&[("A", "A", 0), ("A", "B", 3), ("B", "B", 1)]);

        for algo in [Algo::Prim, Algo::Kruskal] {
            let tree = SpanningForest::on(&graph).using(algo).run().unwrap();
            assert_eq!(tree.edges(), &[("A", "B", 3)]);
        }
    }

    #[test]
    fn negative_weights_are_allowed() {
        let graph: AdjMatrix<_, _, Undirected> =
            create_graph(&[("A", "B", -1), ("B", "C", -2), ("A", "C", 4)]);

        for algo in [Algo::Prim, Algo::Kruskal] {
            let tree = SpanningForest::on(&graph).using(algo).run().unwrap();
            assert_eq!(tree.total_weight(), &-3);
        }
    }

    #[test]
    fn total_weight_overflow() {
        let mut graph = AdjSet::<&str, u8, Undirected>::new_undirected();
        graph.add_edge_connecting("A", "B", 200).unwrap();
        graph.add_edge_connecting("B", "C", 100).unwrap();

        for algo in [Algo::Prim, Algo::Kruskal] {
            assert_matches!(
                SpanningForest::on(&graph).using(algo).run(),
                Err(Error::Overflow)
            );
        }
    }

    #[test]
    fn default_algo() {
        let graph: AdjSet<_, _, Undirected> = create_graph(TRIANGLE);

        let forest = SpanningForest::on(&graph).run().unwrap();
        assert_eq!(forest.algo(), Algo::Kruskal);

        let tree = SpanningForest::on(&graph).start("C").run().unwrap();
        assert_eq!(tree.algo(), Algo::Prim);

        let forest = SpanningForest::on(&graph).using_opt(None).run().unwrap();
        assert_eq!(forest.algo(), Algo::Kruskal);
    }

    #[test]
    fn complete_graph_is_star_or_path() {
        let graph: AdjMatrix<u32, u32, Undirected> = create_complete(6);

        let prim = SpanningForest::on(&graph).prim().run().unwrap();
        assert_eq!(prim.total_weight(), &5);
        assert!(prim.iter().all(|(from, _, _)| *from == 0));

        let kruskal = SpanningForest::on(&graph).kruskal().run().unwrap();
        assert_eq!(kruskal.len(), 5);
        assert_eq!(kruskal.component_count(), 1);
    }

    #[test]
    fn float_weights() {
        let mut graph = AdjSet::<_, f64, Undirected>::new_undirected();
        graph.add_edge_connecting("A", "B", 0.5).unwrap();
        graph.add_edge_connecting("B", "C", 1.5).unwrap();
        graph.add_edge_connecting("A", "C", 0.75).unwrap();

        let tree = SpanningForest::on(&graph).prim().run().unwrap();
        assert_eq!(tree.total_weight(), &1.25);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_prim_kruskal_agree(recipe in graph_recipe(64, 0u32..1000, Shape::Connected)) {
            let graph: AdjSet<u32, u32, Undirected> = recipe.build();

            let prim = SpanningForest::on(&graph).prim().run().unwrap();
            let kruskal = SpanningForest::on(&graph).kruskal().run().unwrap();

            prop_assert_eq!(prim.total_weight(), kruskal.total_weight());
            prop_assert_eq!(prim.len(), recipe.vertex_count().saturating_sub(1));
            prop_assert_eq!(kruskal.len(), recipe.vertex_count().saturating_sub(1));
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_kruskal_forest(recipe in graph_recipe(64, 0u32..1000, Shape::Any)) {
            let graph: AdjMatrix<u32, u32, Undirected> = recipe.build();
            let forest = SpanningForest::on(&graph).kruskal().run().unwrap();

            let mut components = graph.vertices().cloned().collect::<DisjointSet<_>>();
            for (from, to, _) in graph.edges() {
                components.union(from, to);
            }

            prop_assert_eq!(forest.component_count(), components.set_count());
            prop_assert_eq!(forest.len(), graph.vertex_count() - components.set_count());

            let mut trees = graph.vertices().cloned().collect::<DisjointSet<_>>();
            for (from, to, weight) in forest.iter() {
                prop_assert_eq!(trees.union(from, to), Some(true));
                prop_assert_eq!(graph.weight(from, to), Ok(weight));
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_kruskal_agrees_with_petgraph(recipe in graph_recipe(64, 0u32..1000, Shape::Any)) {
            use petgraph::data::Element;

            let graph: AdjSet<u32, u32, Undirected> = recipe.build();

            let mut oracle = petgraph::graph::UnGraph::<u32, u32>::new_undirected();
            let nodes = (0..recipe.vertex_count() as u32)
                .map(|v| oracle.add_node(v))
                .collect::<Vec<_>>();
            for (from, to, weight) in graph.edges() {
                oracle.add_edge(nodes[*from as usize], nodes[*to as usize], *weight);
            }

            let expected = petgraph::algo::min_spanning_tree(&oracle)
                .filter_map(|element| match element {
                    Element::Edge { weight, .. } => Some(weight),
                    Element::Node { .. } => None,
                })
                .sum::<u32>();

            let forest = SpanningForest::on(&graph).kruskal().run().unwrap();
            prop_assert_eq!(*forest.total_weight(), expected);
        }
    }
}
