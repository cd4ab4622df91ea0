//! Find [single source shortest paths] and their distances in a graph.
//!
//! See available parameters [here](ShortestPathsBuilder#implementations).
//!
//! Two algorithms are available. Breadth-first search counts hops and is
//! used for graphs where all edges have the same weight. Dijkstra's algorithm
//! takes weights into account and requires them to be nonnegative. If a graph
//! with a signed weight type contains a negative edge, the search fails as
//! soon as the edge is read.
//!
//! Vertices that are not reachable from the source are absent from the
//! result.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//!
//! # Examples
//!
//! ```
//! use graphkit::{algo::ShortestPaths, core::GraphAdd, storage::AdjSet};
//!
//! let mut graph = AdjSet::new_undirected();
//!
//! for (from, to, km) in [
//!     ("Prague", "Bratislava", 328u32),
//!     ("Prague", "Nuremberg", 297),
//!     ("Prague", "Vienna", 293),
//!     ("Bratislava", "Vienna", 79),
//!     ("Nuremberg", "Munich", 170),
//!     ("Vienna", "Munich", 402),
//!     ("Vienna", "Florence", 863),
//!     ("Munich", "Florence", 646),
//!     ("Florence", "Rome", 278),
//! ] {
//!     graph.add_edge_connecting(from, to, km).unwrap();
//! }
//!
//! let shortest_paths = ShortestPaths::on(&graph).goal("Prague").run("Rome").unwrap();
//! let path = shortest_paths.path_to(&"Prague").unwrap();
//!
//! assert_eq!(path.overall_distance(), &1391);
//! assert_eq!(
//!     path.vertices().copied().collect::<Vec<_>>(),
//!     vec!["Rome", "Florence", "Munich", "Nuremberg", "Prague"]
//! );
//! ```

use std::{hash::Hash, ops::Index};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{VertexSet, Weight};

mod bfs;
mod builder;
mod dijkstra;

pub use builder::ShortestPathsBuilder;

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V, W> {
    source: V,
    // Using HashMaps because the algorithm supports early termination when
    // reaching given goal. It is likely that reaching goal means visiting a
    // subgraph which is significantly smaller than the whole graph.
    dist: FxHashMap<V, W>,
    // The predecessor together with the weight of the edge from it.
    pred: FxHashMap<V, (V, W)>,
    algo: Algo,
}

impl<V, W> ShortestPaths<V, W>
where
    V: Clone + Eq + Hash,
    W: Weight,
{
    /// Source vertex where the search was started.
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Algorithm that produced the paths.
    pub fn algo(&self) -> Algo {
        self.algo
    }

    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if it's not known.
    ///
    /// There are two causes why the distance between two vertices is not known:
    /// (1) the vertices are not connected, or (2) the
    /// [goal](ShortestPathsBuilder::goal) was reached before visiting the given
    /// vertex.
    pub fn dist(&self, to: &V) -> Option<&W> {
        self.dist.get(to)
    }

    /// Returns the vertex preceding the given vertex on its shortest path, or
    /// `None` for the source and for vertices with unknown distance.
    pub fn pred(&self, to: &V) -> Option<&V> {
        self.pred.get(to).map(|(pred, _)| pred)
    }

    pub fn is_reachable(&self, to: &V) -> bool {
        self.dist.contains_key(to)
    }

    /// Number of vertices with known distance, including the source.
    pub fn reachable_count(&self) -> usize {
        self.dist.len()
    }

    /// Iterates over the vertices with known distance in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &W)> + '_ {
        self.dist.iter()
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order, excluding the given vertex.
    ///
    /// The iterator is empty if the vertex is the source or its distance is
    /// not known.
    pub fn reconstruct(&self, to: V) -> PathReconstruction<'_, V, W> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }

    /// Returns the shortest path from the source to the given vertex, or
    /// `None` if its distance is not known.
    pub fn path_to(&self, to: &V) -> Option<Path<V, W>> {
        let overall_distance = self.dist.get(to)?.clone();

        let mut edges = Vec::new();
        let mut curr = to;

        while let Some((pred, weight)) = self.pred.get(curr) {
            edges.push(PathEdge {
                from: pred.clone(),
                to: curr.clone(),
                weight: weight.clone(),
            });
            curr = pred;
        }

        edges.reverse();

        Some(Path {
            start: self.source.clone(),
            edges,
            overall_distance,
        })
    }
}

impl<V, W> Index<&V> for ShortestPaths<V, W>
where
    V: Eq + Hash,
{
    type Output = W;

    /// # Panics
    ///
    /// Panics if the distance of the vertex is not known.
    fn index(&self, index: &V) -> &Self::Output {
        &self.dist[index]
    }
}

/// Single edge of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEdge<V, W> {
    pub from: V,
    pub to: V,
    pub weight: W,
}

/// Shortest path between the source and a destination vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<V, W> {
    start: V,
    edges: Vec<PathEdge<V, W>>,
    overall_distance: W,
}

impl<V, W> Path<V, W> {
    pub fn start(&self) -> &V {
        &self.start
    }

    /// The last vertex of the path. For a path without edges, it is the
    /// start.
    pub fn destination(&self) -> &V {
        self.edges.last().map(|edge| &edge.to).unwrap_or(&self.start)
    }

    pub fn edges(&self) -> &[PathEdge<V, W>] {
        &self.edges
    }

    /// Sum of the weights of all edges on the path.
    pub fn overall_distance(&self) -> &W {
        &self.overall_distance
    }

    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over the vertices on the path, from the start to the
    /// destination.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        std::iter::once(&self.start).chain(self.edges.iter().map(|edge| &edge.to))
    }
}

/// Algorithm for [`ShortestPaths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Algo {
    /// [Dijkstra's
    /// algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
    ///
    /// Dijkstra's algorithm is a popular method on a graph with non-negative
    /// edge weights. It operates by iteratively selecting the vertex with the
    /// smallest known distance from the source and updating the distances of
    /// its neighbors.
    ///
    /// # Use cases
    ///
    /// * Finding the shortest path in road networks.
    /// * Optimizing routing in communication networks.
    /// * Navigation and GPS systems.
    Dijkstra,

    /// [Breadth-first
    /// search](https://en.wikipedia.org/wiki/Breadth-first_search).
    ///
    /// The distance of a vertex is the index of the layer in which it was
    /// discovered and its predecessor is the vertex from which it was
    /// discovered first. Edge weights are ignored unless they are
    /// [constant](crate::core::weight::GetWeight::get_const), every edge
    /// counts as one otherwise.
    ///
    /// # Use cases
    ///
    /// * Fewest hops in unweighted networks.
    /// * Degrees of separation in social graphs.
    Bfs,
}

mod algo {
    use super::Algo;

    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct SpecificAlgo(pub Option<Algo>);

    #[derive(Debug)]
    pub struct Dijkstra;

    #[derive(Debug)]
    pub struct Bfs;
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<V> {
    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered")]
    NegativeWeight { from: V, to: V },

    /// An edge weight that cannot be compared with zero, such as NaN.
    #[error("edge with incomparable weight encountered")]
    InvalidWeight { from: V, to: V },

    /// A distance does not fit the weight type.
    #[error("sum of weights overflowed")]
    Overflow,

    /// The specified goal not reached.
    #[error("specified goal not reached")]
    GoalNotReached,

    /// The source or the goal is not in the graph.
    #[error("vertex does not exist")]
    UnknownVertex(V),
}

fn check_vertices<G>(
    graph: &G,
    source: &G::Vertex,
    goal: Option<&G::Vertex>,
) -> Result<(), Error<G::Vertex>>
where
    G: VertexSet,
{
    for vertex in std::iter::once(source).chain(goal) {
        if !graph.contains_vertex(vertex) {
            return Err(Error::UnknownVertex(vertex.clone()));
        }
    }

    Ok(())
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`].
#[derive(Debug)]
pub struct PathReconstruction<'a, V, W> {
    curr: V,
    pred: &'a FxHashMap<V, (V, W)>,
}

impl<'a, V, W> Iterator for PathReconstruction<'a, V, W>
where
    V: Clone + Eq + Hash,
{
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(&self.curr).map(|(pred, _)| pred.clone())?;
        Some(self.curr.clone())
    }
}
