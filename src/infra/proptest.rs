use std::fmt;

use proptest::{
    collection::vec,
    sample::Index,
    strategy::{BoxedStrategy, Just, Strategy},
};

use crate::core::{Create, Weight};

/// Structural guarantee of a generated graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Any,
    /// Every edge goes from a smaller label to a greater one, so the numeric
    /// order of labels is a topological order. There are no self-loops.
    Acyclic,
    /// Every vertex is reachable from the first inserted vertex, following
    /// the edge directions if the graph is directed.
    Connected,
}

/// Vertices and edges of a random graph, independent of the storage it is
/// later built into.
///
/// Vertices are labelled `0..n` but inserted in a shuffled order. Edges
/// that would duplicate an already inserted one are skipped when building.
#[derive(Debug, Clone)]
pub struct GraphRecipe<W> {
    pub vertices: Vec<u32>,
    pub edges: Vec<(u32, u32, W)>,
}

impl<W: Weight> GraphRecipe<W> {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn build<G>(&self) -> G
    where
        G: Create<Vertex = u32, Weight = W>,
    {
        let mut graph = G::with_capacity(self.vertices.len());

        for vertex in self.vertices.iter() {
            graph.ensure_vertex(*vertex);
        }

        for (from, to, weight) in self.edges.iter() {
            if !graph.has_edge(from, to) {
                let _ = graph.add_edge(from, to, weight.clone());
            }
        }

        graph
    }
}

pub fn graph_recipe<W, S>(
    max_vertices: usize,
    weight: S,
    shape: Shape,
) -> BoxedStrategy<GraphRecipe<W>>
where
    W: Weight + fmt::Debug + 'static,
    S: Strategy<Value = W> + Clone + 'static,
{
    (0..=max_vertices)
        .prop_flat_map(move |n| {
            let order = Just((0..n as u32).collect::<Vec<_>>()).prop_shuffle();
            let edges = vec((any_index(), any_index(), weight.clone()), 0..=3 * n);
            let tree = vec((any_index(), weight.clone()), n.saturating_sub(1));

            (order, edges, tree).prop_map(move |(order, edges, tree)| {
                assemble(n, shape, order, edges, tree)
            })
        })
        .boxed()
}

fn any_index() -> impl Strategy<Value = Index> + Clone {
    proptest::arbitrary::any::<Index>()
}

fn assemble<W>(
    n: usize,
    shape: Shape,
    order: Vec<u32>,
    edges: Vec<(Index, Index, W)>,
    tree: Vec<(Index, W)>,
) -> GraphRecipe<W> {
    if n == 0 {
        return GraphRecipe {
            vertices: order,
            edges: Vec::new(),
        };
    }

    let mut recipe_edges = Vec::with_capacity(edges.len() + tree.len());

    if shape == Shape::Connected {
        // Attach every vertex to one inserted before it.
        for (i, (parent, weight)) in tree.into_iter().enumerate() {
            let child = i + 1;
            let parent = parent.index(child);
            recipe_edges.push((order[parent], order[child], weight));
        }
    }

    for (from, to, weight) in edges {
        let from = from.index(n) as u32;
        let to = to.index(n) as u32;

        match shape {
            Shape::Acyclic if from == to => continue,
            Shape::Acyclic => recipe_edges.push((from.min(to), from.max(to), weight)),
            _ => recipe_edges.push((from, to, weight)),
        }
    }

    GraphRecipe {
        vertices: order,
        edges: recipe_edges,
    }
}
