use std::hash::Hash;

use super::{
    error::{AddEdgeError, AddVertexError, EdgeLookupError, UnknownVertexError},
    marker::EdgeType,
    weight::Weight,
};

pub trait GraphBase {
    type Vertex: Clone + Eq + Hash;
    type Weight: Weight;
    type EdgeType: EdgeType;

    fn is_directed(&self) -> bool {
        Self::EdgeType::is_directed()
    }
}

pub trait VertexSet: GraphBase {
    type VerticesIter<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a;

    /// Iterates over the vertices in the order in which they were added.
    fn vertices(&self) -> Self::VerticesIter<'_>;

    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
        self.vertices().any(|v| v == vertex)
    }
}

pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: Iterator<Item = (&'a Self::Vertex, &'a Self::Weight)>
    where
        Self: 'a;

    /// Iterates over the targets of the edges leaving `from` together with
    /// the edge weights.
    ///
    /// Neighbors are ordered by the position in which they were added to the
    /// graph, so the order depends only on the sequence of insertions and not
    /// on the storage. In undirected graphs, a self-loop is reported once.
    fn neighbors(
        &self,
        from: &Self::Vertex,
    ) -> Result<Self::NeighborsIter<'_>, UnknownVertexError<Self::Vertex>>;

    fn out_degree(&self, vertex: &Self::Vertex) -> Result<usize, UnknownVertexError<Self::Vertex>> {
        Ok(self.neighbors(vertex)?.count())
    }

    fn in_degree(&self, vertex: &Self::Vertex) -> Result<usize, UnknownVertexError<Self::Vertex>>;
}

pub trait EdgeSet: GraphBase {
    type EdgesIter<'a>: Iterator<Item = (&'a Self::Vertex, &'a Self::Vertex, &'a Self::Weight)>
    where
        Self: 'a;

    /// Iterates over all edges, each exactly once.
    ///
    /// Edges are grouped by their source in vertex order and ordered by
    /// target within a group. An undirected edge is reported with the
    /// endpoint that was added first as the source.
    fn edges(&self) -> Self::EdgesIter<'_>;

    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    fn weight(
        &self,
        from: &Self::Vertex,
        to: &Self::Vertex,
    ) -> Result<&Self::Weight, EdgeLookupError<Self::Vertex>>;

    fn has_edge(&self, from: &Self::Vertex, to: &Self::Vertex) -> bool {
        self.weight(from, to).is_ok()
    }

    /// Returns `true` if the edges do not all share the same weight.
    fn is_weighted(&self) -> bool {
        let mut weights = self.edges().map(|(_, _, weight)| weight);

        match weights.next() {
            Some(first) => weights.any(|weight| weight != first),
            None => false,
        }
    }
}

pub trait GraphRef: VertexSet + Neighbors + EdgeSet {}

impl<G> GraphRef for G where G: VertexSet + Neighbors + EdgeSet {}

pub trait GraphAdd: GraphRef {
    fn add_vertex(&mut self, vertex: Self::Vertex) -> Result<(), AddVertexError<Self::Vertex>>;

    /// Adds an edge between two existing vertices. In undirected graphs, the
    /// edge is reachable from both endpoints.
    fn add_edge(
        &mut self,
        from: &Self::Vertex,
        to: &Self::Vertex,
        weight: Self::Weight,
    ) -> Result<(), AddEdgeError<Self::Weight>>;

    /// Adds the vertex unless it is already present. Returns `true` if the
    /// vertex was added.
    fn ensure_vertex(&mut self, vertex: Self::Vertex) -> bool {
        if self.contains_vertex(&vertex) {
            false
        } else {
            self.add_vertex(vertex).is_ok()
        }
    }

    fn add_unit_edge(
        &mut self,
        from: &Self::Vertex,
        to: &Self::Vertex,
    ) -> Result<(), AddEdgeError<Self::Weight>> {
        self.add_edge(from, to, Self::Weight::one())
    }

    /// Adds an edge, adding its endpoints first if they are not in the graph
    /// yet.
    fn add_edge_connecting(
        &mut self,
        from: Self::Vertex,
        to: Self::Vertex,
        weight: Self::Weight,
    ) -> Result<(), AddEdgeError<Self::Weight>> {
        self.ensure_vertex(from.clone());
        self.ensure_vertex(to.clone());
        self.add_edge(&from, &to, weight)
    }

    fn extend_with_vertices<I>(&mut self, iter: I) -> Result<(), AddVertexError<Self::Vertex>>
    where
        I: IntoIterator<Item = Self::Vertex>,
    {
        for vertex in iter {
            self.add_vertex(vertex)?;
        }

        Ok(())
    }

    /// Adds the edges in order, stopping at the first one that fails.
    fn extend_with_edges<I>(&mut self, iter: I) -> Result<(), AddEdgeError<Self::Weight>>
    where
        I: IntoIterator<Item = (Self::Vertex, Self::Vertex, Self::Weight)>,
    {
        for (from, to, weight) in iter {
            self.add_edge(&from, &to, weight)?;
        }

        Ok(())
    }
}
