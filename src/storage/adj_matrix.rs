use std::hash::Hash;

use crate::core::{
    marker::{Directed, EdgeType, Undirected},
    AddEdgeError, AddEdgeErrorKind, AddVertexError, AddVertexErrorKind, Create, EdgeLookupError,
    EdgeLookupErrorKind, EdgeSet, GraphAdd, GraphBase, Neighbors, UnknownVertexError, VertexSet,
    Weight,
};

use super::shared::{VertexTable, VerticesIter};

const DEFAULT_CAPACITY: usize = 8;

/// Dense graph storage backed by a matrix of edge weights.
///
/// Undirected graphs store only the lower triangle of the matrix, so an edge
/// is found from both endpoints without being stored twice. Presence of an
/// edge is tracked in a separate bit table, therefore every value of the
/// weight type is a legitimate weight.
///
/// The matrix grows by doubling its capacity whenever a vertex that does not
/// fit is added.
#[derive(Debug, Clone)]
pub struct AdjMatrix<V, W, Ty> {
    vertices: VertexTable<V>,
    matrix: raw::Matrix<W, Ty>,
    n_edges: usize,
}

impl<V, W, Ty> AdjMatrix<V, W, Ty>
where
    V: Clone + Eq + Hash,
    W: Weight,
    Ty: EdgeType,
{
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: VertexTable::with_capacity(capacity),
            matrix: raw::Matrix::with_capacity(capacity),
            n_edges: 0,
        }
    }

    /// Number of vertices the matrix can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.matrix.capacity()
    }

    fn endpoints(&self, from: &V, to: &V) -> Result<(usize, usize), EdgeLookupErrorKind> {
        let from = self
            .vertices
            .position(from)
            .ok_or(EdgeLookupErrorKind::SourceAbsent)?;
        let to = self
            .vertices
            .position(to)
            .ok_or(EdgeLookupErrorKind::DestinationAbsent)?;

        Ok((from, to))
    }
}

impl<V, W> AdjMatrix<V, W, Directed>
where
    V: Clone + Eq + Hash,
    W: Weight,
{
    pub fn new_directed() -> Self {
        Self::new()
    }
}

impl<V, W> AdjMatrix<V, W, Undirected>
where
    V: Clone + Eq + Hash,
    W: Weight,
{
    pub fn new_undirected() -> Self {
        Self::new()
    }
}

impl<V, W, Ty> Default for AdjMatrix<V, W, Ty>
where
    V: Clone + Eq + Hash,
    W: Weight,
    Ty: EdgeType,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W, Ty> GraphBase for AdjMatrix<V, W, Ty>
where
    V: Clone + Eq + Hash,
    W: Weight,
    Ty: EdgeType,
{
    type Vertex = V;
    type Weight = W;
    type EdgeType = Ty;
}

impl<V, W, Ty> VertexSet for AdjMatrix<V, W, Ty>
where
    V: Clone + Eq + Hash,
    W: Weight,
    Ty: EdgeType,
{
    type VerticesIter<'a> = VerticesIter<'a, V>
    where
        Self: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_> {
        self.vertices.iter()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.position(vertex).is_some()
    }
}

impl<V, W, Ty> Neighbors for AdjMatrix<V, W, Ty>
where
    V: Clone + Eq + Hash,
    W: Weight,
    Ty: EdgeType,
{
    type NeighborsIter<'a> = NeighborsIter<'a, V, W, Ty>
    where
        Self: 'a;

    fn neighbors(&self, from: &V) -> Result<Self::NeighborsIter<'_>, UnknownVertexError<V>> {
        let row = self
            .vertices
            .position(from)
            .ok_or_else(|| UnknownVertexError(from.clone()))?;

        Ok(NeighborsIter {
            graph: self,
            row,
            col: 0,
        })
    }

    fn in_degree(&self, vertex: &V) -> Result<usize, UnknownVertexError<V>> {
        if !Ty::is_directed() {
            return self.out_degree(vertex);
        }

        let col = self
            .vertices
            .position(vertex)
            .ok_or_else(|| UnknownVertexError(vertex.clone()))?;

        // Column scan.
        Ok((0..self.vertices.len())
            .filter(|&row| self.matrix.contains(self.matrix.index(row, col)))
            .count())
    }
}

impl<V, W, Ty> EdgeSet for AdjMatrix<V, W, Ty>
where
    V: Clone + Eq + Hash,
    W: Weight,
    Ty: EdgeType,
{
    type EdgesIter<'a> = EdgesIter<'a, V, W, Ty>
    where
        Self: 'a;

    fn edges(&self) -> Self::EdgesIter<'_> {
        EdgesIter {
            graph: self,
            row: 0,
            col: 0,
        }
    }

    fn edge_count(&self) -> usize {
        self.n_edges
    }

    fn weight(&self, from: &V, to: &V) -> Result<&W, EdgeLookupError<V>> {
        let lookup_error = |kind| EdgeLookupError::new(from.clone(), to.clone(), kind);

        let (row, col) = self.endpoints(from, to).map_err(lookup_error)?;

        self.matrix
            .get(self.matrix.index(row, col))
            .ok_or_else(|| lookup_error(EdgeLookupErrorKind::NoSuchEdge))
    }

    fn has_edge(&self, from: &V, to: &V) -> bool {
        match self.endpoints(from, to) {
            Ok((row, col)) => self.matrix.contains(self.matrix.index(row, col)),
            Err(_) => false,
        }
    }
}

impl<V, W, Ty> GraphAdd for AdjMatrix<V, W, Ty>
where
    V: Clone + Eq + Hash,
    W: Weight,
    Ty: EdgeType,
{
    fn add_vertex(&mut self, vertex: V) -> Result<(), AddVertexError<V>> {
        self.vertices
            .insert(vertex)
            .map_err(|vertex| AddVertexError::new(vertex, AddVertexErrorKind::Duplicate))?;

        self.matrix.ensure_capacity(self.vertices.len());
        Ok(())
    }

    fn add_edge(&mut self, from: &V, to: &V, weight: W) -> Result<(), AddEdgeError<W>> {
        let (row, col) = match self.endpoints(from, to) {
            Ok(endpoints) => endpoints,
            Err(EdgeLookupErrorKind::SourceAbsent) => {
                return Err(AddEdgeError::new(weight, AddEdgeErrorKind::SourceAbsent))
            }
            Err(_) => {
                return Err(AddEdgeError::new(
                    weight,
                    AddEdgeErrorKind::DestinationAbsent,
                ))
            }
        };

        let index = self.matrix.index(row, col);

        if self.matrix.contains(index) {
            return Err(AddEdgeError::new(weight, AddEdgeErrorKind::MultiEdge));
        }

        self.matrix.insert(index, weight);
        self.n_edges += 1;

        Ok(())
    }
}

impl<V, W, Ty> Create for AdjMatrix<V, W, Ty>
where
    V: Clone + Eq + Hash,
    W: Weight,
    Ty: EdgeType,
{
    fn empty() -> Self {
        Self::new()
    }

    fn with_capacity(vertex_capacity: usize) -> Self {
        Self::with_capacity(vertex_capacity)
    }
}

#[derive(Debug)]
pub struct NeighborsIter<'a, V, W, Ty> {
    graph: &'a AdjMatrix<V, W, Ty>,
    row: usize,
    col: usize,
}

impl<'a, V, W, Ty> Iterator for NeighborsIter<'a, V, W, Ty>
where
    V: Clone + Eq + Hash,
    W: Weight,
    Ty: EdgeType,
{
    type Item = (&'a V, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;

        while self.col < graph.vertices.len() {
            let col = self.col;
            self.col += 1;

            if let Some(weight) = graph.matrix.get(graph.matrix.index(self.row, col)) {
                return Some((graph.vertices.label(col), weight));
            }
        }

        None
    }
}

#[derive(Debug)]
pub struct EdgesIter<'a, V, W, Ty> {
    graph: &'a AdjMatrix<V, W, Ty>,
    row: usize,
    col: usize,
}

impl<'a, V, W, Ty> Iterator for EdgesIter<'a, V, W, Ty>
where
    V: Clone + Eq + Hash,
    W: Weight,
    Ty: EdgeType,
{
    type Item = (&'a V, &'a V, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let n = graph.vertices.len();

        while self.row < n {
            if self.col >= n {
                self.row += 1;
                // Undirected edges are visited only in the upper triangle
                // (including the diagonal), which covers the stored lower
                // triangle exactly once.
                self.col = if Ty::is_directed() { 0 } else { self.row };
                continue;
            }

            let col = self.col;
            self.col += 1;

            if let Some(weight) = graph.matrix.get(graph.matrix.index(self.row, col)) {
                return Some((graph.vertices.label(self.row), graph.vertices.label(col), weight));
            }
        }

        None
    }
}

mod raw {
    use std::marker::PhantomData;

    use bitvec::prelude::*;

    use crate::common::matrix::{self, MatrixResize};
    use crate::core::{marker::EdgeType, Weight};

    /// Weights with a presence flag for each cell. Cells without an edge hold
    /// a placeholder weight that is never exposed.
    #[derive(Debug, Clone)]
    struct FlaggedVec<W> {
        flags: BitVec,
        data: Vec<W>,
    }

    impl<W> FlaggedVec<W> {
        fn contains(&self, index: usize) -> bool {
            self.flags[index]
        }

        fn get(&self, index: usize) -> Option<&W> {
            if self.flags[index] {
                Some(&self.data[index])
            } else {
                None
            }
        }

        fn insert(&mut self, index: usize, value: W) {
            self.flags.set(index, true);
            self.data[index] = value;
        }
    }

    impl<W> Default for FlaggedVec<W> {
        fn default() -> Self {
            Self {
                flags: BitVec::new(),
                data: Vec::new(),
            }
        }
    }

    struct FlaggedIntoIter<W> {
        flags: BitVec,
        data: std::vec::IntoIter<W>,
        index: usize,
    }

    impl<W> Iterator for FlaggedIntoIter<W> {
        type Item = Option<W>;

        fn next(&mut self) -> Option<Self::Item> {
            let value = self.data.next()?;
            let present = self.flags[self.index];
            self.index += 1;
            Some(present.then_some(value))
        }
    }

    impl<W> IntoIterator for FlaggedVec<W> {
        type Item = Option<W>;
        type IntoIter = FlaggedIntoIter<W>;

        fn into_iter(self) -> Self::IntoIter {
            FlaggedIntoIter {
                flags: self.flags,
                data: self.data.into_iter(),
                index: 0,
            }
        }
    }

    impl<W: Weight> MatrixResize<W> for FlaggedVec<W> {
        fn with_capacity(capacity: usize) -> Self {
            Self {
                flags: BitVec::with_capacity(capacity),
                data: Vec::with_capacity(capacity),
            }
        }

        fn resize_with_none(&mut self, new_len: usize) {
            self.flags.resize(new_len, false);
            self.data.resize_with(new_len, W::zero);
        }

        fn push(&mut self, value: Option<W>) {
            match value {
                Some(value) => {
                    self.flags.push(true);
                    self.data.push(value);
                }
                None => {
                    self.flags.push(false);
                    self.data.push(W::zero());
                }
            }
        }

        fn len(&self) -> usize {
            self.data.len()
        }
    }

    #[derive(Debug, Clone)]
    pub struct Matrix<W, Ty> {
        data: FlaggedVec<W>,
        capacity: usize,
        ty: PhantomData<fn() -> Ty>,
    }

    impl<W: Weight, Ty: EdgeType> Matrix<W, Ty> {
        pub fn with_capacity(capacity: usize) -> Self {
            let mut data = FlaggedVec::default();
            matrix::resize::<W, Ty, _>(&mut data, 0, capacity);

            Self {
                data,
                capacity,
                ty: PhantomData,
            }
        }

        pub fn capacity(&self) -> usize {
            self.capacity
        }

        pub fn ensure_capacity(&mut self, vertex_count: usize) {
            if vertex_count > self.capacity {
                let capacity = vertex_count.max(self.capacity * 2);
                matrix::resize::<W, Ty, _>(&mut self.data, self.capacity, capacity);
                self.capacity = capacity;
            }
        }

        pub fn index(&self, row: usize, col: usize) -> usize {
            matrix::index::<Ty>(row, col, self.capacity)
        }

        pub fn contains(&self, index: usize) -> bool {
            self.data.contains(index)
        }

        pub fn get(&self, index: usize) -> Option<&W> {
            self.data.get(index)
        }

        pub fn insert(&mut self, index: usize, value: W) {
            self.data.insert(index, value);
        }
    }
}
