use std::{
    collections::{btree_set, BTreeSet},
    hash::Hash,
    marker::PhantomData,
};

use rustc_hash::FxHashMap;

use crate::core::{
    marker::{Directed, EdgeType, Undirected},
    AddEdgeError, AddEdgeErrorKind, AddVertexError, AddVertexErrorKind, Create, EdgeLookupError,
    EdgeLookupErrorKind, EdgeSet, GraphAdd, GraphBase, Neighbors, UnknownVertexError, VertexSet,
    Weight,
};

use super::shared::{VertexTable, VerticesIter};

/// Sparse graph storage keeping an ordered set of neighbor positions for
/// every vertex.
///
/// Weights live in a hash map keyed by the pair of endpoint positions. For
/// undirected graphs the key is normalized so that the smaller position comes
/// first and the edge is stored once, while both endpoints list each other
/// as neighbors.
#[derive(Debug, Clone)]
pub struct AdjSet<V, W, Ty> {
    vertices: VertexTable<V>,
    adjacency: Vec<BTreeSet<usize>>,
    weights: FxHashMap<(usize, usize), W>,
    in_degrees: Vec<usize>,
    ty: PhantomData<fn() -> Ty>,
}

impl<V, W, Ty> AdjSet<V, W, Ty>
where
    V: Clone + Eq + Hash,
    W: Weight,
    Ty: EdgeType,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: VertexTable::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
            weights: FxHashMap::default(),
            in_degrees: Vec::with_capacity(capacity),
            ty: PhantomData,
        }
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

    fn key(from: usize, to: usize) -> (usize, usize) {
        if Ty::is_directed() || from <= to {
            (from, to)
        } else {
            (to, from)
        }
    }
}

impl<V, W> AdjSet<V, W, Directed>
where
    V: Clone + Eq + Hash,
    W: Weight,
{
    pub fn new_directed() -> Self {
        Self::new()
    }
}

impl<V, W> AdjSet<V, W, Undirected>
where
    V: Clone + Eq + Hash,
    W: Weight,
{
    pub fn new_undirected() -> Self {
        Self::new()
    }
}

impl<V, W, Ty> Default for AdjSet<V, W, Ty>
where
    V: Clone + Eq + Hash,
    W: Weight,
    Ty: EdgeType,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W, Ty> GraphBase for AdjSet<V, W, Ty>
where
    V: Clone + Eq + Hash,
    W: Weight,
    Ty: EdgeType,
{
    type Vertex = V;
    type Weight = W;
    type EdgeType = Ty;
}

impl<V, W, Ty> VertexSet for AdjSet<V, W, Ty>
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

impl<V, W, Ty> Neighbors for AdjSet<V, W, Ty>
where
    V: Clone + Eq + Hash,
    W: Weight,
    Ty: EdgeType,
{
    type NeighborsIter<'a> = NeighborsIter<'a, V, W, Ty>
    where
        Self: 'a;

    fn neighbors(&self, from: &V) -> Result<Self::NeighborsIter<'_>, UnknownVertexError<V>> {
        let position = self
            .vertices
            .position(from)
            .ok_or_else(|| UnknownVertexError(from.clone()))?;

        Ok(NeighborsIter {
            graph: self,
            from: position,
            inner: self.adjacency[position].iter(),
        })
    }

    fn out_degree(&self, vertex: &V) -> Result<usize, UnknownVertexError<V>> {
        let position = self
            .vertices
            .position(vertex)
            .ok_or_else(|| UnknownVertexError(vertex.clone()))?;

        Ok(self.adjacency[position].len())
    }

    fn in_degree(&self, vertex: &V) -> Result<usize, UnknownVertexError<V>> {
        if !Ty::is_directed() {
            return self.out_degree(vertex);
        }

        let position = self
            .vertices
            .position(vertex)
            .ok_or_else(|| UnknownVertexError(vertex.clone()))?;

        Ok(self.in_degrees[position])
    }
}

impl<V, W, Ty> EdgeSet for AdjSet<V, W, Ty>
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
            next_from: 0,
            current: None,
        }
    }

    fn edge_count(&self) -> usize {
        self.weights.len()
    }

    fn weight(&self, from: &V, to: &V) -> Result<&W, EdgeLookupError<V>> {
        let lookup_error = |kind| EdgeLookupError::new(from.clone(), to.clone(), kind);

        let (from, to) = self.endpoints(from, to).map_err(lookup_error)?;

        self.weights
            .get(&Self::key(from, to))
            .ok_or_else(|| lookup_error(EdgeLookupErrorKind::NoSuchEdge))
    }

    fn has_edge(&self, from: &V, to: &V) -> bool {
        match self.endpoints(from, to) {
            Ok((from, to)) => self.adjacency[from].contains(&to),
            Err(_) => false,
        }
    }
}

impl<V, W, Ty> GraphAdd for AdjSet<V, W, Ty>
where
    V: Clone + Eq + Hash,
    W: Weight,
    Ty: EdgeType,
{
    fn add_vertex(&mut self, vertex: V) -> Result<(), AddVertexError<V>> {
        self.vertices
            .insert(vertex)
            .map_err(|vertex| AddVertexError::new(vertex, AddVertexErrorKind::Duplicate))?;

        self.adjacency.push(BTreeSet::new());
        self.in_degrees.push(0);

        Ok(())
    }

    fn add_edge(&mut self, from: &V, to: &V, weight: W) -> Result<(), AddEdgeError<W>> {
        let (from, to) = match self.endpoints(from, to) {
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

        if !self.adjacency[from].insert(to) {
            return Err(AddEdgeError::new(weight, AddEdgeErrorKind::MultiEdge));
        }

        if Ty::is_directed() {
            self.in_degrees[to] += 1;
        } else {
            self.adjacency[to].insert(from);
        }

        self.weights.insert(Self::key(from, to), weight);

        Ok(())
    }
}

impl<V, W, Ty> Create for AdjSet<V, W, Ty>
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
    graph: &'a AdjSet<V, W, Ty>,
    from: usize,
    inner: btree_set::Iter<'a, usize>,
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
        let to = *self.inner.next()?;
        let weight = &graph.weights[&AdjSet::<V, W, Ty>::key(self.from, to)];

        Some((graph.vertices.label(to), weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[derive(Debug)]
pub struct EdgesIter<'a, V, W, Ty> {
    graph: &'a AdjSet<V, W, Ty>,
    next_from: usize,
    current: Option<(usize, btree_set::Range<'a, usize>)>,
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

        loop {
            if let Some((from, targets)) = self.current.as_mut() {
                if let Some(&to) = targets.next() {
                    let from = *from;
                    let weight = &graph.weights[&AdjSet::<V, W, Ty>::key(from, to)];
                    return Some((graph.vertices.label(from), graph.vertices.label(to), weight));
                }
            }

            let from = self.next_from;
            if from >= graph.adjacency.len() {
                return None;
            }
            self.next_from += 1;

            // An undirected edge is reported from its endpoint with the
            // smaller position only.
            let lower = if Ty::is_directed() { 0 } else { from };
            self.current = Some((from, graph.adjacency[from].range(lower..)));
        }
    }
}
