use std::hash::{BuildHasherDefault, Hash};

use rustc_hash::FxHashMap;

use crate::core::VertexSet;

/// Mapping from vertex labels to a contiguous sequence of positions that can
/// be used to index plain vectors and bit sets in algorithms.
///
/// Positions follow the order of [`VertexSet::vertices`], so the first vertex
/// added to the graph gets position 0.
#[derive(Debug)]
pub struct CompactVertexMap<'a, V> {
    vertices: Vec<&'a V>,
    positions: FxHashMap<&'a V, usize>,
}

impl<'a, V: Eq + Hash> CompactVertexMap<'a, V> {
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a V>,
    {
        let vertices = iter.collect::<Vec<_>>();
        let mut positions =
            FxHashMap::with_capacity_and_hasher(vertices.len(), BuildHasherDefault::default());

        for (position, vertex) in vertices.iter().enumerate() {
            positions.insert(*vertex, position);
        }

        Self {
            vertices,
            positions,
        }
    }

    pub fn from_graph<G>(graph: &'a G) -> Self
    where
        G: VertexSet<Vertex = V>,
    {
        Self::new(graph.vertices())
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn position(&self, vertex: &V) -> Option<usize> {
        self.positions.get(vertex).copied()
    }

    /// Returns the vertex at given position.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn vertex(&self, position: usize) -> &'a V {
        self.vertices[position]
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a V> + '_ {
        self.vertices.iter().copied()
    }
}
