use std::hash::{BuildHasherDefault, Hash};

use rustc_hash::FxHashMap;

pub type VerticesIter<'a, V> = std::slice::Iter<'a, V>;

/// Vertex labels in insertion order together with the reverse mapping to
/// their positions.
#[derive(Debug, Clone)]
pub(crate) struct VertexTable<V> {
    labels: Vec<V>,
    positions: FxHashMap<V, usize>,
}

impl<V: Clone + Eq + Hash> VertexTable<V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, BuildHasherDefault::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn position(&self, vertex: &V) -> Option<usize> {
        self.positions.get(vertex).copied()
    }

    pub fn label(&self, position: usize) -> &V {
        &self.labels[position]
    }

    pub fn iter(&self) -> VerticesIter<'_, V> {
        self.labels.iter()
    }

    /// Inserts the vertex and returns its position, or gives the vertex back
    /// if it is already present.
    pub fn insert(&mut self, vertex: V) -> Result<usize, V> {
        if self.positions.contains_key(&vertex) {
            return Err(vertex);
        }

        let position = self.labels.len();
        self.positions.insert(vertex.clone(), position);
        self.labels.push(vertex);

        Ok(position)
    }
}
