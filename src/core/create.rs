use super::GraphAdd;

/// Storages that can be constructed empty. The edge type is fixed by the
/// storage's type parameter.
pub trait Create: GraphAdd + Sized {
    fn empty() -> Self;

    // Storages without a notion of capacity ignore the hint.
    fn with_capacity(vertex_capacity: usize) -> Self {
        let _ = vertex_capacity;
        Self::empty()
    }
}
