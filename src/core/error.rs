use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("adding vertex failed: {kind}")]
pub struct AddVertexError<V> {
    pub vertex: V,
    pub kind: AddVertexErrorKind,
}

impl<V> AddVertexError<V> {
    pub fn new(vertex: V, kind: AddVertexErrorKind) -> Self {
        Self { vertex, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddVertexErrorKind {
    Duplicate,
}

impl fmt::Display for AddVertexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddVertexErrorKind::Duplicate => "the vertex is already in the graph",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<W> {
    pub weight: W,
    pub kind: AddEdgeErrorKind,
}

impl<W> AddEdgeError<W> {
    pub fn new(weight: W, kind: AddEdgeErrorKind) -> Self {
        Self { weight, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
    MultiEdge,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
            AddEdgeErrorKind::MultiEdge => {
                "an edge already exists and the graph does not allow multi edges"
            }
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("vertex does not exist")]
pub struct UnknownVertexError<V>(pub V);

#[derive(Debug, Error, PartialEq)]
#[error("edge lookup failed: {kind}")]
pub struct EdgeLookupError<V> {
    pub from: V,
    pub to: V,
    pub kind: EdgeLookupErrorKind,
}

impl<V> EdgeLookupError<V> {
    pub fn new(from: V, to: V, kind: EdgeLookupErrorKind) -> Self {
        Self { from, to, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeLookupErrorKind {
    SourceAbsent,
    DestinationAbsent,
    NoSuchEdge,
}

impl fmt::Display for EdgeLookupErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            EdgeLookupErrorKind::SourceAbsent => "source does not exist",
            EdgeLookupErrorKind::DestinationAbsent => "destination does not exist",
            EdgeLookupErrorKind::NoSuchEdge => "there is no edge between the vertices",
        };
        f.write_str(reason)
    }
}
