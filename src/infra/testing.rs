use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{Create, GraphRef, Weight};

/// Complete graph on vertices `0..vertex_count` with unit weights.
pub fn create_complete<W, G>(vertex_count: u32) -> G
where
    W: Weight,
    G: Create<Vertex = u32, Weight = W>,
{
    let mut graph = G::with_capacity(vertex_count as usize);

    for u in 0..vertex_count {
        graph.ensure_vertex(u);
    }

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u == v {
                continue;
            }

            if !graph.is_directed() && v < u {
                continue;
            }

            let _ = graph.add_unit_edge(&u, &v);
        }
    }

    graph
}

/// Path `0 -> 1 -> ... -> vertex_count - 1` with unit weights.
pub fn create_path<W, G>(vertex_count: u32) -> G
where
    W: Weight,
    G: Create<Vertex = u32, Weight = W>,
{
    let mut graph = G::with_capacity(vertex_count as usize);

    for v in 0..vertex_count {
        graph.ensure_vertex(v);

        if v > 0 {
            let _ = graph.add_unit_edge(&(v - 1), &v);
        }
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertices iterator count ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("neighbor of vertex {0} (zero-based) has no matching weight lookup")]
    NeighborWeightMismatch(usize),
    #[error("edge {0} (zero-based) is not reported among neighbors of its source")]
    EdgeNotNeighbor(usize),
    #[error("edge {0} (zero-based) is not reachable from its destination in undirected graph")]
    AsymmetricEdge(usize),
    #[error("neighbors of vertex {0} (zero-based) are not in vertex order")]
    NeighborOrder(usize),
    #[error("sum of out degrees ({0}) does not match edge count ({1})")]
    OutDegreeSum(usize, usize),
    #[error("sum of in degrees ({0}) does not match edge count ({1})")]
    InDegreeSum(usize, usize),
}

pub fn check_consistency<G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    G: GraphRef,
{
    fn cmp<F>(actual: usize, expected: usize, error: F) -> Result<(), ConsistencyCheckError>
    where
        F: FnOnce(usize, usize) -> ConsistencyCheckError,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    let vertex_count = graph.vertex_count();
    let edge_count = graph.edge_count();

    cmp(
        graph.vertices().count(),
        vertex_count,
        ConsistencyCheckError::VerticesVertexCountMismatch,
    )?;
    cmp(
        graph.edges().count(),
        edge_count,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    let positions = graph
        .vertices()
        .enumerate()
        .map(|(i, v)| (v, i))
        .collect::<FxHashMap<_, _>>();

    let mut out_deg_sum = 0;
    let mut in_deg_sum = 0;

    for (i, vertex) in graph.vertices().enumerate() {
        let neighbors = graph
            .neighbors(vertex)
            .map_err(|_| ConsistencyCheckError::NeighborWeightMismatch(i))?;

        let mut previous = None;

        for (neighbor, weight) in neighbors {
            if graph.weight(vertex, neighbor).ok() != Some(weight) {
                return Err(ConsistencyCheckError::NeighborWeightMismatch(i));
            }

            let position = positions.get(neighbor).copied();
            if position.is_none() || position <= previous {
                return Err(ConsistencyCheckError::NeighborOrder(i));
            }
            previous = position;
        }

        out_deg_sum += graph
            .out_degree(vertex)
            .map_err(|_| ConsistencyCheckError::NeighborWeightMismatch(i))?;
        in_deg_sum += graph
            .in_degree(vertex)
            .map_err(|_| ConsistencyCheckError::NeighborWeightMismatch(i))?;
    }

    let mut self_loops = 0;

    for (i, (from, to, _)) in graph.edges().enumerate() {
        let is_neighbor = graph
            .neighbors(from)
            .map(|mut neighbors| neighbors.any(|(neighbor, _)| neighbor == to))
            .unwrap_or(false);

        if !is_neighbor {
            return Err(ConsistencyCheckError::EdgeNotNeighbor(i));
        }

        if !graph.is_directed() && !graph.has_edge(to, from) {
            return Err(ConsistencyCheckError::AsymmetricEdge(i));
        }

        if from == to {
            self_loops += 1;
        }
    }

    if graph.is_directed() {
        cmp(out_deg_sum, edge_count, ConsistencyCheckError::OutDegreeSum)?;
        cmp(in_deg_sum, edge_count, ConsistencyCheckError::InDegreeSum)?;
    } else {
        // A self-loop counts once towards the degree of its vertex.
        let expected = 2 * edge_count - self_loops;
        cmp(out_deg_sum, expected, ConsistencyCheckError::OutDegreeSum)?;
        cmp(in_deg_sum, expected, ConsistencyCheckError::InDegreeSum)?;
    }

    Ok(())
}
