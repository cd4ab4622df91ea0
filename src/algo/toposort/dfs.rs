use tracing::{debug, instrument};

use crate::{
    common::CompactVertexMap,
    core::{Neighbors, VertexSet},
};

use super::{Algo, Cycle, Error, TopoSort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum State {
    Unvisited,
    InProgress,
    Done,
}

#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count()))]
pub fn dfs<G>(graph: &G) -> Result<TopoSort<G::Vertex>, Error<G::Vertex>>
where
    G: Neighbors + VertexSet,
{
    if !graph.is_directed() {
        return Err(Error::Undirected);
    }

    let map = CompactVertexMap::from_graph(graph);
    let mut state = vec![State::Unvisited; map.len()];
    let mut finished = Vec::with_capacity(map.len());

    traverse(graph, &map, &mut state, 0..map.len(), &mut finished).map_err(|cycle| {
        debug!(length = cycle.len(), "cycle found");
        Error::Cycle(cycle)
    })?;

    let order = finished
        .into_iter()
        .rev()
        .map(|position| map.vertex(position).clone())
        .collect();

    Ok(TopoSort {
        order,
        algo: Algo::Dfs,
    })
}

/// Depth-first traversal from each of the unvisited `roots`, pushing the
/// positions of vertices to `finished` as they are closed. Vertices already
/// marked as done are treated as if they were removed from the graph.
pub(super) fn traverse<'a, G, I>(
    graph: &'a G,
    map: &CompactVertexMap<'a, G::Vertex>,
    state: &mut [State],
    roots: I,
    finished: &mut Vec<usize>,
) -> Result<(), Cycle<G::Vertex>>
where
    G: Neighbors,
    I: IntoIterator<Item = usize>,
{
    let mut stack: Vec<(usize, Option<G::NeighborsIter<'a>>)> = Vec::new();

    for root in roots {
        if state[root] != State::Unvisited {
            continue;
        }

        state[root] = State::InProgress;
        stack.push((root, graph.neighbors(map.vertex(root)).ok()));

        while let Some((vertex, neighbors)) = stack.last_mut() {
            match neighbors.as_mut().and_then(Iterator::next) {
                Some((next, _)) => {
                    let Some(next) = map.position(next) else {
                        continue;
                    };

                    match state[next] {
                        State::Unvisited => {
                            state[next] = State::InProgress;
                            stack.push((next, graph.neighbors(map.vertex(next)).ok()));
                        }
                        State::InProgress => {
                            // The edge goes back to a vertex on the current
                            // path, which closes the cycle.
                            let start = stack
                                .iter()
                                .position(|(vertex, _)| *vertex == next)
                                .unwrap_or(0);

                            let vertices = stack[start..]
                                .iter()
                                .map(|(vertex, _)| map.vertex(*vertex).clone())
                                .collect();

                            return Err(Cycle::new(vertices));
                        }
                        State::Done => {}
                    }
                }
                None => {
                    let vertex = *vertex;
                    state[vertex] = State::Done;
                    finished.push(vertex);
                    stack.pop();
                }
            }
        }
    }

    Ok(())
}
