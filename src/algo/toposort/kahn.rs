use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::{
    common::CompactVertexMap,
    core::{Neighbors, VertexSet},
};

use super::{
    dfs::{traverse, State},
    Algo, Cycle, Error, TopoSort,
};

#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count()))]
pub fn kahn<G>(graph: &G) -> Result<TopoSort<G::Vertex>, Error<G::Vertex>>
where
    G: Neighbors + VertexSet,
{
    if !graph.is_directed() {
        return Err(Error::Undirected);
    }

    let map = CompactVertexMap::from_graph(graph);
    let mut in_deg = Vec::with_capacity(map.len());
    let mut queue = VecDeque::new();

    for (position, vertex) in map.iter().enumerate() {
        let deg = graph.in_degree(vertex).unwrap_or(0);
        in_deg.push(deg);

        if deg == 0 {
            queue.push_back(position);
        }
    }

    let mut sorted = Vec::with_capacity(map.len());

    // FIFO order keeps the vertices that become available at the same time
    // in the order of their insertion.
    while let Some(position) = queue.pop_front() {
        sorted.push(position);

        let Ok(neighbors) = graph.neighbors(map.vertex(position)) else {
            continue;
        };

        for (next, _) in neighbors {
            let Some(next) = map.position(next) else {
                continue;
            };

            let deg = &mut in_deg[next];
            *deg -= 1;

            if *deg == 0 {
                queue.push_back(next);
            }
        }
    }

    if sorted.len() != map.len() {
        // The remaining vertices all have a non-zero in-degree from other
        // remaining vertices, so a traversal restricted to them must run into
        // a cycle.
        let mut state = vec![State::Unvisited; map.len()];
        for &position in sorted.iter() {
            state[position] = State::Done;
        }

        let mut finished = Vec::new();
        let roots = (0..map.len()).filter(|&position| in_deg[position] > 0);

        return match traverse(graph, &map, &mut state, roots, &mut finished) {
            Err(cycle) => {
                debug!(length = cycle.len(), sorted = sorted.len(), "cycle found");
                Err(Error::Cycle(cycle))
            }
            // Only a storage reporting inconsistent degrees gets here.
            Ok(()) => {
                let remaining = (0..map.len())
                    .filter(|&position| in_deg[position] > 0)
                    .map(|position| map.vertex(position).clone())
                    .collect();
                Err(Error::Cycle(Cycle::new(remaining)))
            }
        };
    }

    let order = sorted
        .into_iter()
        .map(|position| map.vertex(position).clone())
        .collect();

    Ok(TopoSort {
        order,
        algo: Algo::Kahn,
    })
}
