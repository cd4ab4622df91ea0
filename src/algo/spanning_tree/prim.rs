use fixedbitset::FixedBitSet;
use tracing::{debug, instrument};

use crate::{
    common::{CompactVertexMap, DecreasePriorityError, PriorityQueue},
    core::{GraphRef, Weight},
};

use super::{Algo, Error, SpanningForest};

#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count()))]
pub fn prim<G>(
    graph: &G,
    start: Option<G::Vertex>,
) -> Result<SpanningForest<G::Vertex, G::Weight>, Error<G::Vertex>>
where
    G: GraphRef,
{
    if graph.is_directed() {
        return Err(Error::Directed);
    }

    let map = CompactVertexMap::from_graph(graph);

    let start = match start {
        Some(start) => map.position(&start).ok_or(Error::UnknownVertex(start))?,
        None if map.is_empty() => {
            return Ok(SpanningForest {
                edges: Vec::new(),
                total_weight: G::Weight::zero(),
                component_count: 0,
                algo: Algo::Prim,
            });
        }
        None => 0,
    };

    let mut in_tree = FixedBitSet::with_capacity(map.len());
    // The lightest known edge connecting a vertex to the tree.
    let mut connection: Vec<Option<(usize, G::Weight)>> = vec![None; map.len()];
    let mut queue = PriorityQueue::new();

    let mut edges = Vec::with_capacity(map.len() - 1);
    let mut total_weight = G::Weight::zero();

    queue.push(start, <G::Weight as Weight>::Ord::from(G::Weight::zero()));

    while let Some((vertex, _)) = queue.pop_min() {
        in_tree.insert(vertex);

        if let Some((parent, weight)) = connection[vertex].take() {
            total_weight = total_weight.checked_add(&weight).ok_or_else(|| {
                debug!("total weight overflowed");
                Error::Overflow
            })?;
            edges.push((
                map.vertex(parent).clone(),
                map.vertex(vertex).clone(),
                weight,
            ));
        }

        let Ok(neighbors) = graph.neighbors(map.vertex(vertex)) else {
            continue;
        };

        for (next, weight) in neighbors {
            let Some(next) = map.position(next) else {
                continue;
            };

            if in_tree.contains(next) {
                continue;
            }

            let priority = <G::Weight as Weight>::Ord::from(weight.clone());

            let improves = match &connection[next] {
                Some((_, current)) => priority < <G::Weight as Weight>::Ord::from(current.clone()),
                None => true,
            };

            if improves {
                connection[next] = Some((vertex, weight.clone()));

                if let Err(DecreasePriorityError::NotQueued) =
                    queue.decrease_priority(&next, priority.clone())
                {
                    queue.push(next, priority);
                }
            }
        }
    }

    let reached = in_tree.count_ones(..);
    if reached < map.len() {
        debug!(reached, total = map.len(), "graph is disconnected");
        return Err(Error::Disconnected {
            reached,
            total: map.len(),
        });
    }

    Ok(SpanningForest {
        edges,
        total_weight,
        component_count: 1,
        algo: Algo::Prim,
    })
}
