use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, instrument};

use crate::{
    common::{DecreasePriorityError, PriorityQueue},
    core::{
        weight::{GetWeight, Weight},
        Neighbors, VertexSet,
    },
};

use super::{check_vertices, Algo, Error, ShortestPaths};

#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count()))]
pub fn dijkstra<G, W, F>(
    graph: &G,
    source: G::Vertex,
    goal: Option<G::Vertex>,
    edge_weight: F,
) -> Result<ShortestPaths<G::Vertex, W>, Error<G::Vertex>>
where
    G: Neighbors + VertexSet,
    W: Weight,
    F: GetWeight<G::Weight, W>,
{
    check_vertices(graph, &source, goal.as_ref())?;

    // Not using FixedBitSet with CompactVertexMap because the algorithm
    // supports early termination when reaching given goal. It is likely that
    // reaching goal means visiting a subgraph which is significantly smaller
    // than the whole graph.
    let mut visited = FxHashSet::default();

    let mut dist = FxHashMap::default();
    let mut pred: FxHashMap<G::Vertex, (G::Vertex, W)> = FxHashMap::default();
    let mut queue = PriorityQueue::new();

    dist.insert(source.clone(), W::zero());
    queue.push(source.clone(), W::Ord::from(W::zero()));

    let mut goal_reached = false;

    while let Some((vertex, vertex_dist)) = queue.pop_min() {
        let vertex_dist: W = vertex_dist.into();
        visited.insert(vertex.clone());

        if goal.as_ref() == Some(&vertex) {
            goal_reached = true;
            break;
        }

        let Ok(neighbors) = graph.neighbors(&vertex) else {
            continue;
        };

        for (next, weight) in neighbors {
            let edge_dist = edge_weight
                .get_const()
                .unwrap_or_else(|| edge_weight.get(weight));

            // Checked before skipping visited vertices so that a negative edge
            // is reported regardless of the direction it is reached from.
            if edge_dist.partial_cmp(&W::zero()).is_none() {
                debug!("incomparable weight encountered");
                return Err(Error::InvalidWeight {
                    from: vertex.clone(),
                    to: next.clone(),
                });
            }

            if !W::is_unsigned() && edge_dist < W::zero() {
                debug!("negative weight encountered");
                return Err(Error::NegativeWeight {
                    from: vertex.clone(),
                    to: next.clone(),
                });
            }

            if visited.contains(next) {
                continue;
            }

            let Some(next_dist) = vertex_dist.checked_add(&edge_dist) else {
                debug!("distance overflowed");
                return Err(Error::Overflow);
            };

            match dist.get_mut(next) {
                Some(curr_dist) => {
                    // Relaxation operation. If the distance is better than what
                    // we had so far, update it.
                    if next_dist < *curr_dist {
                        *curr_dist = next_dist.clone();
                        pred.insert(next.clone(), (vertex.clone(), edge_dist));

                        let priority = W::Ord::from(next_dist);
                        if let Err(DecreasePriorityError::NotQueued) =
                            queue.decrease_priority(next, priority.clone())
                        {
                            queue.push(next.clone(), priority);
                        }
                    }
                }
                None => {
                    dist.insert(next.clone(), next_dist.clone());
                    pred.insert(next.clone(), (vertex.clone(), edge_dist));
                    queue.push(next.clone(), W::Ord::from(next_dist));
                }
            }
        }
    }

    if goal.is_some() {
        if !goal_reached {
            debug!(visited = visited.len(), "goal not reached");
            return Err(Error::GoalNotReached);
        }

        // Distances of the vertices that were not finished yet are only
        // tentative.
        dist.retain(|vertex, _| visited.contains(vertex));
        pred.retain(|vertex, _| visited.contains(vertex));
    }

    Ok(ShortestPaths {
        source,
        dist,
        pred,
        algo: Algo::Dijkstra,
    })
}
