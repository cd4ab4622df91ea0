use std::collections::{hash_map::Entry, VecDeque};

use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use crate::core::{
    weight::{GetWeight, Weight},
    Neighbors, VertexSet,
};

use super::{check_vertices, Algo, Error, ShortestPaths};

#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count()))]
pub fn bfs<G, W, F>(
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

    // Stored weights are not looked at, every edge is one layer away unless
    // the weight is constant.
    let edge_dist = edge_weight.get_const().unwrap_or_else(W::one);

    // Not using FixedBitSet with CompactVertexMap because the algorithm
    // supports early termination when reaching given goal. A vertex is
    // discovered iff it has a distance.
    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();
    let mut queue = VecDeque::new();
    let mut goal_reached = false;

    dist.insert(source.clone(), W::zero());
    queue.push_back((source.clone(), W::zero()));

    while let Some((vertex, vertex_dist)) = queue.pop_front() {
        if goal.as_ref() == Some(&vertex) {
            goal_reached = true;
            break;
        }

        let Ok(neighbors) = graph.neighbors(&vertex) else {
            continue;
        };

        for (next, _) in neighbors {
            if edge_dist.partial_cmp(&W::zero()).is_none() {
                debug!("incomparable weight encountered");
                return Err(Error::InvalidWeight {
                    from: vertex.clone(),
                    to: next.clone(),
                });
            }

            // The check for unsignedness should eliminate the negativity
            // weight check, because the implementation of `is_unsigned` method
            // is always a constant boolean in practice.
            if !W::is_unsigned() && edge_dist < W::zero() {
                debug!("negative weight encountered");
                return Err(Error::NegativeWeight {
                    from: vertex.clone(),
                    to: next.clone(),
                });
            }

            if let Entry::Vacant(slot) = dist.entry(next.clone()) {
                let Some(next_dist) = vertex_dist.checked_add(&edge_dist) else {
                    debug!("distance overflowed");
                    return Err(Error::Overflow);
                };
                slot.insert(next_dist.clone());
                pred.insert(next.clone(), (vertex.clone(), edge_dist.clone()));
                queue.push_back((next.clone(), next_dist));
            }
        }
    }

    if goal.is_some() && !goal_reached {
        debug!(discovered = dist.len(), "goal not reached");
        return Err(Error::GoalNotReached);
    }

    Ok(ShortestPaths {
        source,
        dist,
        pred,
        algo: Algo::Bfs,
    })
}
