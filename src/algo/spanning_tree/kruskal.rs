use tracing::{debug, instrument};

use crate::{
    common::DisjointSet,
    core::{GraphRef, Weight},
};

use super::{Algo, Error, SpanningForest};

#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn kruskal<G>(graph: &G) -> Result<SpanningForest<G::Vertex, G::Weight>, Error<G::Vertex>>
where
    G: GraphRef,
{
    if graph.is_directed() {
        return Err(Error::Directed);
    }

    let mut components = graph.vertices().collect::<DisjointSet<_>>();
    let limit = components.len().saturating_sub(1);

    let mut edges = graph.edges().collect::<Vec<_>>();
    // Stable, so edges of equal weight keep the order of the storage.
    edges.sort_by_cached_key(|(_, _, weight)| <G::Weight as Weight>::Ord::from((*weight).clone()));

    let mut forest = Vec::with_capacity(limit);
    let mut total_weight = G::Weight::zero();

    for (from, to, weight) in edges {
        if forest.len() == limit {
            break;
        }

        if components.union(&from, &to) == Some(true) {
            total_weight = total_weight.checked_add(weight).ok_or_else(|| {
                debug!("total weight overflowed");
                Error::Overflow
            })?;
            forest.push((from.clone(), to.clone(), weight.clone()));
        }
    }

    let component_count = components.set_count();
    debug!(edges = forest.len(), components = component_count, "forest found");

    Ok(SpanningForest {
        edges: forest,
        total_weight,
        component_count,
        algo: Algo::Kruskal,
    })
}
