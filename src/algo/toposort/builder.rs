use crate::core::{Neighbors, VertexSet};

use super::{algo, dfs::dfs, kahn::kahn, Algo, Error, TopoSort};

pub struct TopoSortBuilder<'a, G, A> {
    graph: &'a G,
    algo: A,
}

impl<V> TopoSort<V> {
    pub fn on<G>(graph: &G) -> TopoSortBuilder<'_, G, algo::AnyAlgo>
    where
        G: VertexSet<Vertex = V>,
    {
        TopoSortBuilder {
            graph,
            algo: algo::AnyAlgo,
        }
    }
}

impl<'a, G, A> TopoSortBuilder<'a, G, A> {
    pub fn dfs(self) -> TopoSortBuilder<'a, G, algo::Dfs> {
        TopoSortBuilder {
            graph: self.graph,
            algo: algo::Dfs,
        }
    }

    pub fn kahn(self) -> TopoSortBuilder<'a, G, algo::Kahn> {
        TopoSortBuilder {
            graph: self.graph,
            algo: algo::Kahn,
        }
    }

    pub fn using(self, algo: Algo) -> TopoSortBuilder<'a, G, algo::SpecificAlgo> {
        TopoSortBuilder {
            graph: self.graph,
            algo: algo::SpecificAlgo(Some(algo)),
        }
    }

    pub fn using_opt(self, algo: Option<Algo>) -> TopoSortBuilder<'a, G, algo::SpecificAlgo> {
        TopoSortBuilder {
            graph: self.graph,
            algo: algo::SpecificAlgo(algo),
        }
    }
}

impl<'a, G> TopoSortBuilder<'a, G, algo::AnyAlgo>
where
    G: Neighbors + VertexSet,
{
    pub fn run(self) -> Result<TopoSort<G::Vertex>, Error<G::Vertex>> {
        dfs(self.graph)
    }
}

impl<'a, G> TopoSortBuilder<'a, G, algo::Dfs>
where
    G: Neighbors + VertexSet,
{
    pub fn run(self) -> Result<TopoSort<G::Vertex>, Error<G::Vertex>> {
        dfs(self.graph)
    }
}

impl<'a, G> TopoSortBuilder<'a, G, algo::Kahn>
where
    G: Neighbors + VertexSet,
{
    pub fn run(self) -> Result<TopoSort<G::Vertex>, Error<G::Vertex>> {
        kahn(self.graph)
    }
}

impl<'a, G> TopoSortBuilder<'a, G, algo::SpecificAlgo>
where
    G: Neighbors + VertexSet,
{
    pub fn run(self) -> Result<TopoSort<G::Vertex>, Error<G::Vertex>> {
        match self.algo.0.unwrap_or_default() {
            Algo::Dfs => dfs(self.graph),
            Algo::Kahn => kahn(self.graph),
        }
    }
}
