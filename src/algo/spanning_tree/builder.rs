use crate::core::{GraphBase, GraphRef};

use super::{algo, kruskal::kruskal, prim::prim, Algo, Error, SpanningForest};

pub struct SpanningForestBuilder<'a, G, A>
where
    G: GraphBase,
{
    graph: &'a G,
    start: Option<G::Vertex>,
    algo: A,
}

impl<V, W> SpanningForest<V, W> {
    pub fn on<G>(graph: &G) -> SpanningForestBuilder<'_, G, algo::AnyAlgo>
    where
        G: GraphBase<Vertex = V, Weight = W>,
    {
        SpanningForestBuilder {
            graph,
            start: None,
            algo: algo::AnyAlgo,
        }
    }
}

impl<'a, G, A> SpanningForestBuilder<'a, G, A>
where
    G: GraphBase,
{
    /// Vertex from which Prim's algorithm grows the tree. Defaults to the
    /// first vertex of the graph.
    ///
    /// Without an explicitly chosen algorithm, setting the start selects
    /// Prim's algorithm.
    pub fn start(self, start: G::Vertex) -> Self {
        Self {
            start: Some(start),
            ..self
        }
    }

    pub fn prim(self) -> SpanningForestBuilder<'a, G, algo::Prim> {
        SpanningForestBuilder {
            graph: self.graph,
            start: self.start,
            algo: algo::Prim,
        }
    }

    pub fn kruskal(self) -> SpanningForestBuilder<'a, G, algo::Kruskal> {
        SpanningForestBuilder {
            graph: self.graph,
            start: self.start,
            algo: algo::Kruskal,
        }
    }

    pub fn using(self, algo: Algo) -> SpanningForestBuilder<'a, G, algo::SpecificAlgo> {
        SpanningForestBuilder {
            graph: self.graph,
            start: self.start,
            algo: algo::SpecificAlgo(Some(algo)),
        }
    }

    pub fn using_opt(self, algo: Option<Algo>) -> SpanningForestBuilder<'a, G, algo::SpecificAlgo> {
        SpanningForestBuilder {
            graph: self.graph,
            start: self.start,
            algo: algo::SpecificAlgo(algo),
        }
    }

    fn choose_algo(&self) -> Algo {
        if self.start.is_some() {
            Algo::Prim
        } else {
            Algo::default()
        }
    }
}

impl<'a, G> SpanningForestBuilder<'a, G, algo::AnyAlgo>
where
    G: GraphRef,
{
    pub fn run(self) -> Result<SpanningForest<G::Vertex, G::Weight>, Error<G::Vertex>> {
        match self.choose_algo() {
            Algo::Prim => prim(self.graph, self.start),
            Algo::Kruskal => kruskal(self.graph),
        }
    }
}

impl<'a, G> SpanningForestBuilder<'a, G, algo::Prim>
where
    G: GraphRef,
{
    pub fn run(self) -> Result<SpanningForest<G::Vertex, G::Weight>, Error<G::Vertex>> {
        prim(self.graph, self.start)
    }
}

impl<'a, G> SpanningForestBuilder<'a, G, algo::Kruskal>
where
    G: GraphRef,
{
    pub fn run(self) -> Result<SpanningForest<G::Vertex, G::Weight>, Error<G::Vertex>> {
        kruskal(self.graph)
    }
}

impl<'a, G> SpanningForestBuilder<'a, G, algo::SpecificAlgo>
where
    G: GraphRef,
{
    pub fn run(self) -> Result<SpanningForest<G::Vertex, G::Weight>, Error<G::Vertex>> {
        let algo = self.algo.0.unwrap_or_else(|| self.choose_algo());

        match algo {
            Algo::Prim => prim(self.graph, self.start),
            Algo::Kruskal => kruskal(self.graph),
        }
    }
}
