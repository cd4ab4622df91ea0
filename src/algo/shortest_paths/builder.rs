use std::marker::PhantomData;

use crate::core::{
    weight::{self, GetWeight, Weight},
    GraphBase, Neighbors, VertexSet,
};

use super::{algo, bfs::bfs, dijkstra::dijkstra, Algo, Error, ShortestPaths};

pub struct ShortestPathsBuilder<'a, W, G, F, A>
where
    G: GraphBase,
{
    graph: &'a G,
    goal: Option<G::Vertex>,
    edge_weight: F,
    algo: A,
    ty: PhantomData<fn() -> W>,
}

impl<V, W> ShortestPaths<V, W> {
    pub fn on<G>(graph: &G) -> ShortestPathsBuilder<'_, W, G, weight::Identity, algo::AnyAlgo>
    where
        G: GraphBase<Vertex = V>,
    {
        ShortestPathsBuilder {
            graph,
            goal: None,
            edge_weight: weight::Identity,
            algo: algo::AnyAlgo,
            ty: PhantomData,
        }
    }
}

impl<'a, W, G, F, A> ShortestPathsBuilder<'a, W, G, F, A>
where
    G: GraphBase,
{
    /// Stops the search once the shortest path to the goal is known.
    pub fn goal(self, goal: G::Vertex) -> Self {
        Self {
            goal: Some(goal),
            ..self
        }
    }

    pub fn edge_weight<F2>(self, edge_weight: F2) -> ShortestPathsBuilder<'a, W, G, F2, A>
    where
        F2: GetWeight<G::Weight, W>,
        W: Weight,
    {
        ShortestPathsBuilder {
            edge_weight,
            graph: self.graph,
            goal: self.goal,
            algo: self.algo,
            ty: PhantomData,
        }
    }

    // Using closures in `edge_weight` gives "type annotations needed" for the
    // closure argument. This method that uses explicit Fn signature circumvents
    // the problem.
    pub fn edge_weight_fn<F2>(self, edge_weight: F2) -> ShortestPathsBuilder<'a, W, G, F2, A>
    where
        F2: Fn(&G::Weight) -> W,
        W: Weight,
    {
        self.edge_weight(edge_weight)
    }

    /// Counts hops instead of summing the stored weights.
    pub fn unit_weight(self) -> ShortestPathsBuilder<'a, W, G, weight::Unit, A> {
        ShortestPathsBuilder {
            edge_weight: weight::Unit,
            graph: self.graph,
            goal: self.goal,
            algo: self.algo,
            ty: PhantomData,
        }
    }

    pub fn dijkstra(self) -> ShortestPathsBuilder<'a, W, G, F, algo::Dijkstra>
    where
        G: Neighbors + VertexSet,
    {
        ShortestPathsBuilder {
            graph: self.graph,
            goal: self.goal,
            edge_weight: self.edge_weight,
            algo: algo::Dijkstra,
            ty: PhantomData,
        }
    }

    pub fn bfs(self) -> ShortestPathsBuilder<'a, W, G, F, algo::Bfs>
    where
        G: Neighbors + VertexSet,
    {
        ShortestPathsBuilder {
            graph: self.graph,
            goal: self.goal,
            edge_weight: self.edge_weight,
            algo: algo::Bfs,
            ty: PhantomData,
        }
    }

    pub fn using(self, algo: Algo) -> ShortestPathsBuilder<'a, W, G, F, algo::SpecificAlgo>
    where
        G: Neighbors + VertexSet,
    {
        ShortestPathsBuilder {
            graph: self.graph,
            goal: self.goal,
            edge_weight: self.edge_weight,
            algo: algo::SpecificAlgo(Some(algo)),
            ty: PhantomData,
        }
    }

    pub fn using_opt(
        self,
        algo: Option<Algo>,
    ) -> ShortestPathsBuilder<'a, W, G, F, algo::SpecificAlgo>
    where
        G: Neighbors + VertexSet,
    {
        ShortestPathsBuilder {
            graph: self.graph,
            goal: self.goal,
            edge_weight: self.edge_weight,
            algo: algo::SpecificAlgo(algo),
            ty: PhantomData,
        }
    }
}

impl<'a, W, G, F> ShortestPathsBuilder<'a, W, G, F, algo::AnyAlgo>
where
    G: GraphBase,
{
    pub fn run(self, source: G::Vertex) -> Result<ShortestPaths<G::Vertex, W>, Error<G::Vertex>>
    where
        G: Neighbors + VertexSet,
        F: GetWeight<G::Weight, W>,
        W: Weight,
    {
        let algo = self.choose_algo();
        let ShortestPathsBuilder {
            graph,
            goal,
            edge_weight,
            ..
        } = self;

        match algo {
            Algo::Dijkstra => dijkstra(graph, source, goal, edge_weight),
            Algo::Bfs => bfs(graph, source, goal, edge_weight),
        }
    }
}

impl<'a, W, G, F> ShortestPathsBuilder<'a, W, G, F, algo::Dijkstra>
where
    G: GraphBase,
{
    pub fn run(self, source: G::Vertex) -> Result<ShortestPaths<G::Vertex, W>, Error<G::Vertex>>
    where
        G: Neighbors + VertexSet,
        F: GetWeight<G::Weight, W>,
        W: Weight,
    {
        let ShortestPathsBuilder {
            graph,
            goal,
            edge_weight,
            ..
        } = self;

        dijkstra(graph, source, goal, edge_weight)
    }
}

impl<'a, W, G, F> ShortestPathsBuilder<'a, W, G, F, algo::Bfs>
where
    G: GraphBase,
{
    pub fn run(self, source: G::Vertex) -> Result<ShortestPaths<G::Vertex, W>, Error<G::Vertex>>
    where
        G: Neighbors + VertexSet,
        F: GetWeight<G::Weight, W>,
        W: Weight,
    {
        let ShortestPathsBuilder {
            graph,
            goal,
            edge_weight,
            ..
        } = self;

        bfs(graph, source, goal, edge_weight)
    }
}

impl<'a, W, G, F> ShortestPathsBuilder<'a, W, G, F, algo::SpecificAlgo>
where
    G: GraphBase,
{
    pub fn run(self, source: G::Vertex) -> Result<ShortestPaths<G::Vertex, W>, Error<G::Vertex>>
    where
        G: Neighbors + VertexSet,
        F: GetWeight<G::Weight, W>,
        W: Weight,
    {
        let algo = self.algo.0.unwrap_or_else(|| self.choose_algo());
        let ShortestPathsBuilder {
            graph,
            goal,
            edge_weight,
            ..
        } = self;

        match algo {
            Algo::Dijkstra => dijkstra(graph, source, goal, edge_weight),
            Algo::Bfs => bfs(graph, source, goal, edge_weight),
        }
    }
}

impl<'a, W, G, F, A> ShortestPathsBuilder<'a, W, G, F, A>
where
    G: GraphBase,
{
    fn choose_algo(&self) -> Algo
    where
        F: GetWeight<G::Weight, W>,
        W: Weight,
    {
        match self.edge_weight.get_const() {
            // The weight is constant, we can use standard BFS algorithm
            // without any overhead.
            Some(weight) if W::is_unsigned() || weight >= W::zero() => Algo::Bfs,
            _ => Algo::Dijkstra,
        }
    }
}
