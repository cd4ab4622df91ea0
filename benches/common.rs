#![allow(dead_code)]

use fastrand::Rng;
use graphkit::core::Create;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Samples the lower triangle of the adjacency matrix, each pair `(v, w)`
/// with `w < v` independently with probability `p`. Taken as directed edges,
/// the result is acyclic.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

pub fn graphkit_random<G>(vertex_count: usize, density: f32, rng: &mut Rng) -> G
where
    G: Create<Vertex = u32, Weight = f32>,
{
    let mut graph = G::with_capacity(vertex_count);

    for v in 0..vertex_count as u32 {
        graph.ensure_vertex(v);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        let _ = graph.add_edge(&(u as u32), &(v as u32), rng.f32());
    }

    graph
}

pub fn petgraph_random<Ty: petgraph::EdgeType>(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<u32, f32, Ty> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for v in 0..vertex_count as u32 {
        graph.add_node(v);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.f32());
    }

    graph
}
