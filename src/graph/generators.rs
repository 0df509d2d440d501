use crate::graph::{AdjacencyGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::ops::Range;

/// Generates a random directed graph on nodes `0..n` with about `edge_factor * n` edges.
///
/// Integer weights are drawn from `weights`; self-loops are skipped. Every node is
/// registered, so nodes without any edge still belong to the universe.
pub fn generate_random(
    n: usize,
    edge_factor: f64,
    weights: Range<i64>,
    seed: u64,
) -> AdjacencyGraph<usize, i64> {
    let mut graph = AdjacencyGraph::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_node(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(weights.clone()));
        }
    }

    graph
}

/// Same as [`generate_random`] with `OrderedFloat<f64>` weights in `[1, 100)`
pub fn generate_random_float(
    n: usize,
    edge_factor: f64,
    seed: u64,
) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_node(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, OrderedFloat(rng.gen_range(1.0..100.0)));
        }
    }

    graph
}

/// Generates a random DAG on nodes `0..n`: edges only go from lower to higher ids,
/// so negative weights never close a cycle.
pub fn generate_dag(n: usize, edge_factor: f64, weights: Range<i64>, seed: u64) -> AdjacencyGraph<usize, i64> {
    let mut graph = AdjacencyGraph::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_node(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            graph.add_edge(a.min(b), a.max(b), rng.gen_range(weights.clone()));
        }
    }

    graph
}

/// Generates a `width * height` grid with undirected unit-weight edges between
/// horizontal and vertical neighbors. Node `(x, y)` has id `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::new();

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            graph.add_node(current);
            if x + 1 < width {
                graph.add_undirected_edge(current, current + 1, OrderedFloat(1.0));
            }
            if y + 1 < height {
                graph.add_undirected_edge(current, current + width, OrderedFloat(1.0));
            }
        }
    }

    graph
}
