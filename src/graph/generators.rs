use crate::graph::{DirectedGraph, Graph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with n vertices and roughly `edges` edges.
/// Weights are drawn from `1.0..100.0`; self-loops are skipped.
/// The same seed always yields the same graph.
pub fn generate_random(n: usize, edges: usize, seed: u64) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_vertices(n);
    if n < 2 {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a random graph whose weights are small integers, so that many
/// vertices tie on distance. Useful for shaking out predecessor bugs.
pub fn generate_random_integral(
    n: usize,
    edges: usize,
    max_weight: u32,
    seed: u64,
) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_vertices(n);
    if n == 0 {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = OrderedFloat(rng.gen_range(0..=max_weight) as f64);
        graph.add_edge(u, v, weight);
    }

    graph
}

/// Generates a width*height grid with 8-connectivity.
/// Cardinal moves cost 1.0, diagonal moves cost 1.4.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_vertices(width * height);

    let directions = [
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, OrderedFloat(cost));
                }
            }
        }
    }

    debug_assert_eq!(graph.vertex_count(), width * height);
    graph
}
