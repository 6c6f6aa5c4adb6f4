use ordered_float::OrderedFloat;
use rand::prelude::*;

use crate::graph::{AdjacencyGraph, MutableGraph};
use crate::Result;

/// Generates a random undirected graph with n vertices, a spanning tree
/// plus `extra_edges` additional edges, weights drawn from [1, 100)
pub fn random_connected_graph(
    n: usize,
    extra_edges: usize,
) -> Result<AdjacencyGraph<usize, OrderedFloat<f64>>> {
    assert!(n > 0, "n must be positive");

    let mut graph = AdjacencyGraph::with_vertices(n);
    let mut rng = rand::thread_rng();

    // Spanning tree first so every vertex is reachable from vertex 0
    for v in 1..n {
        let u = rng.gen_range(0..v);
        let weight = OrderedFloat(rng.gen_range(1.0..100.0));
        graph.add_edge(u, v, weight)?;
    }

    for _ in 0..extra_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = OrderedFloat(rng.gen_range(1.0..100.0));
        graph.add_edge(u, v, weight)?;
    }

    Ok(graph)
}

/// Generates a width*height grid graph with unit weights (4-connectivity)
pub fn grid_2d(width: usize, height: usize) -> Result<AdjacencyGraph<usize, OrderedFloat<f64>>> {
    let mut graph = AdjacencyGraph::with_vertices(width * height);

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;

            if x + 1 < width {
                graph.add_edge(current, current + 1, OrderedFloat(1.0))?;
            }
            if y + 1 < height {
                graph.add_edge(current, current + width, OrderedFloat(1.0))?;
            }
        }
    }

    Ok(graph)
}
