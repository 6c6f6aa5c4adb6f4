use std::collections::HashMap;

use crate::graph::{Graph, VertexId, Weight};
use crate::Result;

/// Result of a shortest path computation: the distance table plus the
/// shortest-path tree that produced it.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Distance from the source to each vertex; `None` marks unreachable
    pub distances: HashMap<V, Option<W>>,

    /// Predecessor of each vertex in the shortest-path tree; the source and
    /// unreachable vertices have no entry
    pub predecessors: HashMap<V, V>,

    /// Source vertex
    pub source: V,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Distance from the source to `vertex`, or `None` if unreachable
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Returns true if a path from the source to `vertex` exists
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some()
    }

    /// Reconstructs the shortest path from the source to `target` as a
    /// sequence of vertices, by walking the predecessor tree backwards.
    /// Returns `None` when `target` is unreachable or unknown.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        self.distance(target)?;

        let mut path = vec![target.clone()];
        let mut current = target;
        while *current != self.source {
            let pred = self.predecessors.get(current)?;
            path.push(pred.clone());
            current = pred;
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: VertexId,
    W: Weight,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
