use std::collections::HashMap;

use log::debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{Graph, VertexId, Weight};
use crate::{Error, Result};

/// Classic label-setting shortest path (Dijkstra's algorithm).
///
/// The frontier is a binary heap without decrease-key: improving a vertex's
/// tentative distance pushes a fresh entry and leaves the superseded one in
/// place, to be discarded when it surfaces at pop time. Edge weights must be
/// non-negative; the graph builder enforces this at construction.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Shortest distance from `source` to `target` only.
    ///
    /// Runs the same relaxation loop as `compute_shortest_paths` but stops
    /// as soon as `target` is finalized, leaving the rest of the graph
    /// unexplored. Returns `None` when no path exists.
    pub fn compute_distance_to<V, W, G>(
        &self,
        graph: &G,
        source: &V,
        target: &V,
    ) -> Result<Option<W>>
    where
        V: VertexId,
        W: Weight,
        G: Graph<V, W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }
        if !graph.has_vertex(target) {
            return Err(Error::UnknownVertex(format!("{:?}", target)));
        }

        let mut distances: HashMap<V, W> = HashMap::new();
        distances.insert(source.clone(), W::zero());

        let mut queue = BinaryHeapWrapper::new();
        queue.push(source.clone(), W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            match distances.get(&u) {
                Some(current) if *current < dist_u => continue,
                _ => {}
            }

            // Popping the target finalizes it
            if u == *target {
                return Ok(Some(dist_u));
            }

            for (v, weight) in graph.neighbors(&u) {
                let candidate = dist_u + weight;

                let improves = match distances.get(v) {
                    Some(current) => candidate < *current,
                    None => true,
                };

                if improves {
                    distances.insert(v.clone(), candidate);
                    queue.push(v.clone(), candidate);
                }
            }
        }

        Ok(None)
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: VertexId,
    W: Weight,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        // Every vertex starts unreachable; the source starts at zero
        let mut distances: HashMap<V, Option<W>> =
            graph.vertices().map(|v| (v.clone(), None)).collect();
        let mut predecessors: HashMap<V, V> = HashMap::new();
        distances.insert(source.clone(), Some(W::zero()));

        let mut queue = BinaryHeapWrapper::new();
        queue.push(source.clone(), W::zero());

        let mut settled = 0usize;
        let mut stale = 0usize;

        while let Some((u, dist_u)) = queue.pop() {
            // A smaller distance for u was already finalized; the entry is
            // stale and carries no work
            if let Some(Some(current)) = distances.get(&u) {
                if *current < dist_u {
                    stale += 1;
                    continue;
                }
            }
            settled += 1;

            // Relax all arcs leaving u
            for (v, weight) in graph.neighbors(&u) {
                let candidate = dist_u + weight;

                let improves = match distances.get(v) {
                    Some(Some(current)) => candidate < *current,
                    _ => true,
                };

                if improves {
                    distances.insert(v.clone(), Some(candidate));
                    predecessors.insert(v.clone(), u.clone());
                    queue.push(v.clone(), candidate);
                }
            }
        }

        debug!(
            "dijkstra from {:?}: {} of {} vertices settled, {} stale pops",
            source,
            settled,
            graph.vertex_count(),
            stale
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
        })
    }
}
