use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::graph::traits::{Graph, MutableGraph, VertexId, Weight};
use crate::{Error, Result};

/// A weighted graph stored as a mapping from vertex to its adjacency list.
///
/// The vertex set is fixed up front: `add_arc` and `add_edge` refuse
/// endpoints that were never added, so every arc always points at a live
/// vertex. Parallel arcs and self-loops are stored as given. Undirected
/// edges are represented as one arc per direction.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Outgoing arcs for each vertex: vertex -> [(target, weight)]
    adjacency: HashMap<V, Vec<(V, W)>>,
}

impl<V, W> AdjacencyGraph<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            adjacency: HashMap::new(),
        }
    }
}

impl<W> AdjacencyGraph<usize, W>
where
    W: Weight,
{
    /// Creates a graph whose vertex set is the indices `0..n`
    pub fn with_vertices(n: usize) -> Self {
        let mut graph = AdjacencyGraph {
            adjacency: HashMap::with_capacity(n),
        };

        for v in 0..n {
            graph.adjacency.insert(v, Vec::new());
        }

        graph
    }
}

impl<V, W> Default for AdjacencyGraph<V, W>
where
    V: VertexId,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for AdjacencyGraph<V, W>
where
    V: VertexId,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn arc_count(&self) -> usize {
        self.adjacency.values().map(|arcs| arcs.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(arcs) = self.adjacency.get(vertex) {
            Box::new(arcs.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn has_arc(&self, from: &V, to: &V) -> bool {
        if let Some(arcs) = self.adjacency.get(from) {
            arcs.iter().any(|(target, _)| target == to)
        } else {
            false
        }
    }

    fn arc_weight(&self, from: &V, to: &V) -> Option<W> {
        let arcs = self.adjacency.get(from)?;
        arcs.iter()
            .filter(|(target, _)| target == to)
            .map(|(_, weight)| *weight)
            .min()
    }
}

impl<V, W> MutableGraph<V, W> for AdjacencyGraph<V, W>
where
    V: VertexId,
    W: Weight,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        match self.adjacency.entry(vertex) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Vec::new());
                true
            }
        }
    }

    fn add_arc(&mut self, from: V, to: V, weight: W) -> Result<()> {
        if weight < W::zero() {
            return Err(Error::NegativeWeight(format!("{:?}", weight)));
        }
        if !self.adjacency.contains_key(&to) {
            return Err(Error::UnknownVertex(format!("{:?}", to)));
        }

        match self.adjacency.get_mut(&from) {
            Some(arcs) => {
                arcs.push((to, weight));
                Ok(())
            }
            None => Err(Error::UnknownVertex(format!("{:?}", from))),
        }
    }

    fn add_edge(&mut self, u: V, v: V, weight: W) -> Result<()> {
        self.add_arc(u.clone(), v.clone(), weight)?;
        self.add_arc(v, u, weight)
    }

    fn remove_arc(&mut self, from: &V, to: &V) -> bool {
        if let Some(arcs) = self.adjacency.get_mut(from) {
            let len_before = arcs.len();
            arcs.retain(|(target, _)| target != to);
            len_before > arcs.len()
        } else {
            false
        }
    }
}
