//! Label-setting single-source shortest paths.
//!
//! This library computes minimum-weight path distances from a source vertex
//! to every reachable vertex of a non-negatively weighted graph, using
//! priority-queue relaxation (Dijkstra's algorithm) with lazy deletion of
//! stale frontier entries.
//!
//! Graphs are adjacency lists keyed by an opaque vertex identifier, so the
//! same engine serves integer-indexed and label-keyed graphs alike.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Negative edge weight: {0}")]
    NegativeWeight(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
