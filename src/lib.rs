//! Heap SSSP - Dijkstra's algorithm over weighted undirected graphs
//!
//! This library computes single-source shortest paths with the classic
//! binary-heap formulation of Dijkstra's algorithm: a lazy-deletion
//! priority frontier (no decrease-key; stale entries are discarded at pop
//! time), a visited set that finalizes each vertex exactly once, and path
//! reconstruction from predecessor links.
//!
//! Frontier entries order lexicographically on (distance, vertex,
//! predecessor), so results are deterministic even when distances tie.
//!
//! Edge weights must be non-negative. The engine does not validate this;
//! [`graph::WeightedGraph::check_weights`] is available as an explicit
//! up-front pass for callers that want the guarantee checked.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{ShortestPathEngine, ShortestPathRun};
pub use data_structures::{FrontierEntry, PriorityFrontier};
/// Re-export main types for convenient use
pub use graph::WeightedGraph;
/// The recommended weight type: a totally ordered float wrapper that
/// satisfies the `Ord` bound the engine's weight parameter requires
pub use ordered_float::OrderedFloat;

/// Vertex identifiers are opaque, sparse, and need not be contiguous.
pub type VertexId = usize;

/// Error types for the library
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Pop from an empty frontier")]
    EmptyFrontier,

    #[error("Unknown vertex: {0}")]
    UnknownVertex(VertexId),

    #[error("Negative edge weight on edge {0} - {1}")]
    NegativeWeight(VertexId, VertexId),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
