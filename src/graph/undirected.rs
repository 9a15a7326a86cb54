use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::{Error, Result, VertexId};

/// A weighted undirected graph with sparse vertex identifiers.
///
/// Adjacency is a mapping from vertex id to a neighbor -> weight mapping;
/// every edge is stored symmetrically in both endpoints' maps. Ordered maps
/// back the storage so that vertex and edge iteration is always in
/// ascending id order.
///
/// Vertices may carry an optional display position. The position is inert
/// metadata for external rendering layers; the shortest-path algorithm
/// never reads it.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// The vertex set
    vertices: BTreeSet<VertexId>,

    /// Symmetric adjacency: vertex_id -> (neighbor_id -> weight)
    adjacency: BTreeMap<VertexId, BTreeMap<VertexId, W>>,

    /// Optional display positions, keyed by vertex id
    positions: HashMap<VertexId, (f64, f64)>,
}

impl<W> WeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        WeightedGraph {
            vertices: BTreeSet::new(),
            adjacency: BTreeMap::new(),
            positions: HashMap::new(),
        }
    }

    /// Adds a vertex to the graph. Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, vertex: VertexId) {
        self.vertices.insert(vertex);
    }

    /// Adds a vertex with a display position, overwriting any previous
    /// position for that vertex.
    pub fn add_vertex_at(&mut self, vertex: VertexId, x: f64, y: f64) {
        self.vertices.insert(vertex);
        self.positions.insert(vertex, (x, y));
    }

    /// Adds an undirected edge between two vertices.
    ///
    /// Missing endpoints are created. The weight is written in both
    /// directions; adding the same pair again overwrites the previous
    /// weight rather than accumulating. Self-loops are stored as given.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: W) {
        self.add_vertex(u);
        self.add_vertex(v);

        self.adjacency.entry(u).or_default().insert(v, weight);
        self.adjacency.entry(v).or_default().insert(u, weight);
    }

    /// Returns true if the vertex exists in the graph
    pub fn has_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Returns the number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of undirected edges in the graph
    pub fn edge_count(&self) -> usize {
        self.all_edges().len()
    }

    /// Returns an iterator over the vertex ids in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }

    /// Returns an iterator over a vertex's (neighbor, weight) pairs in
    /// ascending neighbor order. Unknown or isolated vertices yield an
    /// empty iterator.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, W)> + '_ {
        self.adjacency
            .get(&vertex)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(&n, &w)| (n, w)))
    }

    /// Gets the weight of the edge between two vertices, if it exists
    pub fn edge_weight(&self, u: VertexId, v: VertexId) -> Option<W> {
        self.adjacency.get(&u).and_then(|edges| edges.get(&v)).copied()
    }

    /// Returns every undirected edge exactly once as (u, v, weight).
    ///
    /// Edges appear in the order first encountered while scanning the
    /// adjacency in ascending vertex id; the reverse direction is
    /// suppressed through a seen-pair set.
    pub fn all_edges(&self) -> Vec<(VertexId, VertexId, W)> {
        let mut edges = Vec::new();
        let mut seen: HashSet<(VertexId, VertexId)> = HashSet::new();

        for (&u, neighbors) in &self.adjacency {
            for (&v, &weight) in neighbors {
                if !seen.contains(&(v, u)) {
                    edges.push((u, v, weight));
                    seen.insert((u, v));
                }
            }
        }

        edges
    }

    /// Returns the display position recorded for a vertex, if any
    pub fn position(&self, vertex: VertexId) -> Option<(f64, f64)> {
        self.positions.get(&vertex).copied()
    }

    /// Validates that every edge weight is non-negative.
    ///
    /// Dijkstra's algorithm requires non-negative weights as a
    /// precondition; the engine does not check this itself. Callers that
    /// build graphs from untrusted input can run this pass up front and
    /// get the first offending edge back as [`Error::NegativeWeight`].
    pub fn check_weights(&self) -> Result<()> {
        for (u, v, weight) in self.all_edges() {
            if weight < W::zero() {
                return Err(Error::NegativeWeight(u, v));
            }
        }
        Ok(())
    }
}
