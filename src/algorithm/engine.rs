use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::data_structures::{FrontierEntry, PriorityFrontier};
use crate::graph::WeightedGraph;
use crate::{Error, Result, VertexId};

/// The finished result of one relaxation run from a single source.
///
/// Each run owns its maps; nothing is shared or carried over between runs,
/// so an engine can serve queries from different sources without state
/// leaking across them.
#[derive(Debug, Clone)]
pub struct ShortestPathRun<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// The source vertex the run started from
    pub source: VertexId,

    /// Final shortest distance per vertex, infinity for unreachable ones
    pub distances: BTreeMap<VertexId, W>,

    /// Final predecessor per vertex; `None` for the source and for
    /// vertices the run never reached
    pub predecessors: BTreeMap<VertexId, Option<VertexId>>,
}

/// Dijkstra's algorithm over a borrowed [`WeightedGraph`].
///
/// The graph is read-only for the duration of every query and may be
/// shared across any number of engines and runs.
///
/// Weights must be non-negative; the engine treats this as a precondition
/// and does not check it (see [`WeightedGraph::check_weights`] for an
/// explicit validation pass).
#[derive(Debug)]
pub struct ShortestPathEngine<'g, W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    graph: &'g WeightedGraph<W>,
}

impl<'g, W> ShortestPathEngine<'g, W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Creates an engine bound to a graph
    pub fn new(graph: &'g WeightedGraph<W>) -> Self {
        ShortestPathEngine { graph }
    }

    /// Computes shortest paths from `source` to every vertex in the graph.
    ///
    /// Returns [`Error::UnknownVertex`] if `source` is not in the graph.
    ///
    /// The frontier starts with a single entry for the source. Each pop
    /// either discards a stale entry (its vertex was already finalized by
    /// a smaller one) or finalizes a vertex: the popped distance is then
    /// the true shortest distance, the popped predecessor is recorded, and
    /// every improving neighbor gets a fresh frontier entry. Entries
    /// superseded by later improvements are never removed eagerly; they
    /// surface later and fail the visited check.
    pub fn run(&self, source: VertexId) -> Result<ShortestPathRun<W>> {
        if !self.graph.has_vertex(source) {
            return Err(Error::UnknownVertex(source));
        }

        let n = self.graph.vertex_count();
        debug!("dijkstra run from {} over {} vertices", source, n);

        // Every vertex starts unreachable except the source
        let mut distances: BTreeMap<VertexId, W> =
            self.graph.vertices().map(|v| (v, W::infinity())).collect();
        let mut predecessors: BTreeMap<VertexId, Option<VertexId>> =
            self.graph.vertices().map(|v| (v, None)).collect();
        let mut visited: BTreeSet<VertexId> = BTreeSet::new();

        distances.insert(source, W::zero());

        let mut frontier = PriorityFrontier::with_capacity(n);
        frontier.push(FrontierEntry::new(W::zero(), source, source));

        while !frontier.is_empty() {
            let entry = frontier.pop_min()?;

            // Lazy deletion: a finalized vertex left stale entries behind
            if visited.contains(&entry.vertex) {
                trace!("discarding stale entry for {}", entry.vertex);
                continue;
            }

            visited.insert(entry.vertex);
            let predecessor = if entry.vertex == source {
                None
            } else {
                Some(entry.predecessor)
            };
            predecessors.insert(entry.vertex, predecessor);

            for (neighbor, weight) in self.graph.neighbors(entry.vertex) {
                if visited.contains(&neighbor) {
                    continue;
                }

                let candidate = entry.distance + weight;
                let known = distances
                    .get(&neighbor)
                    .copied()
                    .unwrap_or_else(W::infinity);

                if candidate < known {
                    trace!(
                        "relax {} -> {}: {:?} improves {:?}",
                        entry.vertex,
                        neighbor,
                        candidate,
                        known
                    );
                    distances.insert(neighbor, candidate);
                    frontier.push(FrontierEntry::new(candidate, neighbor, entry.vertex));
                }
            }
        }

        debug!("finalized {} of {} vertices", visited.len(), n);

        Ok(ShortestPathRun {
            source,
            distances,
            predecessors,
        })
    }

    /// Computes the shortest path between two vertices.
    ///
    /// Returns the ordered vertex sequence from `start` to `end` together
    /// with its total distance. An unreachable `end` is not an error: the
    /// path is empty and the distance infinite. Either endpoint missing
    /// from the graph is [`Error::UnknownVertex`].
    pub fn shortest_path(&self, start: VertexId, end: VertexId) -> Result<(Vec<VertexId>, W)> {
        if !self.graph.has_vertex(end) {
            return Err(Error::UnknownVertex(end));
        }
        self.run(start)?.path_to(end)
    }

    /// Computes the shortest path to every vertex reachable from `start`.
    ///
    /// The start vertex itself is excluded from the mapping.
    pub fn all_shortest_paths(
        &self,
        start: VertexId,
    ) -> Result<BTreeMap<VertexId, (Vec<VertexId>, W)>> {
        Ok(self.run(start)?.all_paths())
    }
}
