use std::collections::BTreeMap;
use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::algorithm::ShortestPathRun;
use crate::{Error, Result, VertexId};

impl<W> ShortestPathRun<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Returns the recorded distance to a vertex, `None` for ids the run
    /// never saw. Unreachable vertices report infinity, not `None`.
    pub fn distance(&self, vertex: VertexId) -> Option<W> {
        self.distances.get(&vertex).copied()
    }

    /// Reconstructs the shortest path from the run's source to `target`.
    ///
    /// Walks predecessor links backward until the source and reverses the
    /// collected sequence. Unreachable targets give an empty path with an
    /// infinite distance; a target the run never saw is
    /// [`Error::UnknownVertex`]. The source itself reconstructs as the
    /// one-vertex path.
    pub fn path_to(&self, target: VertexId) -> Result<(Vec<VertexId>, W)> {
        let distance = self
            .distance(target)
            .ok_or(Error::UnknownVertex(target))?;

        match self.walk_back(target) {
            Some(path) => Ok((path, distance)),
            None => Ok((Vec::new(), W::infinity())),
        }
    }

    /// Reconstructs the path to every reachable vertex except the source,
    /// as a mapping vertex -> (path, distance).
    pub fn all_paths(&self) -> BTreeMap<VertexId, (Vec<VertexId>, W)> {
        let mut paths = BTreeMap::new();

        for (&vertex, &distance) in &self.distances {
            if vertex == self.source || distance == W::infinity() {
                continue;
            }
            if let Some(path) = self.walk_back(vertex) {
                paths.insert(vertex, (path, distance));
            }
        }

        paths
    }

    /// Collects target..=source through predecessor links, reversed into
    /// source..=target. `None` when the chain dead-ends before the source,
    /// which is exactly the unreachable case since only finalized vertices
    /// carry a predecessor.
    fn walk_back(&self, target: VertexId) -> Option<Vec<VertexId>> {
        let mut path = Vec::new();
        let mut current = target;

        loop {
            path.push(current);
            if current == self.source {
                break;
            }
            current = (*self.predecessors.get(&current)?)?;
        }

        path.reverse();
        Some(path)
    }
}
