use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::{Error, Result, VertexId};

/// A candidate entry awaiting processing by the shortest-path engine.
///
/// Ordering is lexicographic on (distance, vertex, predecessor): distance
/// ties break by vertex id, then by predecessor id. The derive relies on
/// field order, so the fields must stay in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierEntry<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Tentative distance from the source at the time of the push
    pub distance: W,

    /// The vertex this entry proposes to finalize
    pub vertex: VertexId,

    /// The vertex that pushed this entry (predecessor at time of push)
    pub predecessor: VertexId,
}

impl<W> FrontierEntry<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    pub fn new(distance: W, vertex: VertexId, predecessor: VertexId) -> Self {
        FrontierEntry {
            distance,
            vertex,
            predecessor,
        }
    }
}

/// An array-backed binary min-heap of frontier entries.
///
/// There is no decrease-key: relaxation pushes a fresh entry each time a
/// distance improves, and superseded entries stay in the heap until they
/// surface at a later pop, where the caller's visited check discards them.
/// The heap therefore holds duplicates for the same vertex by design.
#[derive(Debug, Default)]
pub struct PriorityFrontier<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    entries: Vec<FrontierEntry<W>>,
}

impl<W> PriorityFrontier<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        PriorityFrontier {
            entries: Vec::new(),
        }
    }

    /// Creates a frontier with room for `capacity` entries before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityFrontier {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the frontier holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<&FrontierEntry<W>> {
        self.entries.first()
    }

    /// Inserts an entry in O(log n)
    pub fn push(&mut self, entry: FrontierEntry<W>) {
        self.entries.push(entry);
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the minimum entry in O(log n).
    ///
    /// Popping an empty frontier is an underflow and reports
    /// [`Error::EmptyFrontier`]; callers are expected to check
    /// [`is_empty`](Self::is_empty) first.
    pub fn pop_min(&mut self) -> Result<FrontierEntry<W>> {
        if self.entries.is_empty() {
            return Err(Error::EmptyFrontier);
        }

        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = self.entries.pop().ok_or(Error::EmptyFrontier)?;

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Ok(min)
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index] >= self.entries[parent] {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            if left >= len {
                break;
            }

            // Smaller of the two children; on a tie the left child wins
            let mut child = left;
            if right < len && self.entries[right] < self.entries[left] {
                child = right;
            }

            if self.entries[child] >= self.entries[index] {
                break;
            }
            self.entries.swap(index, child);
            index = child;
        }
    }
}
