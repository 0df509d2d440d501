use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of `(node, distance)` entries for Dijkstra relaxation.
///
/// A node may be pushed several times with decreasing distances; the queue does not
/// deduplicate, so callers discard stale entries on pop. Ties between equal
/// distances are broken by node order, which carries no meaning.
#[derive(Debug)]
pub struct DistanceQueue<N, W>
where
    N: Ord + Clone + Debug,
    W: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(W, N)>>,
}

impl<N, W> DistanceQueue<N, W>
where
    N: Ord + Clone + Debug,
    W: Ord + Copy + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        DistanceQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DistanceQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, node: N, distance: W) {
        self.heap.push(Reverse((distance, node)));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(N, W)> {
        self.heap.pop().map(|Reverse((distance, node))| (node, distance))
    }

    pub fn peek(&self) -> Option<(&N, W)> {
        self.heap.peek().map(|Reverse((distance, node))| (node, *distance))
    }
}

impl<N, W> Default for DistanceQueue<N, W>
where
    N: Ord + Clone + Debug,
    W: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
