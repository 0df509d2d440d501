use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Zero;

use crate::graph::NodeUniverse;

/// Label type usable as a node identifier
pub trait NodeId: Clone + Eq + Hash + Ord + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Edge weight type: signed integers or `OrderedFloat<f64>`
pub trait Weight: Copy + Ord + Zero + Debug {}

impl<T> Weight for T where T: Copy + Ord + Zero + Debug {}

/// Trait representing a weighted directed graph
pub trait Graph<N, W>: Debug
where
    N: NodeId,
    W: Weight,
{
    /// Returns every node appearing as a source or as a neighbor, recomputed on each call
    fn node_universe(&self) -> NodeUniverse<N>;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a node
    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_>;

    /// Returns an iterator over every directed edge as `(from, to, weight)`
    fn edges(&self) -> Box<dyn Iterator<Item = (&N, &N, W)> + '_>;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;

    /// Returns true if any edge carries a weight below zero
    fn has_negative_weight(&self) -> bool {
        self.edges().any(|(_, _, weight)| weight < W::zero())
    }

    /// Counter bumped by every mutation
    fn version(&self) -> u64;
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Registers a node with no outgoing edges. Returns false if it already had an entry
    fn add_node(&mut self, node: N) -> bool;

    /// Adds or overwrites the directed edge `from -> to`, returning the replaced weight
    fn add_edge(&mut self, from: N, to: N, weight: W) -> Option<W>;

    /// Adds or overwrites both `a -> b` and `b -> a` with the same weight
    fn add_undirected_edge(&mut self, a: N, b: N, weight: W) {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    /// Removes a directed edge, returning its weight
    fn remove_edge(&mut self, from: &N, to: &N) -> Option<W>;
}
