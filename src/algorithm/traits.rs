use std::collections::HashMap;

use log::trace;

use crate::algorithm::path;
use crate::graph::{Graph, NodeId, NodeUniverse, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
///
/// Both maps hold one entry per node of the universe the query ran against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Distances from source to each node; `None` is positive infinity
    pub distances: HashMap<N, Option<W>>,

    /// Predecessor of each node in the shortest path tree; `None` for the source and unreached nodes
    pub predecessors: HashMap<N, Option<N>>,

    /// Source node
    pub source: N,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Every node unreached with no predecessor, except the source at distance zero
    pub fn initialize(universe: &NodeUniverse<N>, source: N) -> Self {
        let mut distances = HashMap::with_capacity(universe.len());
        let mut predecessors = HashMap::with_capacity(universe.len());
        for node in universe.iter() {
            distances.insert(node.clone(), None);
            predecessors.insert(node.clone(), None);
        }
        distances.insert(source.clone(), Some(W::zero()));

        ShortestPathResult {
            distances,
            predecessors,
            source,
        }
    }

    /// Best known distance to `node`, `None` when unreached or unknown
    pub fn distance(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied().flatten()
    }

    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.predecessors.get(node).and_then(|pred| pred.as_ref())
    }

    pub fn is_reached(&self, node: &N) -> bool {
        self.distance(node).is_some()
    }

    /// Number of nodes with a finite distance, the source included
    pub fn reached_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_some()).count()
    }

    /// Path from the source to `target`, empty when unreachable
    pub fn path_to(&self, target: &N) -> Vec<N> {
        path::reconstruct(&self.predecessors, &self.source, target)
    }

    /// True if `candidate` would strictly improve the distance recorded for `node`
    pub(crate) fn improves(&self, node: &N, candidate: W) -> bool {
        match self.distance(node) {
            None => true,
            Some(current) => candidate < current,
        }
    }

    /// Records `candidate` as the distance of `to` reached through `from`, if it improves.
    /// Distance and predecessor always change together.
    pub(crate) fn relax(&mut self, from: &N, to: &N, candidate: W) -> bool {
        if !self.improves(to, candidate) {
            return false;
        }
        trace!("relax {:?} -> {:?}: {:?}", from, to, candidate);
        self.distances.insert(to.clone(), Some(candidate));
        self.predecessors.insert(to.clone(), Some(from.clone()));
        true
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm {
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from a source node to every node of the graph
    fn compute_shortest_paths<N, W, G>(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path<N, W>(&self, result: &ShortestPathResult<N, W>, target: &N) -> Vec<N>
    where
        N: NodeId,
        W: Weight,
    {
        result.path_to(target)
    }
}
