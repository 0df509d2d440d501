use std::collections::HashSet;

use log::{debug, trace};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::DistanceQueue;
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Only correct for non-negative weights. Negative weights are not rejected: the
/// run completes and returns distances that may not be minimal, and predecessor
/// chains that may not match them. Use [`BellmanFord`](crate::BellmanFord) for such graphs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn compute_shortest_paths<N, W, G>(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
    {
        let universe = graph.node_universe();
        if !universe.contains(source) {
            return Err(Error::source_not_found(source));
        }
        debug!(
            "dijkstra from {:?}: {} nodes, {} edges",
            source,
            universe.len(),
            graph.edge_count()
        );

        let mut result = ShortestPathResult::initialize(&universe, source.clone());
        let mut finalized: HashSet<N> = HashSet::with_capacity(universe.len());
        let mut queue = DistanceQueue::with_capacity(universe.len());
        queue.push(source.clone(), W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            if !finalized.insert(u.clone()) {
                trace!("skipping stale entry {:?} at {:?}", u, dist_u);
                continue;
            }

            for (v, weight) in graph.outgoing_edges(&u) {
                let candidate = dist_u + weight;
                // Finalized neighbors are still updated; with negative weights this
                // leaves a result that is not minimal rather than an error.
                if result.relax(&u, v, candidate) {
                    queue.push(v.clone(), candidate);
                }
            }
        }

        debug!("dijkstra from {:?}: finalized {} nodes", source, finalized.len());
        Ok(result)
    }
}
