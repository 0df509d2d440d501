//! Bellman-Ford single-source shortest paths.
//!
//! Negative edge weights are allowed. A negative weight cycle reachable from the
//! source makes the run fail with [`Error::NegativeCycleDetected`] instead of
//! returning distances.

use log::debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// Bounded iterative edge relaxation, O(V * E)
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }

    /// One pass over every edge whose tail is reached. Returns true if any distance changed.
    fn relax_all<N, W, G>(graph: &G, result: &mut ShortestPathResult<N, W>) -> bool
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
    {
        let mut updated = false;
        for (u, v, weight) in graph.edges() {
            if let Some(dist_u) = result.distance(u) {
                if result.relax(u, v, dist_u + weight) {
                    updated = true;
                }
            }
        }
        updated
    }

    /// Independent scan of the full edge set after relaxation has settled.
    /// Any edge that still improves its head lies on or behind a negative cycle.
    fn find_improvable_edge<'g, N, W, G>(
        graph: &'g G,
        result: &ShortestPathResult<N, W>,
    ) -> Option<(&'g N, &'g N)>
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
    {
        graph
            .edges()
            .find(|(u, v, weight)| match result.distance(u) {
                Some(dist_u) => result.improves(v, dist_u + *weight),
                None => false,
            })
            .map(|(u, v, _)| (u, v))
    }
}

impl ShortestPathAlgorithm for BellmanFord {
    fn name(&self) -> &'static str {
        "bellman-ford"
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
            "bellman-ford from {:?}: {} nodes, {} edges",
            source,
            universe.len(),
            graph.edge_count()
        );

        let mut result = ShortestPathResult::initialize(&universe, source.clone());
        let max_passes = universe.len().saturating_sub(1);

        let mut passes = 0;
        while passes < max_passes {
            passes += 1;
            if !Self::relax_all(graph, &mut result) {
                debug!("bellman-ford from {:?}: settled after {} passes", source, passes);
                break;
            }
        }

        if let Some((u, v)) = Self::find_improvable_edge(graph, &result) {
            debug!(
                "bellman-ford from {:?}: edge {:?} -> {:?} still relaxes after {} passes",
                source, u, v, passes
            );
            return Err(Error::negative_cycle(source));
        }

        Ok(result)
    }
}
