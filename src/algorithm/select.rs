use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// Which engine answers a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    /// Priority-queue relaxation, non-negative weights only
    Dijkstra,
    /// Iterative relaxation, negative weights and cycle detection
    BellmanFord,
}

impl AlgorithmKind {
    /// Canonical name, as accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::Dijkstra => Dijkstra.name(),
            AlgorithmKind::BellmanFord => BellmanFord.name(),
        }
    }

    /// Dijkstra unless some edge is negative
    pub fn recommended_for<N, W, G>(graph: &G) -> Self
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
    {
        if graph.has_negative_weight() {
            AlgorithmKind::BellmanFord
        } else {
            AlgorithmKind::Dijkstra
        }
    }

    /// Run the selected engine
    pub fn run<N, W, G>(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
    {
        match self {
            AlgorithmKind::Dijkstra => Dijkstra::new().compute_shortest_paths(graph, source),
            AlgorithmKind::BellmanFord => BellmanFord::new().compute_shortest_paths(graph, source),
        }
    }
}

impl FromStr for AlgorithmKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "dijkstra" => Ok(AlgorithmKind::Dijkstra),
            "bellman-ford" => Ok(AlgorithmKind::BellmanFord),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
