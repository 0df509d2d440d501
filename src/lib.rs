//! Relax Paths - Single-Source Shortest Paths with path reconstruction
//!
//! This library computes shortest paths from one source node over a weighted
//! directed graph keyed by arbitrary node labels. Two engines share one data model:
//!
//! - [`Dijkstra`], a priority-queue relaxation for graphs without negative weights
//! - [`BellmanFord`], bounded iterative relaxation that tolerates negative weights
//!   and reports negative cycles reachable from the source
//!
//! Results carry distance and predecessor maps; [`algorithm::path::reconstruct`]
//! turns them into concrete node sequences, and [`PathFinder`] bundles a graph
//! with a version-keyed result cache behind a `shortest_path` call.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod finder;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, AlgorithmKind, ShortestPathAlgorithm,
    ShortestPathResult,
};
pub use config::FinderConfig;
pub use finder::{PathFinder, ShortestPath};
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, Graph, MutableGraph, NodeUniverse};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Source node not found in graph: {0}")]
    SourceNotFound(String),

    #[error("Negative weight cycle reachable from source {0}")]
    NegativeCycleDetected(String),

    #[error("Unknown algorithm: {0} (expected \"dijkstra\" or \"bellman-ford\")")]
    UnknownAlgorithm(String),

    #[error("Invalid graph description: {0}")]
    InvalidGraph(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn source_not_found<N: std::fmt::Debug>(source: &N) -> Self {
        Error::SourceNotFound(format!("{:?}", source))
    }

    pub(crate) fn negative_cycle<N: std::fmt::Debug>(source: &N) -> Self {
        Error::NegativeCycleDetected(format!("{:?}", source))
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
