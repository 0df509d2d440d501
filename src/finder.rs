use std::cell::RefCell;
use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::algorithm::{AlgorithmKind, ShortestPathResult};
use crate::config::FinderConfig;
use crate::data_structures::{CacheKey, ResultCache};
use crate::graph::{AdjacencyGraph, Graph, MutableGraph, NodeId, Weight};
use crate::Result;

/// A path between two nodes and its total weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath<N, W> {
    /// Nodes from source to target, empty when the target is unreachable
    pub path: Vec<N>,
    /// Total weight, `None` exactly when `path` is empty
    pub distance: Option<W>,
}

impl<N, W> ShortestPath<N, W> {
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Owns a graph and answers `shortest_path` queries against it, reusing results
/// computed for the same source, algorithm and graph version.
///
/// Mutations go through the finder and advance the graph version, which retires
/// every cached result. The cache uses interior mutability, so queries take `&self`.
#[derive(Debug)]
pub struct PathFinder<N, W>
where
    N: NodeId,
    W: Weight,
{
    graph: AdjacencyGraph<N, W>,
    config: FinderConfig,
    cache: RefCell<ResultCache<N, W>>,
    last: RefCell<Option<(CacheKey<N>, Arc<ShortestPathResult<N, W>>)>>,
}

impl<N, W> PathFinder<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Create a finder with the default configuration
    pub fn new(graph: AdjacencyGraph<N, W>) -> Self {
        Self::with_config(graph, FinderConfig::default())
    }

    pub fn with_config(graph: AdjacencyGraph<N, W>, config: FinderConfig) -> Self {
        let cache = ResultCache::new(config.effective_capacity());
        PathFinder {
            graph,
            config,
            cache: RefCell::new(cache),
            last: RefCell::new(None),
        }
    }

    pub fn graph(&self) -> &AdjacencyGraph<N, W> {
        &self.graph
    }

    pub fn into_graph(self) -> AdjacencyGraph<N, W> {
        self.graph
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn add_node(&mut self, node: N) -> bool {
        self.graph.add_node(node)
    }

    pub fn add_edge(&mut self, from: N, to: N, weight: W) -> Option<W> {
        self.graph.add_edge(from, to, weight)
    }

    pub fn add_undirected_edge(&mut self, a: N, b: N, weight: W) {
        self.graph.add_undirected_edge(a, b, weight)
    }

    pub fn remove_edge(&mut self, from: &N, to: &N) -> Option<W> {
        self.graph.remove_edge(from, to)
    }

    /// Run (or fetch) the shortest path tree for `source`
    pub fn compute(&self, algorithm: AlgorithmKind, source: &N) -> Result<Arc<ShortestPathResult<N, W>>> {
        let key = CacheKey {
            source: source.clone(),
            algorithm,
            version: self.graph.version(),
        };

        let cached = self.cache.borrow_mut().get(&key);
        let result = match cached {
            Some(result) => {
                debug!("cache hit for {} from {:?} at version {}", algorithm, source, key.version);
                result
            }
            None => {
                let result = Arc::new(algorithm.run(&self.graph, source)?);
                self.cache.borrow_mut().insert(key.clone(), Arc::clone(&result));
                result
            }
        };

        *self.last.borrow_mut() = Some((key, Arc::clone(&result)));
        Ok(result)
    }

    pub fn dijkstra(&self, source: &N) -> Result<Arc<ShortestPathResult<N, W>>> {
        self.compute(AlgorithmKind::Dijkstra, source)
    }

    pub fn bellman_ford(&self, source: &N) -> Result<Arc<ShortestPathResult<N, W>>> {
        self.compute(AlgorithmKind::BellmanFord, source)
    }

    /// Shortest path from `source` to `target` using the engine named `algorithm`
    /// (`"dijkstra"` or `"bellman-ford"`). The name is checked before any engine runs.
    pub fn shortest_path(&self, source: &N, target: &N, algorithm: &str) -> Result<ShortestPath<N, W>> {
        let algorithm: AlgorithmKind = algorithm.parse()?;
        self.shortest_path_with(source, target, algorithm)
    }

    pub fn shortest_path_with(
        &self,
        source: &N,
        target: &N,
        algorithm: AlgorithmKind,
    ) -> Result<ShortestPath<N, W>> {
        let result = self.compute(algorithm, source)?;
        let path = result.path_to(target);
        let distance = if path.is_empty() {
            None
        } else {
            result.distance(target)
        };
        Ok(ShortestPath { path, distance })
    }

    /// The most recent result, if the graph has not changed since it was computed
    pub fn last_result(&self) -> Option<(AlgorithmKind, Arc<ShortestPathResult<N, W>>)> {
        let last = self.last.borrow();
        match last.as_ref() {
            Some((key, result)) if key.version == self.graph.version() => {
                Some((key.algorithm, Arc::clone(result)))
            }
            _ => None,
        }
    }

    /// `(hits, misses)` of the result cache
    pub fn cache_stats(&self) -> (usize, usize) {
        let cache = self.cache.borrow();
        (cache.hits(), cache.misses())
    }

    pub fn cached_results(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<N, W> From<AdjacencyGraph<N, W>> for PathFinder<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn from(graph: AdjacencyGraph<N, W>) -> Self {
        Self::new(graph)
    }
}
