use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use log::debug;

use crate::algorithm::{AlgorithmKind, ShortestPathResult};
use crate::graph::{NodeId, Weight};

/// Identifies one query against one state of the graph
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey<N> {
    pub source: N,
    pub algorithm: AlgorithmKind,
    /// Graph version the result was computed against
    pub version: u64,
}

/// Bounded cache of shortest path results.
///
/// All entries belong to a single graph version. A lookup or insert carrying a
/// different version drops every entry first, so results never outlive the graph
/// state they were computed on. Eviction is first in, first out.
#[derive(Debug)]
pub struct ResultCache<N, W>
where
    N: NodeId,
    W: Weight,
{
    entries: HashMap<CacheKey<N>, Arc<ShortestPathResult<N, W>>>,
    order: VecDeque<CacheKey<N>>,
    capacity: usize,
    version: u64,
    hits: usize,
    misses: usize,
}

impl<N, W> ResultCache<N, W>
where
    N: NodeId,
    W: Weight,
{
    pub fn new(capacity: usize) -> Self {
        ResultCache {
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
            version: 0,
            hits: 0,
            misses: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    fn sync_version(&mut self, version: u64) {
        if version != self.version {
            if !self.entries.is_empty() {
                debug!(
                    "graph version {} -> {}, dropping {} cached results",
                    self.version,
                    version,
                    self.entries.len()
                );
            }
            self.clear();
            self.version = version;
        }
    }

    pub fn get(&mut self, key: &CacheKey<N>) -> Option<Arc<ShortestPathResult<N, W>>> {
        self.sync_version(key.version);
        match self.entries.get(key) {
            Some(result) => {
                self.hits += 1;
                Some(Arc::clone(result))
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Stores a result. With zero capacity only the version bookkeeping happens.
    pub fn insert(&mut self, key: CacheKey<N>, result: Arc<ShortestPathResult<N, W>>) {
        self.sync_version(key.version);
        if self.capacity == 0 {
            return;
        }
        if !self.entries.contains_key(&key) {
            while self.entries.len() >= self.capacity {
                match self.order.pop_front() {
                    Some(oldest) => {
                        self.entries.remove(&oldest);
                    }
                    None => break,
                }
            }
            self.order.push_back(key.clone());
        }
        self.entries.insert(key, result);
    }
}
