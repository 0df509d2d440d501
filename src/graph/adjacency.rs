use crate::graph::traits::{Graph, MutableGraph, NodeId, Weight};
use crate::graph::NodeUniverse;
use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

/// A directed graph stored as nested adjacency maps: node -> (neighbor -> weight)
///
/// At most one weight is kept per ordered pair; inserting an edge again replaces it.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Outgoing edges for each node that has been used as an edge source or registered
    adjacency: HashMap<N, HashMap<N, W>>,

    /// Bumped on every mutation so cached results can detect staleness
    version: u64,
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            adjacency: HashMap::new(),
            version: 0,
        }
    }

    /// Creates a graph from an initial adjacency structure
    pub fn from_adjacency(adjacency: HashMap<N, HashMap<N, W>>) -> Self {
        AdjacencyGraph {
            adjacency,
            version: 0,
        }
    }

    /// Borrow the raw adjacency structure
    pub fn adjacency(&self) -> &HashMap<N, HashMap<N, W>> {
        &self.adjacency
    }

    /// Consumes the graph, returning its adjacency structure
    pub fn into_adjacency(self) -> HashMap<N, HashMap<N, W>> {
        self.adjacency
    }

    fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: NodeId + DeserializeOwned + Serialize,
    W: Weight + DeserializeOwned + Serialize,
{
    /// Parses a JSON object of objects such as `{"A": {"B": 4.0}, "B": {}}`
    pub fn from_json(json: &str) -> Result<Self> {
        let adjacency: HashMap<N, HashMap<N, W>> = serde_json::from_str(json)?;
        Ok(Self::from_adjacency(adjacency))
    }

    /// Serializes the adjacency structure in the format accepted by [`Self::from_json`]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.adjacency)?)
    }
}

impl<N, W> Default for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> From<HashMap<N, HashMap<N, W>>> for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn from(adjacency: HashMap<N, HashMap<N, W>>) -> Self {
        Self::from_adjacency(adjacency)
    }
}

impl<N, W> FromIterator<(N, N, W)> for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn from_iter<I: IntoIterator<Item = (N, N, W)>>(iter: I) -> Self {
        let mut graph = AdjacencyGraph::new();
        for (from, to, weight) in iter {
            graph.add_edge(from, to, weight);
        }
        graph
    }
}

impl<N, W> Graph<N, W> for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn node_universe(&self) -> NodeUniverse<N> {
        NodeUniverse::from_adjacency(&self.adjacency)
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_> {
        if let Some(edges) = self.adjacency.get(node) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (&N, &N, W)> + '_> {
        Box::new(self.adjacency.iter().flat_map(|(source, edges)| {
            edges
                .iter()
                .map(move |(target, weight)| (source, target, *weight))
        }))
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.adjacency
            .get(from)
            .and_then(|edges| edges.get(to))
            .copied()
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl<N, W> MutableGraph<N, W> for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, HashMap::new());
        self.bump_version();
        true
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> Option<W> {
        self.bump_version();
        self.adjacency.entry(from).or_default().insert(to, weight)
    }

    fn add_undirected_edge(&mut self, a: N, b: N, weight: W) {
        self.bump_version();
        self.adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone(), weight);
        self.adjacency.entry(b).or_default().insert(a, weight);
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> Option<W> {
        let removed = self.adjacency.get_mut(from).and_then(|edges| edges.remove(to));
        if removed.is_some() {
            self.bump_version();
        }
        removed
    }
}
