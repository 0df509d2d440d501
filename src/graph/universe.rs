use std::collections::{HashMap, HashSet};

use crate::graph::traits::NodeId;

/// Every node of a graph: sources of edges, neighbors, and registered isolated nodes.
///
/// This is a snapshot derived from the adjacency structure at the time it was built.
/// Graphs rebuild it on each request since they may be mutated between queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeUniverse<N>
where
    N: NodeId,
{
    nodes: HashSet<N>,
}

impl<N> NodeUniverse<N>
where
    N: NodeId,
{
    /// Collects the union of all keys and all neighbor keys of an adjacency map
    pub fn from_adjacency<W>(adjacency: &HashMap<N, HashMap<N, W>>) -> Self {
        let mut nodes = HashSet::with_capacity(adjacency.len());
        for (node, neighbors) in adjacency {
            nodes.insert(node.clone());
            nodes.extend(neighbors.keys().cloned());
        }
        NodeUniverse { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    pub fn iter(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// Nodes in ascending order, for stable reports
    pub fn sorted(&self) -> Vec<&N> {
        let mut nodes: Vec<&N> = self.nodes.iter().collect();
        nodes.sort();
        nodes
    }
}

impl<N> IntoIterator for NodeUniverse<N>
where
    N: NodeId,
{
    type Item = N;
    type IntoIter = std::collections::hash_set::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
