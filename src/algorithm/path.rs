use std::collections::{HashMap, HashSet};

use log::warn;

use crate::graph::{Graph, NodeId, Weight};

/// Walks predecessor links back from `target` and returns the path from `source`.
///
/// Returns an empty path when the chain ends at a node with no predecessor other
/// than `source`, when `target` is unknown, or when the chain loops (which only
/// Dijkstra on negative weights can produce). `source == target` yields `[source]`.
pub fn reconstruct<N>(predecessors: &HashMap<N, Option<N>>, source: &N, target: &N) -> Vec<N>
where
    N: NodeId,
{
    if !predecessors.contains_key(target) {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut visited = HashSet::new();
    let mut current = target;

    loop {
        if !visited.insert(current) {
            warn!(
                "predecessor chain from {:?} loops at {:?}, treating as unreachable",
                target, current
            );
            return Vec::new();
        }
        path.push(current.clone());

        if current == source {
            break;
        }

        match predecessors.get(current) {
            Some(Some(pred)) => current = pred,
            // Chain rooted somewhere other than the source
            _ => return Vec::new(),
        }
    }

    path.reverse();
    path
}

/// Sums edge weights along `path`, or `None` if a hop is not an edge of `graph`.
/// An empty path has no weight; a single node weighs zero.
pub fn path_weight<N, W, G>(graph: &G, path: &[N]) -> Option<W>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    if path.is_empty() {
        return None;
    }
    path.windows(2).try_fold(W::zero(), |total, hop| {
        graph.edge_weight(&hop[0], &hop[1]).map(|w| total + w)
    })
}
