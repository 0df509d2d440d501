pub mod traits;
pub mod adjacency;
pub mod universe;
pub mod generators;

pub use traits::{Graph, MutableGraph, NodeId, Weight};
pub use adjacency::AdjacencyGraph;
pub use universe::NodeUniverse;
