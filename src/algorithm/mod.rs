pub mod traits;
pub mod dijkstra;
pub mod bellman_ford;
pub mod path;
pub mod select;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
pub use select::AlgorithmKind;
