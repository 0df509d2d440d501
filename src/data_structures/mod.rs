pub mod priority_queue;
pub mod result_cache;

pub use priority_queue::DistanceQueue;
pub use result_cache::{CacheKey, ResultCache};
