/// Configuration for a [`PathFinder`](crate::PathFinder)
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Keep computed results for reuse until the graph changes
    pub cache_enabled: bool,
    /// Maximum number of cached results; zero disables caching
    pub cache_capacity: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            cache_capacity: 64,
        }
    }
}

impl FinderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the result cache
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// Set the maximum number of cached results
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Capacity actually used, zero when caching is off
    pub fn effective_capacity(&self) -> usize {
        if self.cache_enabled {
            self.cache_capacity
        } else {
            0
        }
    }
}
