//! Hit and miss counters for the history cache.

use serde::Serialize;

/// Running totals kept by `CacheStore`.
///
/// A lookup counts as a hit only when the entry is still inside its TTL. Stale
/// entries count as misses but stay in `total_entries` until something removes
/// them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of lookups served from cache; `0.0` before any lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
