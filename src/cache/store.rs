//! Cache Store Module
//!
//! Flat `HashMap` of price histories with lazy TTL checks and hit/miss tracking.

use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::{CacheEntry, CacheStats};
use crate::clock::{Clock, SystemClock};
use crate::models::StockDataPoint;

/// Builds the composite key for a `(symbol, timeframe)` pair.
pub fn cache_key(symbol: &str, timeframe: &str) -> String {
    format!("{}-{}", symbol, timeframe)
}

// == Cache Store ==
/// History cache. Entries are only ever replaced or cleared, never evicted.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Source of entry timestamps
    clock: Arc<dyn Clock>,
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store driven by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store driven by the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            clock,
        }
    }

    // == Get ==
    /// Returns the entry stored under the exact key, fresh or not.
    pub fn get(&self, symbol: &str, timeframe: &str) -> Option<&CacheEntry> {
        self.entries.get(&cache_key(symbol, timeframe))
    }

    // == Put ==
    /// Stores `data` under the key, replacing any previous entry and resetting
    /// its timestamp.
    pub fn put(&mut self, symbol: &str, timeframe: &str, data: Vec<StockDataPoint>) {
        let entry = CacheEntry::new(data, self.clock.now_ms());
        self.entries.insert(cache_key(symbol, timeframe), entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Is Valid ==
    /// Checks an entry against the TTL at the current clock time.
    pub fn is_valid(&self, entry: &CacheEntry) -> bool {
        entry.is_fresh(self.clock.now_ms())
    }

    // == Get Valid ==
    /// Returns a copy of the cached history if present and fresh.
    ///
    /// Stale entries are left in place; they are overwritten by the next
    /// successful fetch or dropped by `clear`.
    pub fn get_valid(&mut self, symbol: &str, timeframe: &str) -> Option<Vec<StockDataPoint>> {
        let now = self.clock.now_ms();
        match self.entries.get(&cache_key(symbol, timeframe)) {
            Some(entry) if entry.is_fresh(now) => {
                self.stats.record_hit();
                Some(entry.data.clone())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Clear ==
    /// Removes every entry. Statistics counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
