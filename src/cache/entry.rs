//! Cache Entry Module
//!
//! A timestamped price history stored under one `(symbol, timeframe)` key.

use crate::cache::CACHE_TTL_MS;
use crate::models::StockDataPoint;

// == Cache Entry ==
/// Represents a single cache entry with its data and creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    /// The cached history, in backend order
    pub data: Vec<StockDataPoint>,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped at `now_ms`.
    pub fn new(data: Vec<StockDataPoint>, now_ms: u64) -> Self {
        Self {
            data,
            created_at: now_ms,
        }
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was written. Saturates at zero if
    /// the clock moved backwards.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.created_at)
    }

    // == Is Fresh ==
    /// Checks whether the entry is still inside the TTL window.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly is stale.
    pub fn is_fresh(&self, now_ms: u64) -> bool {
        self.age_ms(now_ms) < CACHE_TTL_MS
    }

    // == Time To Live ==
    /// Returns remaining validity in milliseconds, `0` once stale.
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> u64 {
        CACHE_TTL_MS.saturating_sub(self.age_ms(now_ms))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_point() -> StockDataPoint {
        StockDataPoint {
            date: "2024-01-01".to_string(),
            price: 100.0,
            volume: 1000,
            open: 99.0,
            high: 101.0,
            low: 98.0,
            close: 100.0,
        }
    }

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(vec![sample_point()], 1_000);

        assert_eq!(entry.data.len(), 1);
        assert_eq!(entry.created_at, 1_000);
        assert!(entry.is_fresh(1_000));
    }

    #[test]
    fn test_entry_fresh_just_before_ttl() {
        let entry = CacheEntry::new(vec![], 0);
        assert!(entry.is_fresh(CACHE_TTL_MS - 1));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(vec![], 0);

        // Age equal to the TTL is no longer valid
        assert!(!entry.is_fresh(CACHE_TTL_MS), "Entry should be stale at boundary");
    }

    #[test]
    fn test_ttl_remaining() {
        let entry = CacheEntry::new(vec![], 10_000);

        assert_eq!(entry.ttl_remaining_ms(10_000), CACHE_TTL_MS);
        assert_eq!(entry.ttl_remaining_ms(10_000 + 60_000), CACHE_TTL_MS - 60_000);
        assert_eq!(entry.ttl_remaining_ms(10_000 + CACHE_TTL_MS + 1), 0);
    }

    #[test]
    fn test_clock_moved_backwards() {
        let entry = CacheEntry::new(vec![], 10_000);

        assert_eq!(entry.age_ms(5_000), 0);
        assert!(entry.is_fresh(5_000));
    }
}
