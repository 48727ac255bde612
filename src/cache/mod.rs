//! Cache Module
//!
//! In-memory price-history cache keyed by `(symbol, timeframe)` with a flat TTL.
//! Expiry is checked lazily on read; nothing is swept in the background.

mod entry;
mod stats;
mod store;


use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::{cache_key, CacheStore};

// == Public Constants ==
/// Time an entry stays valid, in milliseconds (5 minutes)
pub const CACHE_TTL_MS: u64 = 5 * 60 * 1000;

/// Handle to the single cache instance shared by every fetcher in the process.
pub type SharedCache = Arc<RwLock<CacheStore>>;

/// Wraps a store into a shareable handle.
pub fn new_shared_cache(store: CacheStore) -> SharedCache {
    Arc::new(RwLock::new(store))
}
