//! Market Dashboard - data-access and state layer for a stock-market dashboard
//!
//! Fetches quotes, price history and market indices from a JSON backend (or a mock
//! provider), caches history for five minutes and exposes observable UI state.

pub mod cache;
pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod mock;
pub mod models;
pub mod source;
pub mod store;

pub use cache::{new_shared_cache, CacheStore, SharedCache};
pub use client::{Backoff, ReadinessGate, StockDataService};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Config, DataSource};
pub use error::{FetchError, Result};
pub use mock::MockDataProvider;
pub use models::{StockDataPoint, StockInfo, StockQuote};
pub use source::MarketDataSource;
pub use store::{StockStore, StoreState};
