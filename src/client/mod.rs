//! Client Module
//!
//! HTTP access to the dashboard backend.
//!
//! # Endpoints consumed
//! - `GET /stocks/{symbol}/history?timeframe=T` - Price history
//! - `GET /stocks/{symbol}/info` - Quote snapshot
//! - `GET /stocks/ticker` - Full ticker list
//! - `GET /stocks/ticker/fast` - Abbreviated ticker list
//! - `GET /health` - Readiness check, served outside the `/api` prefix

pub mod readiness;
pub mod service;

pub use readiness::{Backoff, ReadinessGate};
pub use service::{StockDataService, TickerFeed};
