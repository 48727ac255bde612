//! Domain records and backend response envelopes
//!
//! `stock` holds the typed records handed to callers; `responses` holds the
//! JSON envelopes the backend wraps them in.

pub mod responses;
pub mod stock;

// Re-export commonly used types
pub use responses::{HistoryResponse, TickerResponse};
pub use stock::{ChartPoint, StockDataPoint, StockInfo, StockQuote};
