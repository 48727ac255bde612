//! Market Data Source
//!
//! The seam between the state store and wherever data comes from. Implemented
//! by the backend client and by the mock provider.

mod backend;
mod mock;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{StockDataPoint, StockInfo, StockQuote};

/// Data operations the dashboard state store depends on.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Quote snapshot for one symbol.
    async fn stock_data(&self, symbol: &str) -> Result<StockInfo>;

    /// Price history for one symbol over a period such as `"1y"`.
    async fn historical_data(&self, symbol: &str, period: &str) -> Result<Vec<StockDataPoint>>;

    /// Quotes for the popular-stocks strip.
    async fn popular_stocks(&self) -> Result<Vec<StockQuote>>;

    /// Quotes for the market-indices strip.
    async fn market_indices(&self) -> Result<Vec<StockQuote>>;

    /// Symbol or name search.
    async fn search_stocks(&self, query: &str) -> Result<Vec<StockInfo>>;
}
