//! Backend-backed data source.
//!
//! Maps store operations onto `StockDataService`. The service never fails
//! outward, so "no data" is the only signal available here: a missing snapshot
//! becomes `NotFound`, everything else passes through as an empty list.

use async_trait::async_trait;
use futures::future::join_all;

use crate::client::StockDataService;
use crate::error::{FetchError, Result};
use crate::mock::INDEX_SYMBOLS;
use crate::models::{StockDataPoint, StockInfo, StockQuote};
use crate::source::MarketDataSource;

const MAX_SEARCH_RESULTS: usize = 10;

#[async_trait]
impl MarketDataSource for StockDataService {
    fn name(&self) -> &'static str {
        "BACKEND"
    }

    async fn stock_data(&self, symbol: &str) -> Result<StockInfo> {
        self.get_stock_info(symbol)
            .await
            .ok_or_else(|| FetchError::NotFound(symbol.to_string()))
    }

    /// Store periods are lowercase (`1y`); backend timeframes are uppercase (`1Y`).
    async fn historical_data(&self, symbol: &str, period: &str) -> Result<Vec<StockDataPoint>> {
        Ok(self.get_stock_history(symbol, &period.to_uppercase()).await)
    }

    async fn popular_stocks(&self) -> Result<Vec<StockQuote>> {
        Ok(self
            .get_ticker_stocks_fast()
            .await
            .iter()
            .map(StockQuote::from_info)
            .collect())
    }

    /// Index snapshots fetched concurrently; indices the backend cannot serve
    /// are left out.
    async fn market_indices(&self) -> Result<Vec<StockQuote>> {
        let snapshots = join_all(INDEX_SYMBOLS.iter().map(|symbol| self.get_stock_info(symbol))).await;
        Ok(snapshots
            .iter()
            .flatten()
            .map(StockQuote::from_info)
            .collect())
    }

    async fn search_stocks(&self, query: &str) -> Result<Vec<StockInfo>> {
        Ok(self
            .get_ticker_stocks_fast()
            .await
            .into_iter()
            .filter(|stock| stock.matches_query(query))
            .take(MAX_SEARCH_RESULTS)
            .collect())
    }
}
