use async_trait::async_trait;

use crate::error::Result;
use crate::mock::MockDataProvider;
use crate::models::{StockDataPoint, StockInfo, StockQuote};
use crate::source::MarketDataSource;

#[async_trait]
impl MarketDataSource for MockDataProvider {
    fn name(&self) -> &'static str {
        "MOCK"
    }

    async fn stock_data(&self, symbol: &str) -> Result<StockInfo> {
        self.get_stock_data(symbol).await
    }

    async fn historical_data(&self, symbol: &str, period: &str) -> Result<Vec<StockDataPoint>> {
        self.get_historical_data(symbol, period).await
    }

    async fn popular_stocks(&self) -> Result<Vec<StockQuote>> {
        self.get_popular_stocks().await
    }

    async fn market_indices(&self) -> Result<Vec<StockQuote>> {
        self.get_market_indices().await
    }

    async fn search_stocks(&self, query: &str) -> Result<Vec<StockInfo>> {
        MockDataProvider::search_stocks(self, query).await
    }
}
