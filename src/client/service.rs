//! Stock Data Service
//!
//! Typed access to the backend endpoints. History lookups go through the shared
//! cache; ticker lookups go through the readiness gate first.
//!
//! Every fetch is a `Result` internally. The public methods collapse failures
//! into an empty vector or `None` and log the reason, so callers never see an
//! error from this layer.

use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::cache::SharedCache;
use crate::client::ReadinessGate;
use crate::config::Config;
use crate::error::{FetchError, Result};
use crate::models::{HistoryResponse, StockDataPoint, StockInfo, TickerResponse};

/// Which ticker endpoint to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerFeed {
    /// `GET /stocks/ticker`
    Full,
    /// `GET /stocks/ticker/fast`
    Fast,
}

impl TickerFeed {
    fn path(self) -> &'static str {
        match self {
            TickerFeed::Full => "/stocks/ticker",
            TickerFeed::Fast => "/stocks/ticker/fast",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TickerFeed::Full => "ticker",
            TickerFeed::Fast => "fast ticker",
        }
    }
}

// == Stock Data Service ==
/// Backend client for quotes, history and ticker lists.
#[derive(Debug, Clone)]
pub struct StockDataService {
    client: reqwest::Client,
    api_base_url: String,
    cache: SharedCache,
    readiness: ReadinessGate,
}

impl StockDataService {
    // == Constructor ==
    /// Creates a service for the configured backend, sharing `cache` with any
    /// other service built from the same handle.
    ///
    /// # Errors
    /// `FetchError::Config` if the base URL is not http(s) or the HTTP client
    /// cannot be built.
    pub fn new(config: &Config, cache: SharedCache) -> Result<Self> {
        let api_base_url = config.api_base_url.trim().trim_end_matches('/').to_string();

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(FetchError::Config(format!(
                "Invalid api_base_url: must start with http:// or https://, got: '{}'",
                api_base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| FetchError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let readiness = ReadinessGate::new(
            client.clone(),
            &api_base_url,
            config.readiness_max_retries,
            config.readiness_backoff(),
        );

        debug!(
            "Created StockDataService: base_url='{}', health_url='{}'",
            api_base_url,
            readiness.health_url()
        );

        Ok(Self {
            client,
            api_base_url,
            cache,
            readiness,
        })
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Handle to the shared history cache.
    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    pub fn readiness(&self) -> &ReadinessGate {
        &self.readiness
    }

    // == History ==
    /// Returns the price history for `(symbol, timeframe)`.
    ///
    /// A fresh cache entry is returned as-is without a request. Otherwise the
    /// backend is queried; a non-empty result is cached. Empty data and any
    /// failure both yield an empty vector.
    pub async fn get_stock_history(&self, symbol: &str, timeframe: &str) -> Vec<StockDataPoint> {
        // Guard is released before the network call
        let cached = self.cache.write().await.get_valid(symbol, timeframe);
        if let Some(data) = cached {
            debug!("Using cached data for {} {}", symbol, timeframe);
            return data;
        }

        info!("Fetching data from backend for {} {}", symbol, timeframe);
        match self.fetch_history(symbol, timeframe).await {
            Ok(points) if points.is_empty() => {
                warn!("No chart data available for {}", symbol);
                Vec::new()
            }
            Ok(points) => {
                self.cache
                    .write()
                    .await
                    .put(symbol, timeframe, points.clone());
                info!("Fetched {} data points for {}", points.len(), symbol);
                points
            }
            Err(e) => {
                error!("Error fetching stock data for {} {}: {}", symbol, timeframe, e);
                Vec::new()
            }
        }
    }

    async fn fetch_history(&self, symbol: &str, timeframe: &str) -> Result<Vec<StockDataPoint>> {
        let url = format!("{}/stocks/{}/history", self.api_base_url, symbol);
        let body: HistoryResponse = self.get_json(&url, &[("timeframe", timeframe)]).await?;
        Ok(body.into_points())
    }

    // == Info ==
    /// Returns the quote snapshot for `symbol`, or `None` on any failure.
    pub async fn get_stock_info(&self, symbol: &str) -> Option<StockInfo> {
        debug!("Fetching stock info from backend for {}", symbol);
        match self.fetch_info(symbol).await {
            Ok(info) => {
                info!("Fetched stock info for {}: {}", symbol, info.name);
                Some(info)
            }
            Err(e) => {
                error!("Error fetching stock info for {}: {}", symbol, e);
                None
            }
        }
    }

    async fn fetch_info(&self, symbol: &str) -> Result<StockInfo> {
        let url = format!("{}/stocks/{}/info", self.api_base_url, symbol);
        self.get_json(&url, &[]).await
    }

    // == Ticker ==
    /// Returns the full ticker list after waiting for the backend.
    pub async fn get_ticker_stocks(&self) -> Vec<StockInfo> {
        self.ticker_or_empty(TickerFeed::Full).await
    }

    /// Returns the abbreviated ticker list after waiting for the backend.
    pub async fn get_ticker_stocks_fast(&self) -> Vec<StockInfo> {
        self.ticker_or_empty(TickerFeed::Fast).await
    }

    async fn ticker_or_empty(&self, feed: TickerFeed) -> Vec<StockInfo> {
        info!("Fetching {} data from backend", feed.label());
        match self.fetch_ticker(feed).await {
            Ok(stocks) if stocks.is_empty() => {
                warn!("No {} data received from backend", feed.label());
                Vec::new()
            }
            Ok(stocks) => {
                info!("Fetched {} stocks from {} feed", stocks.len(), feed.label());
                stocks
            }
            Err(e) if e.is_backend_unavailable() => {
                error!("Backend unavailable, no {} data: {}", feed.label(), e);
                Vec::new()
            }
            Err(e) => {
                error!("Error fetching {} data: {}", feed.label(), e);
                Vec::new()
            }
        }
    }

    /// Readiness failures propagate out of here; the public wrapper decides
    /// what the caller sees.
    async fn fetch_ticker(&self, feed: TickerFeed) -> Result<Vec<StockInfo>> {
        self.readiness.wait_for_backend().await?;

        let url = format!("{}{}", self.api_base_url, feed.path());
        let body: TickerResponse = self.get_json(&url, &[]).await?;
        Ok(body.into_stocks())
    }

    // == Readiness ==
    /// Runs the readiness gate with the configured budget.
    pub async fn wait_for_backend(&self) -> Result<()> {
        self.readiness.wait_for_backend().await
    }

    // == Clear Cache ==
    /// Drops every cached history.
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
        info!("Stock data cache cleared");
    }

    /// GET `url`, require a 2xx, decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        debug!("Sending request to: {}", url);
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("{} (url: {})", e, url)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Parse(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{new_shared_cache, CacheStore};

    #[test]
    fn test_rejects_non_http_base_url() {
        let config = Config::default().with_base_url("localhost:8000/api");
        let result = StockDataService::new(&config, new_shared_cache(CacheStore::new()));
        assert!(matches!(result, Err(FetchError::Config(_))));
    }

    #[test]
    fn test_health_url_derived_from_base() {
        let config = Config::default();
        let service = StockDataService::new(&config, new_shared_cache(CacheStore::new())).unwrap();
        assert_eq!(service.api_base_url(), "http://localhost:8000/api");
        assert_eq!(service.readiness().health_url(), "http://localhost:8000/health");
        assert_eq!(service.readiness().max_retries(), 10);
    }

    #[test]
    fn test_ticker_feed_paths() {
        assert_eq!(TickerFeed::Full.path(), "/stocks/ticker");
        assert_eq!(TickerFeed::Fast.path(), "/stocks/ticker/fast");
    }

    #[tokio::test]
    async fn test_history_served_from_cache_without_network() {
        // Unreachable backend: only a cache hit can produce data
        let config = Config::default().with_base_url("http://127.0.0.1:1/api");
        let cache = new_shared_cache(CacheStore::new());
        let point = StockDataPoint {
            date: "2024-01-01".to_string(),
            price: 100.0,
            volume: 1000,
            open: 99.0,
            high: 101.0,
            low: 98.0,
            close: 100.0,
        };
        cache.write().await.put("AAPL", "1M", vec![point.clone()]);

        let service = StockDataService::new(&config, cache).unwrap();
        assert_eq!(service.get_stock_history("AAPL", "1M").await, vec![point]);
    }

    #[tokio::test]
    async fn test_clear_cache_empties_shared_store() {
        let cache = new_shared_cache(CacheStore::new());
        cache.write().await.put("AAPL", "1M", vec![]);

        let service = StockDataService::new(&Config::default(), cache.clone()).unwrap();
        service.clear_cache().await;

        assert!(cache.read().await.is_empty());
    }
}
