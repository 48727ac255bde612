//! Mock Data Provider
//!
//! Serves the fixture tables and random-walk histories with simulated latency.
//! Histories keep `low <= min(open, close)` and `high >= max(open, close)`.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{Days, Utc};
use futures::future::try_join_all;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{FetchError, Result};
use crate::mock::fixtures::{self, POPULAR_SYMBOLS};
use crate::models::{StockDataPoint, StockInfo, StockQuote};

// == Generator Constants ==
/// Price used for symbols missing from the table
const DEFAULT_BASE_PRICE: f64 = 100.0;
const VOLATILITY: f64 = 0.02;
/// Per-day drift
const TREND: f64 = 0.0001;
const MIN_VOLUME: u64 = 1_000_000;
const MAX_VOLUME: u64 = 11_000_000;
const MAX_SEARCH_RESULTS: usize = 10;

// == Simulated Latency (ms) ==
const QUOTE_LATENCY_MS: u64 = 500;
const STOCK_DATA_LATENCY_MS: u64 = 800;
const HISTORY_LATENCY_MS: u64 = 1000;
const SEARCH_LATENCY_MS: u64 = 300;
const INDICES_LATENCY_MS: u64 = 600;

/// Number of days covered by a history period.
pub fn period_days(period: &str) -> u64 {
    match period {
        "1y" => 365,
        "6mo" => 180,
        _ => 30,
    }
}

// == Mock Data Provider ==
/// Synthetic market data source.
#[derive(Debug)]
pub struct MockDataProvider {
    rng: Mutex<StdRng>,
    latency: bool,
}

impl Default for MockDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDataProvider {
    /// Provider with simulated network latency and an entropy-seeded RNG.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            latency: true,
        }
    }

    /// Provider that answers immediately.
    pub fn instant() -> Self {
        Self {
            latency: false,
            ..Self::new()
        }
    }

    /// Latency-free provider with a reproducible RNG.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            latency: false,
        }
    }

    async fn simulate_latency(&self, ms: u64) {
        if self.latency {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }

    // == Quotes ==
    /// Real-time quote for one table symbol.
    pub async fn get_quote(&self, symbol: &str) -> Result<StockQuote> {
        self.simulate_latency(QUOTE_LATENCY_MS).await;

        let info =
            fixtures::find_stock(symbol).ok_or_else(|| FetchError::NotFound(symbol.to_string()))?;
        Ok(StockQuote::from_info(&info))
    }

    /// Quotes for several symbols, fetched concurrently. Fails if any symbol is
    /// unknown.
    pub async fn get_multiple_quotes(&self, symbols: &[&str]) -> Result<Vec<StockQuote>> {
        try_join_all(symbols.iter().map(|symbol| self.get_quote(symbol))).await
    }

    pub async fn get_popular_stocks(&self) -> Result<Vec<StockQuote>> {
        self.get_multiple_quotes(&POPULAR_SYMBOLS).await
    }

    pub async fn get_market_indices(&self) -> Result<Vec<StockQuote>> {
        self.simulate_latency(INDICES_LATENCY_MS).await;
        Ok(fixtures::all_indices())
    }

    // == Stock Data ==
    /// Full snapshot for one table symbol.
    pub async fn get_stock_data(&self, symbol: &str) -> Result<StockInfo> {
        self.simulate_latency(STOCK_DATA_LATENCY_MS).await;
        fixtures::find_stock(symbol).ok_or_else(|| FetchError::NotFound(symbol.to_string()))
    }

    /// Case-insensitive search on symbol or name, at most ten results.
    pub async fn search_stocks(&self, query: &str) -> Result<Vec<StockInfo>> {
        self.simulate_latency(SEARCH_LATENCY_MS).await;
        Ok(fixtures::all_stocks()
            .into_iter()
            .filter(|stock| stock.matches_query(query))
            .take(MAX_SEARCH_RESULTS)
            .collect())
    }

    // == History ==
    /// Daily history ending today, oldest first, `period_days(period) + 1`
    /// points long. Unknown symbols walk around a base price of 100.
    pub async fn get_historical_data(
        &self,
        symbol: &str,
        period: &str,
    ) -> Result<Vec<StockDataPoint>> {
        self.simulate_latency(HISTORY_LATENCY_MS).await;

        let base_price = fixtures::find_stock(symbol)
            .map(|s| s.price)
            .unwrap_or(DEFAULT_BASE_PRICE);
        let data = self.generate_history(base_price, period_days(period));

        debug!("Generated {} mock points for {} ({})", data.len(), symbol, period);
        Ok(data)
    }

    fn generate_history(&self, base_price: f64, days: u64) -> Vec<StockDataPoint> {
        let today = Utc::now().date_naive();
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        (0..=days)
            .rev()
            .map(|i| {
                let date = today - Days::new(i);
                let random_change = (rng.gen::<f64>() - 0.5) * VOLATILITY;
                let price = base_price * (1.0 + TREND * (days - i) as f64 + random_change);

                let open = price * (1.0 + (rng.gen::<f64>() - 0.5) * 0.01);
                let high = (price * (1.0 + rng.gen::<f64>() * 0.02)).max(open).max(price);
                let low = (price * (1.0 - rng.gen::<f64>() * 0.02)).min(open).min(price);

                StockDataPoint {
                    date: date.format("%Y-%m-%d").to_string(),
                    price,
                    volume: rng.gen_range(MIN_VOLUME..MAX_VOLUME),
                    open,
                    high,
                    low,
                    close: price,
                }
            })
            .collect()
    }
}
