//! Stock Store
//!
//! Orchestrates data-source calls and publishes the results as `StoreState`.
//! Only the snapshot, history and search actions surface failures in `error`;
//! strip fetches (popular stocks, indices) just log.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, error};

use crate::models::StockInfo;
use crate::source::MarketDataSource;
use crate::store::StoreState;

/// Symbol selected on startup
pub const DEFAULT_SYMBOL: &str = "AAPL";
/// History period used when none is given
pub const DEFAULT_PERIOD: &str = "1y";

// == Stock Store ==
/// Dashboard state container.
pub struct StockStore {
    source: Arc<dyn MarketDataSource>,
    state: watch::Sender<StoreState>,
}

impl StockStore {
    // == Constructor ==
    /// Creates a store with default state reading from `source`.
    pub fn new(source: Arc<dyn MarketDataSource>) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self { source, state }
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    // == Actions ==
    /// Selects a symbol, normalized to uppercase. Does not fetch.
    pub fn set_selected_symbol(&self, symbol: &str) {
        let symbol = symbol.to_uppercase();
        self.state.send_modify(|s| s.selected_symbol = symbol);
    }

    /// Loads the quote snapshot for `symbol`.
    pub async fn fetch_stock_data(&self, symbol: &str) {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        match self.source.stock_data(symbol).await {
            Ok(data) => self.state.send_modify(|s| {
                s.stock_data = Some(data);
                s.last_updated = Some(Utc::now());
            }),
            Err(e) => {
                error!("Error fetching stock data for {}: {}", symbol, e);
                let message = e.to_string();
                self.state.send_modify(|s| s.error = Some(message));
            }
        }

        self.state.send_modify(|s| s.loading = false);
    }

    /// Loads the price history for `symbol` over `period`.
    pub async fn fetch_historical_data(&self, symbol: &str, period: &str) {
        match self.source.historical_data(symbol, period).await {
            Ok(data) => self.state.send_modify(|s| s.historical_data = data),
            Err(e) => {
                error!("Error fetching historical data for {}: {}", symbol, e);
                let message = e.to_string();
                self.state.send_modify(|s| s.error = Some(message));
            }
        }
    }

    pub async fn fetch_popular_stocks(&self) {
        match self.source.popular_stocks().await {
            Ok(data) => self.state.send_modify(|s| s.popular_stocks = data),
            Err(e) => error!("Error fetching popular stocks: {}", e),
        }
    }

    pub async fn fetch_market_indices(&self) {
        match self.source.market_indices().await {
            Ok(data) => self.state.send_modify(|s| s.market_indices = data),
            Err(e) => error!("Error fetching market indices: {}", e),
        }
    }

    /// Searches by symbol or name. A blank query returns nothing without
    /// touching the source.
    pub async fn search_stocks(&self, query: &str) -> Vec<StockInfo> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        match self.source.search_stocks(query).await {
            Ok(results) => results,
            Err(e) => {
                error!("Error searching stocks: {}", e);
                let message = e.to_string();
                self.state.send_modify(|s| s.error = Some(message));
                Vec::new()
            }
        }
    }

    /// Reloads snapshot and history for the selected symbol concurrently.
    pub async fn refresh_data(&self) {
        let symbol = self.state.borrow().selected_symbol.clone();
        if symbol.is_empty() {
            debug!("No symbol selected, skipping refresh");
            return;
        }

        tokio::join!(
            self.fetch_stock_data(&symbol),
            self.fetch_historical_data(&symbol, DEFAULT_PERIOD)
        );
    }

    pub fn clear_error(&self) {
        self.state.send_modify(|s| s.error = None);
    }

    /// Loads every panel concurrently for the selected symbol.
    pub async fn initialize(&self) {
        self.state.send_modify(|s| s.loading = true);

        let symbol = self.state.borrow().selected_symbol.clone();
        tokio::join!(
            self.fetch_stock_data(&symbol),
            self.fetch_historical_data(&symbol, DEFAULT_PERIOD),
            self.fetch_popular_stocks(),
            self.fetch_market_indices()
        );

        self.state.send_modify(|s| s.loading = false);
    }
}
