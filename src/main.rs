//! Market Dashboard - loads the dashboard state once and logs what it got.
//!
//! Useful for checking a backend (or the mock provider) end to end without a UI.

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use market_dashboard::{
    new_shared_cache, CacheStore, Config, DataSource, MarketDataSource, MockDataProvider,
    StockDataService, StockStore,
};

/// Main entry point.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the shared cache and the configured data source
/// 4. Initialize the dashboard store and log a summary
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "market_dashboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: source={:?}, base_url={}, readiness={}x{}ms",
        config.data_source,
        config.api_base_url,
        config.readiness_max_retries,
        config.readiness_delay_ms
    );

    let source: Arc<dyn MarketDataSource> = match config.data_source {
        DataSource::Backend => {
            let cache = new_shared_cache(CacheStore::new());
            let service = StockDataService::new(&config, cache)
                .context("failed to build backend client")?;
            Arc::new(service)
        }
        DataSource::Mock => Arc::new(MockDataProvider::new()),
    };

    let store = StockStore::new(source);
    info!("Initializing dashboard from {} source", store.source_name());
    store.initialize().await;

    let state = store.snapshot();
    if let Some(error) = &state.error {
        warn!("Dashboard initialized with error: {}", error);
    }
    info!(
        "{} {} {} ({} history points)",
        state.selected_symbol,
        state.formatted_price(),
        state.formatted_change(),
        state.historical_data.len()
    );
    for quote in &state.market_indices {
        info!("index {} {:.2} ({:+.2}%)", quote.symbol, quote.price, quote.change_percent);
    }
    for quote in &state.popular_stocks {
        info!("popular {} {:.2} ({:+.2}%)", quote.symbol, quote.price, quote.change_percent);
    }

    Ok(())
}
