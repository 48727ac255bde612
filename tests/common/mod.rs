//! In-process stub of the dashboard backend.
//!
//! Serves the same routes as the real API on `127.0.0.1:0` and counts requests
//! per route, so tests can tell cache hits from network round trips.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use market_dashboard::{
    new_shared_cache, CacheStore, Config, ManualClock, SharedCache, StockDataService,
};
use serde_json::{json, Value};

/// Start time for manual clocks in tests
pub const T0: u64 = 1_700_000_000_000;

// == Stub Behaviour ==
/// What each route answers.
#[derive(Clone)]
pub struct StubConfig {
    pub history_status: StatusCode,
    pub history_body: Value,
    /// `None` answers 404
    pub info_body: Option<Value>,
    pub ticker_status: StatusCode,
    pub ticker_body: Value,
    pub fast_ticker_status: StatusCode,
    pub fast_ticker_body: Value,
    /// Health checks answered 503 before the first 200
    pub health_failures: usize,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            history_status: StatusCode::OK,
            history_body: json!({ "symbol": "AAPL", "timeframe": "1M", "data": [sample_point_json()] }),
            info_body: Some(sample_info_json("AAPL", "Apple Inc.")),
            ticker_status: StatusCode::OK,
            ticker_body: json!({ "stocks": [sample_info_json("AAPL", "Apple Inc.")], "count": 1, "cached": false }),
            fast_ticker_status: StatusCode::OK,
            fast_ticker_body: json!({ "stocks": [sample_info_json("MSFT", "Microsoft Corporation")], "count": 1, "fast": true }),
            health_failures: 0,
        }
    }
}

pub fn sample_point_json() -> Value {
    json!({
        "date": "2024-01-01", "price": 100, "volume": 1000,
        "open": 99, "high": 101, "low": 98, "close": 100
    })
}

pub fn sample_info_json(symbol: &str, name: &str) -> Value {
    json!({
        "symbol": symbol, "name": name, "price": 189.25, "change": 2.15,
        "changePercent": 1.15, "volume": 45678900, "marketCap": 2950000000000u64,
        "pe": 28.5, "high52": 198.23, "low52": 164.08, "open": 187.5, "previousClose": 187.1
    })
}

// == Stub State ==
#[derive(Default)]
pub struct Counters {
    pub history: AtomicUsize,
    pub info: AtomicUsize,
    pub ticker: AtomicUsize,
    pub fast_ticker: AtomicUsize,
    pub health: AtomicUsize,
}

struct StubState {
    config: StubConfig,
    counters: Arc<Counters>,
    last_timeframe: Mutex<Option<String>>,
}

pub struct StubBackend {
    /// Base path including `/api`
    pub base_url: String,
    pub counters: Arc<Counters>,
    state: Arc<StubState>,
}

impl StubBackend {
    pub fn hits(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    pub fn history_hits(&self) -> usize {
        Self::hits(&self.counters.history)
    }

    pub fn health_hits(&self) -> usize {
        Self::hits(&self.counters.health)
    }

    pub fn last_timeframe(&self) -> Option<String> {
        self.state.last_timeframe.lock().unwrap().clone()
    }

    /// Config pointed at this backend with instant readiness retries.
    pub fn config(&self) -> Config {
        Config {
            readiness_delay_ms: 0,
            request_timeout_secs: 5,
            ..Config::default().with_base_url(&self.base_url)
        }
    }
}

// == Handlers ==
async fn history(
    State(state): State<Arc<StubState>>,
    Path(_symbol): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.counters.history.fetch_add(1, Ordering::SeqCst);
    *state.last_timeframe.lock().unwrap() = query.get("timeframe").cloned();
    (state.config.history_status, Json(state.config.history_body.clone()))
}

async fn info(
    State(state): State<Arc<StubState>>,
    Path(_symbol): Path<String>,
) -> (StatusCode, Json<Value>) {
    state.counters.info.fetch_add(1, Ordering::SeqCst);
    match &state.config.info_body {
        Some(body) => (StatusCode::OK, Json(body.clone())),
        None => (StatusCode::NOT_FOUND, Json(json!({ "detail": "Stock not found" }))),
    }
}

async fn ticker(State(state): State<Arc<StubState>>) -> (StatusCode, Json<Value>) {
    state.counters.ticker.fetch_add(1, Ordering::SeqCst);
    (state.config.ticker_status, Json(state.config.ticker_body.clone()))
}

async fn fast_ticker(State(state): State<Arc<StubState>>) -> (StatusCode, Json<Value>) {
    state.counters.fast_ticker.fetch_add(1, Ordering::SeqCst);
    (state.config.fast_ticker_status, Json(state.config.fast_ticker_body.clone()))
}

async fn health(State(state): State<Arc<StubState>>) -> (StatusCode, Json<Value>) {
    let seen = state.counters.health.fetch_add(1, Ordering::SeqCst);
    if seen < state.config.health_failures {
        (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "status": "starting" })))
    } else {
        (StatusCode::OK, Json(json!({ "status": "healthy" })))
    }
}

/// Starts a stub backend on an ephemeral port.
pub async fn spawn_backend(config: StubConfig) -> StubBackend {
    let counters = Arc::new(Counters::default());
    let state = Arc::new(StubState {
        config,
        counters: counters.clone(),
        last_timeframe: Mutex::new(None),
    });

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/stocks/ticker", get(ticker))
        .route("/api/stocks/ticker/fast", get(fast_ticker))
        .route("/api/stocks/:symbol/history", get(history))
        .route("/api/stocks/:symbol/info", get(info))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubBackend {
        base_url: format!("http://{}/api", addr),
        counters,
        state,
    }
}

/// Cache driven by a manual clock starting at `T0`.
pub fn manual_cache() -> (SharedCache, ManualClock) {
    let clock = ManualClock::new(T0);
    let cache = new_shared_cache(CacheStore::with_clock(Arc::new(clock.clone())));
    (cache, clock)
}

pub fn service(config: &Config, cache: SharedCache) -> StockDataService {
    StockDataService::new(config, cache).unwrap()
}
