//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::client::Backoff;
use crate::error::FetchError;

/// Default backend base path.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Where the dashboard gets its data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSource {
    /// The JSON backend at `api_base_url`
    #[default]
    Backend,
    /// Synthetic data, no network
    Mock,
}

impl FromStr for DataSource {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "backend" => Ok(DataSource::Backend),
            "mock" => Ok(DataSource::Mock),
            other => Err(FetchError::Config(format!("unknown data source '{}'", other))),
        }
    }
}

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base path, without trailing slash
    pub api_base_url: String,
    /// Backend or mock data
    pub data_source: DataSource,
    /// Health checks made before giving up on the backend
    pub readiness_max_retries: u32,
    /// Delay between health checks in milliseconds
    pub readiness_delay_ms: u64,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `API_BASE_URL` - Backend base path (default: http://localhost:8000/api)
    /// - `DATA_SOURCE` - `backend` or `mock` (default: backend)
    /// - `READINESS_MAX_RETRIES` - Health check attempts (default: 10)
    /// - `READINESS_DELAY_MS` - Delay between checks (default: 1000)
    /// - `REQUEST_TIMEOUT_SECS` - HTTP request timeout (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("API_BASE_URL")
                .ok()
                .map(|v| normalize_base_url(&v))
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            data_source: env::var("DATA_SOURCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.data_source),
            readiness_max_retries: env::var("READINESS_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.readiness_max_retries),
            readiness_delay_ms: env::var("READINESS_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.readiness_delay_ms),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }

    /// Returns a copy pointed at a different backend.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api_base_url = normalize_base_url(base_url);
        self
    }

    /// Backoff used between readiness checks.
    pub fn readiness_backoff(&self) -> Backoff {
        Backoff::Constant(Duration::from_millis(self.readiness_delay_ms))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            data_source: DataSource::Backend,
            readiness_max_retries: 10,
            readiness_delay_ms: 1000,
            request_timeout_secs: 30,
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
