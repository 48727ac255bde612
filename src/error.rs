//! Error types for the dashboard data layer
//!
//! Provides unified error handling using thiserror. Public fetch operations on
//! `StockDataService` collapse these into empty results; everything below that
//! boundary keeps the distinction so it can be logged.

use thiserror::Error;

// == Fetch Error Enum ==
/// Unified error type for data fetching.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Readiness check never succeeded
    #[error("Backend not responding after {attempts} attempts")]
    BackendUnavailable { attempts: u32 },

    /// Backend answered with a non-success status
    #[error("HTTP error! status: {0}")]
    Http(u16),

    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Symbol unknown to the data source
    #[error("Stock {0} not found")]
    NotFound(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FetchError {
    /// Returns true when the error came from the readiness gate.
    pub fn is_backend_unavailable(&self) -> bool {
        matches!(self, FetchError::BackendUnavailable { .. })
    }
}

// == Result Type Alias ==
/// Convenience Result type for the data layer.
pub type Result<T> = std::result::Result<T, FetchError>;
