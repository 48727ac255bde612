//! Response envelopes returned by the backend API
//!
//! Only the fields the client reads are declared; everything else in the body
//! (`symbol`, `count`, `cached`, ...) is ignored.

use serde::Deserialize;

use super::stock::{StockDataPoint, StockInfo};

/// Body of `GET /stocks/{symbol}/history`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryResponse {
    /// Price samples; absent is treated the same as empty
    #[serde(default)]
    pub data: Option<Vec<StockDataPoint>>,
}

impl HistoryResponse {
    /// Returns the samples, or an empty vector when there are none.
    pub fn into_points(self) -> Vec<StockDataPoint> {
        self.data.unwrap_or_default()
    }
}

/// Body of `GET /stocks/ticker` and `GET /stocks/ticker/fast`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TickerResponse {
    #[serde(default)]
    pub stocks: Option<Vec<StockInfo>>,
}

impl TickerResponse {
    pub fn into_stocks(self) -> Vec<StockInfo> {
        self.stocks.unwrap_or_default()
    }
}
