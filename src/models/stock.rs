//! Stock records
//!
//! Immutable snapshots produced by the backend or the mock provider.

use serde::{Deserialize, Deserializer, Serialize};

/// Reads a field that the backend may send as `null`, falling back to the
/// type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One OHLCV sample of a price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockDataPoint {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub price: f64,
    pub volume: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Quote snapshot of a single security.
///
/// Field names follow the backend's camelCase JSON. Fields the backend leaves
/// out or sends as `null` decode as zero (or an empty string).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub change: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub change_percent: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub volume: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub market_cap: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub pe: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub high52: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub low52: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub open: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub previous_close: f64,
}

impl StockInfo {
    /// Case-insensitive substring match on symbol or name.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.symbol.to_lowercase().contains(&query) || self.name.to_lowercase().contains(&query)
    }
}

/// Lightweight real-time quote, used for index and popular-stock strips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    /// RFC 3339 timestamp of the quote
    pub timestamp: String,
}

impl StockQuote {
    /// Builds a quote from a snapshot, stamped with the current time.
    pub fn from_info(info: &StockInfo) -> Self {
        Self {
            symbol: info.symbol.clone(),
            price: info.price,
            change: info.change,
            change_percent: info.change_percent,
            volume: info.volume,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Chart-ready projection of a history sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: String,
    /// Closing price
    pub value: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
}

impl From<&StockDataPoint> for ChartPoint {
    fn from(point: &StockDataPoint) -> Self {
        Self {
            date: point.date.clone(),
            value: point.close,
            open: point.open,
            high: point.high,
            low: point.low,
            volume: point.volume,
        }
    }
}
