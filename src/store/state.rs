//! Observable dashboard state and its derived values.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{ChartPoint, StockDataPoint, StockInfo, StockQuote};

/// Color for a non-negative day change
pub const POSITIVE_COLOR: &str = "#10b981";
/// Color for a negative day change
pub const NEGATIVE_COLOR: &str = "#ef4444";

/// Snapshot of everything the dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreState {
    /// Always uppercase
    pub selected_symbol: String,
    pub stock_data: Option<StockInfo>,
    pub historical_data: Vec<StockDataPoint>,
    pub popular_stocks: Vec<StockQuote>,
    pub market_indices: Vec<StockQuote>,
    pub loading: bool,
    /// Last orchestration failure, shown as a banner
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            selected_symbol: super::DEFAULT_SYMBOL.to_string(),
            stock_data: None,
            historical_data: Vec::new(),
            popular_stocks: Vec::new(),
            market_indices: Vec::new(),
            loading: false,
            error: None,
            last_updated: None,
        }
    }
}

impl StoreState {
    /// True when the loaded snapshot moved up or stayed flat. False without data.
    pub fn is_positive_change(&self) -> bool {
        self.stock_data
            .as_ref()
            .map(|data| data.change >= 0.0)
            .unwrap_or(false)
    }

    pub fn change_color(&self) -> &'static str {
        if self.is_positive_change() {
            POSITIVE_COLOR
        } else {
            NEGATIVE_COLOR
        }
    }

    /// Price as `$189.25`, or `$0.00` without data.
    pub fn formatted_price(&self) -> String {
        match &self.stock_data {
            Some(data) => format!("${:.2}", data.price),
            None => "$0.00".to_string(),
        }
    }

    /// Change as `+$2.15 (+1.15%)`. Negative values keep their own sign after
    /// the dollar: `$-1.25 (-0.33%)`.
    pub fn formatted_change(&self) -> String {
        match &self.stock_data {
            Some(data) => {
                let sign = if data.change >= 0.0 { "+" } else { "" };
                format!(
                    "{sign}${:.2} ({sign}{:.2}%)",
                    data.change,
                    data.change_percent,
                    sign = sign
                )
            }
            None => "+$0.00 (0.00%)".to_string(),
        }
    }

    pub fn chart_data(&self) -> Vec<ChartPoint> {
        self.historical_data.iter().map(ChartPoint::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_change(price: f64, change: f64, change_percent: f64) -> StoreState {
        StoreState {
            stock_data: Some(StockInfo {
                symbol: "AAPL".to_string(),
                price,
                change,
                change_percent,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_without_data() {
        let state = StoreState::default();
        assert_eq!(state.selected_symbol, "AAPL");
        assert!(!state.is_positive_change());
        assert_eq!(state.change_color(), NEGATIVE_COLOR);
        assert_eq!(state.formatted_price(), "$0.00");
        assert_eq!(state.formatted_change(), "+$0.00 (0.00%)");
        assert!(state.chart_data().is_empty());
    }

    #[test]
    fn test_positive_change_formatting() {
        let state = state_with_change(189.25, 2.15, 1.15);
        assert!(state.is_positive_change());
        assert_eq!(state.change_color(), POSITIVE_COLOR);
        assert_eq!(state.formatted_price(), "$189.25");
        assert_eq!(state.formatted_change(), "+$2.15 (+1.15%)");
    }

    #[test]
    fn test_negative_change_formatting() {
        let state = state_with_change(378.85, -1.25, -0.33);
        assert!(!state.is_positive_change());
        assert_eq!(state.change_color(), NEGATIVE_COLOR);
        assert_eq!(state.formatted_change(), "$-1.25 (-0.33%)");
    }

    #[test]
    fn test_zero_change_counts_as_positive() {
        let state = state_with_change(10.0, 0.0, 0.0);
        assert!(state.is_positive_change());
        assert_eq!(state.formatted_change(), "+$0.00 (+0.00%)");
    }

    #[test]
    fn test_chart_data_projects_close() {
        let state = StoreState {
            historical_data: vec![StockDataPoint {
                date: "2024-01-01".to_string(),
                price: 100.0,
                volume: 1000,
                open: 99.0,
                high: 101.0,
                low: 98.0,
                close: 100.5,
            }],
            ..Default::default()
        };
        let chart = state.chart_data();
        assert_eq!(chart.len(), 1);
        assert_eq!(chart[0].value, 100.5);
        assert_eq!(chart[0].date, "2024-01-01");
    }
}
