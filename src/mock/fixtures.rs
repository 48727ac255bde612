//! Static lookup tables for the mock provider.

use crate::models::{StockInfo, StockQuote};

/// Symbols shown in the popular-stocks strip.
pub const POPULAR_SYMBOLS: [&str; 5] = ["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA"];

/// Market indices shown in the index strip.
pub const INDEX_SYMBOLS: [&str; 5] = ["^GSPC", "^DJI", "^IXIC", "^RUT", "^VIX"];

struct StockFixture {
    symbol: &'static str,
    name: &'static str,
    price: f64,
    change: f64,
    change_percent: f64,
    volume: u64,
    market_cap: f64,
    pe: f64,
    high52: f64,
    low52: f64,
}

struct IndexFixture {
    symbol: &'static str,
    price: f64,
    change: f64,
    change_percent: f64,
}

const STOCKS: [StockFixture; 5] = [
    StockFixture {
        symbol: "AAPL",
        name: "Apple Inc.",
        price: 189.25,
        change: 2.15,
        change_percent: 1.15,
        volume: 45_678_900,
        market_cap: 2_950_000_000_000.0,
        pe: 28.5,
        high52: 198.23,
        low52: 164.08,
    },
    StockFixture {
        symbol: "MSFT",
        name: "Microsoft Corporation",
        price: 378.85,
        change: -1.25,
        change_percent: -0.33,
        volume: 23_456_700,
        market_cap: 2_810_000_000_000.0,
        pe: 32.1,
        high52: 384.30,
        low52: 309.45,
    },
    StockFixture {
        symbol: "GOOGL",
        name: "Alphabet Inc.",
        price: 142.50,
        change: 3.20,
        change_percent: 2.30,
        volume: 34_567_800,
        market_cap: 1_780_000_000_000.0,
        pe: 25.8,
        high52: 151.55,
        low52: 115.55,
    },
    StockFixture {
        symbol: "AMZN",
        name: "Amazon.com Inc.",
        price: 155.75,
        change: -0.85,
        change_percent: -0.54,
        volume: 28_934_500,
        market_cap: 1_620_000_000_000.0,
        pe: 45.2,
        high52: 170.83,
        low52: 101.15,
    },
    StockFixture {
        symbol: "TSLA",
        name: "Tesla Inc.",
        price: 248.50,
        change: 5.75,
        change_percent: 2.37,
        volume: 67_890_100,
        market_cap: 790_000_000_000.0,
        pe: 65.3,
        high52: 299.29,
        low52: 138.80,
    },
];

const INDICES: [IndexFixture; 5] = [
    IndexFixture {
        symbol: "^GSPC",
        price: 4567.18,
        change: 12.45,
        change_percent: 0.27,
    },
    IndexFixture {
        symbol: "^DJI",
        price: 34567.89,
        change: -45.23,
        change_percent: -0.13,
    },
    IndexFixture {
        symbol: "^IXIC",
        price: 14234.56,
        change: 78.90,
        change_percent: 0.56,
    },
    IndexFixture {
        symbol: "^RUT",
        price: 1987.65,
        change: 15.32,
        change_percent: 0.78,
    },
    IndexFixture {
        symbol: "^VIX",
        price: 18.45,
        change: -1.25,
        change_percent: -6.35,
    },
];

impl StockFixture {
    fn to_info(&self) -> StockInfo {
        // The table has no session data; derive it from the day's change.
        let previous_close = ((self.price - self.change) * 100.0).round() / 100.0;
        StockInfo {
            symbol: self.symbol.to_string(),
            name: self.name.to_string(),
            price: self.price,
            change: self.change,
            change_percent: self.change_percent,
            volume: self.volume,
            market_cap: self.market_cap,
            pe: self.pe,
            high52: self.high52,
            low52: self.low52,
            open: previous_close,
            previous_close,
        }
    }
}

/// Looks up a stock by symbol, case-insensitively.
pub(crate) fn find_stock(symbol: &str) -> Option<StockInfo> {
    STOCKS
        .iter()
        .find(|s| s.symbol.eq_ignore_ascii_case(symbol))
        .map(StockFixture::to_info)
}

/// All stocks in table order.
pub(crate) fn all_stocks() -> Vec<StockInfo> {
    STOCKS.iter().map(StockFixture::to_info).collect()
}

/// All index quotes, stamped now.
pub(crate) fn all_indices() -> Vec<StockQuote> {
    let timestamp = chrono::Utc::now().to_rfc3339();
    INDICES
        .iter()
        .map(|i| StockQuote {
            symbol: i.symbol.to_string(),
            price: i.price,
            change: i.change,
            change_percent: i.change_percent,
            volume: 0,
            timestamp: timestamp.clone(),
        })
        .collect()
}
