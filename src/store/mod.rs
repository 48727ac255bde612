//! State Store Module
//!
//! UI-facing dashboard state plus the actions that fill it. Consumers observe
//! changes through a `tokio::sync::watch` receiver.

mod state;
mod stock_store;

pub use state::{StoreState, NEGATIVE_COLOR, POSITIVE_COLOR};
pub use stock_store::{StockStore, DEFAULT_PERIOD, DEFAULT_SYMBOL};
