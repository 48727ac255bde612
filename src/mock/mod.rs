//! Mock Data Module
//!
//! Synthetic quotes and price histories for running the dashboard without a
//! backend.

mod fixtures;
mod provider;

#[cfg(test)]
mod property_tests;

pub use fixtures::{INDEX_SYMBOLS, POPULAR_SYMBOLS};
pub use provider::MockDataProvider;
