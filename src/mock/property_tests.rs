//! Property-Based Tests for the mock generator

use proptest::prelude::*;

use crate::mock::MockDataProvider;

fn period_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("1y"), Just("6mo"), Just("1mo")]
}

fn symbol_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("AAPL".to_string()),
        Just("TSLA".to_string()),
        "[A-Z]{1,5}".prop_map(|s| s),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // Every generated bar brackets its open and close.
    #[test]
    fn prop_ohlc_ordering(seed in any::<u64>(), symbol in symbol_strategy(), period in period_strategy()) {
        let provider = MockDataProvider::with_seed(seed);
        let data = tokio_test::block_on(provider.get_historical_data(&symbol, period)).unwrap();

        for point in &data {
            prop_assert!(point.low <= point.open.min(point.close), "low above body: {:?}", point);
            prop_assert!(point.high >= point.open.max(point.close), "high below body: {:?}", point);
            prop_assert_eq!(point.price, point.close);
        }
    }

    // Volumes stay within the generator's range.
    #[test]
    fn prop_volume_range(seed in any::<u64>(), period in period_strategy()) {
        let provider = MockDataProvider::with_seed(seed);
        let data = tokio_test::block_on(provider.get_historical_data("MSFT", period)).unwrap();

        prop_assert!(data.iter().all(|p| (1_000_000..11_000_000).contains(&p.volume)));
    }
}
