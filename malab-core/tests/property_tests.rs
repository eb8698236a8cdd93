//! Property tests for simulator and metrics invariants.
//!
//! Uses proptest to verify:
//! 1. Trade-count bound — never more than ⌊n/2⌋ trades for n observations
//! 2. Date ordering — every trade exits strictly after it enters when
//!    input dates strictly increase
//! 3. No buy signal ⇒ empty ledger, for any starting capital
//! 4. Cash identity — final cash equals initial capital plus ledger profit
//! 5. Metric idempotence — recomputing over the same ledger is identical

use chrono::NaiveDate;
use malab_core::metrics::MetricsReport;
use malab_core::{simulate, Observation, Signal, SimConfig};
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

fn arb_signal() -> impl Strategy<Value = Signal> {
    prop_oneof![
        Just(Signal::Sell),
        Just(Signal::Neutral),
        Just(Signal::Buy),
    ]
}

fn arb_price() -> impl Strategy<Value = f64> {
    (1.0..500.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

/// Observation streams with strictly increasing dates and positive prices.
fn arb_observations(max_len: usize) -> impl Strategy<Value = Vec<Observation>> {
    prop::collection::vec((arb_price(), arb_signal()), 0..max_len).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (price, signal))| {
                Observation::new(base_date() + chrono::Duration::days(i as i64), price, signal)
            })
            .collect()
    })
}

fn arb_capital() -> impl Strategy<Value = f64> {
    (1_000.0..1_000_000.0_f64).prop_map(|c| c.round())
}

proptest! {
    /// A buy and a sell observation are both needed per trade, so the
    /// ledger can never exceed half the stream length.
    #[test]
    fn trade_count_bounded_by_half_the_stream(
        observations in arb_observations(64),
        capital in arb_capital(),
    ) {
        let n = observations.len();
        let result = simulate(observations, &SimConfig::new(capital)).unwrap();
        prop_assert!(result.ledger.len() <= n / 2);
        prop_assert_eq!(result.observation_count, n);
    }

    /// With strictly increasing input dates, every trade exits strictly
    /// after it enters, and the ledger is chronological by exit.
    #[test]
    fn trades_exit_after_entry(observations in arb_observations(64)) {
        let result = simulate(observations, &SimConfig::default()).unwrap();
        for trade in &result.ledger {
            prop_assert!(trade.exit_date > trade.entry_date);
        }
        for pair in result.ledger.as_slice().windows(2) {
            prop_assert!(pair[0].exit_date < pair[1].exit_date);
        }
    }

    /// Streams that never say buy produce no trades, whatever the capital.
    #[test]
    fn no_buy_means_no_trades(
        rows in prop::collection::vec(
            (arb_price(), prop_oneof![Just(Signal::Sell), Just(Signal::Neutral)]),
            0..64,
        ),
        capital in arb_capital(),
    ) {
        let observations: Vec<Observation> = rows
            .into_iter()
            .enumerate()
            .map(|(i, (price, signal))| {
                Observation::new(base_date() + chrono::Duration::days(i as i64), price, signal)
            })
            .collect();
        let result = simulate(observations, &SimConfig::new(capital)).unwrap();
        prop_assert!(result.ledger.is_empty());
        prop_assert_eq!(result.final_cash, capital);
    }

    /// Cash only moves at exits, by exactly the trade profit.
    #[test]
    fn final_cash_is_capital_plus_ledger_profit(
        observations in arb_observations(64),
        capital in arb_capital(),
    ) {
        let result = simulate(observations, &SimConfig::new(capital)).unwrap();
        let expected = capital + result.ledger.total_profit();
        prop_assert!((result.final_cash - expected).abs() < 1e-6);
    }

    /// The metrics engine has no hidden state: recomputing over the same
    /// immutable ledger yields the identical report.
    #[test]
    fn metrics_are_idempotent(
        observations in arb_observations(64),
        capital in arb_capital(),
    ) {
        let result = simulate(observations, &SimConfig::new(capital)).unwrap();
        let first = MetricsReport::compute(&result.ledger, capital);
        let second = MetricsReport::compute(&result.ledger, capital);
        prop_assert_eq!(first, second);
    }
}
