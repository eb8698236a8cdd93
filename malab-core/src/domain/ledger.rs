//! TradeLedger — ordered, append-only collection of closed trades.

use super::trade::Trade;
use serde::{Deserialize, Serialize};

/// Closed trades in chronological exit order.
///
/// The ledger is append-only: trades are pushed as they close and never
/// reordered or mutated afterwards. The metrics engine takes it as
/// read-only input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeLedger {
    trades: Vec<Trade>,
}

impl TradeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a closed trade. Insertion order is chronological exit order.
    pub fn push(&mut self, trade: Trade) {
        self.trades.push(trade);
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trade> {
        self.trades.iter()
    }

    pub fn as_slice(&self) -> &[Trade] {
        &self.trades
    }

    /// The profit column, in ledger order.
    pub fn profits(&self) -> impl Iterator<Item = f64> + '_ {
        self.trades.iter().map(|t| t.profit)
    }

    pub fn total_profit(&self) -> f64 {
        self.profits().sum()
    }
}

impl FromIterator<Trade> for TradeLedger {
    fn from_iter<I: IntoIterator<Item = Trade>>(iter: I) -> Self {
        Self {
            trades: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TradeLedger {
    type Item = &'a Trade;
    type IntoIter = std::slice::Iter<'a, Trade>;

    fn into_iter(self) -> Self::IntoIter {
        self.trades.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trade(day: u32, profit: f64) -> Trade {
        Trade {
            entry_date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            entry_price: 100.0,
            exit_date: NaiveDate::from_ymd_opt(2024, 1, day + 1).unwrap(),
            exit_price: 110.0,
            profit,
        }
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut ledger = TradeLedger::new();
        ledger.push(trade(2, 50.0));
        ledger.push(trade(4, -20.0));
        ledger.push(trade(8, 30.0));

        let profits: Vec<f64> = ledger.profits().collect();
        assert_eq!(profits, vec![50.0, -20.0, 30.0]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn total_profit_sums_the_column() {
        let ledger: TradeLedger = [trade(2, 50.0), trade(4, -20.0)].into_iter().collect();
        assert!((ledger.total_profit() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn empty_ledger() {
        let ledger = TradeLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_profit(), 0.0);
    }

    #[test]
    fn ledger_serializes_as_plain_trade_array() {
        let ledger: TradeLedger = [trade(2, 50.0)].into_iter().collect();
        let json = serde_json::to_string(&ledger).unwrap();
        assert!(json.starts_with('['));
        let deser: TradeLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(ledger, deser);
    }
}
