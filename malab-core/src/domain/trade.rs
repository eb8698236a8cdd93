//! Trade — a closed round-trip position with realized profit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One closed round-trip trade: entry → exit.
///
/// Created atomically at the moment a long position closes; immutable
/// afterwards. `profit` is realized with the full cash balance at entry
/// re-invested at the entry price:
/// `(exit_price - entry_price) * (cash_at_entry / entry_price)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub entry_date: NaiveDate,
    pub entry_price: f64,
    pub exit_date: NaiveDate,
    pub exit_price: f64,
    pub profit: f64,
}

impl Trade {
    pub fn is_winner(&self) -> bool {
        self.profit > 0.0
    }
}
