//! Position — the simulator's two-state machine.

use chrono::NaiveDate;

/// Position state: the simulator holds at most one long position at a
/// time, and short selling is not modeled.
///
/// The two states make the ignored transitions (a buy while already long,
/// a sell while flat) an explicit, testable branch instead of a side
/// effect of numeric comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    Flat,
    Long {
        entry_date: NaiveDate,
        entry_price: f64,
    },
}

impl Position {
    pub fn is_flat(&self) -> bool {
        matches!(self, Position::Flat)
    }

    pub fn is_long(&self) -> bool {
        matches!(self, Position::Long { .. })
    }
}
