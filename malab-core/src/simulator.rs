//! Signal-to-trade simulator — turns a stream of directional signals into
//! closed trades with realized profit.
//!
//! A single forward pass over the observations, carrying only the current
//! position and the running cash balance. No lookahead, no buffering: the
//! input can be any iterator, arbitrarily long.

use crate::domain::{Observation, Position, Signal, Trade, TradeLedger};
use chrono::NaiveDate;
use thiserror::Error;

/// Starting capital used when a caller has no opinion.
pub const DEFAULT_INITIAL_CAPITAL: f64 = 100_000.0;

/// Errors from a simulation run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("initial capital must be positive and finite, got {0}")]
    NonPositiveCapital(f64),

    #[error("observation dates must not move backwards: {prev} followed by {next}")]
    NonMonotonicDates { prev: NaiveDate, next: NaiveDate },

    #[error("cannot size the position entered at price 0.0 on {entry_date}")]
    ZeroEntryPrice { entry_date: NaiveDate },
}

/// Configuration for a single simulation run.
///
/// Starting capital is explicit call-level configuration, never shared
/// process state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub initial_capital: f64,
}

impl SimConfig {
    pub fn new(initial_capital: f64) -> Self {
        Self { initial_capital }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            initial_capital: DEFAULT_INITIAL_CAPITAL,
        }
    }
}

/// Result of a complete simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimResult {
    /// Closed trades in chronological exit order.
    pub ledger: TradeLedger,
    /// Cash balance after the last closed trade.
    pub final_cash: f64,
    /// Total observations consumed.
    pub observation_count: usize,
    /// True if the series ended while a position was open. That position
    /// is dropped, not recorded; this flag is the only evidence of it.
    pub open_position_dropped: bool,
}

/// Run the single-position state machine over an ordered observation stream.
///
/// Transitions: `Flat → Long` on a buy signal, `Long → Flat` on a sell
/// signal; every other signal/state pairing is a no-op. On each exit the
/// realized profit is `(exit - entry) * (cash / entry)` with the full cash
/// balance as the sizing base, and cash is updated so later trades compound
/// sequentially.
///
/// Dates may repeat but must never move backwards; the stream is rejected
/// at the first violation.
pub fn simulate<I>(observations: I, config: &SimConfig) -> Result<SimResult, SimError>
where
    I: IntoIterator<Item = Observation>,
{
    if !config.initial_capital.is_finite() || config.initial_capital <= 0.0 {
        return Err(SimError::NonPositiveCapital(config.initial_capital));
    }

    let mut position = Position::Flat;
    let mut cash = config.initial_capital;
    let mut ledger = TradeLedger::new();
    let mut prev_date: Option<NaiveDate> = None;
    let mut observation_count = 0usize;

    for obs in observations {
        if let Some(prev) = prev_date {
            if obs.date < prev {
                return Err(SimError::NonMonotonicDates {
                    prev,
                    next: obs.date,
                });
            }
        }
        prev_date = Some(obs.date);
        observation_count += 1;

        match (position, obs.signal) {
            (Position::Flat, Signal::Buy) => {
                position = Position::Long {
                    entry_date: obs.date,
                    entry_price: obs.price,
                };
            }
            (
                Position::Long {
                    entry_date,
                    entry_price,
                },
                Signal::Sell,
            ) => {
                if entry_price == 0.0 {
                    return Err(SimError::ZeroEntryPrice { entry_date });
                }
                let profit = (obs.price - entry_price) * (cash / entry_price);
                cash += profit;
                ledger.push(Trade {
                    entry_date,
                    entry_price,
                    exit_date: obs.date,
                    exit_price: obs.price,
                    profit,
                });
                position = Position::Flat;
            }
            // Buy while long, sell while flat, or a neutral signal: the
            // state machine stays put.
            _ => {}
        }
    }

    Ok(SimResult {
        ledger,
        final_cash: cash,
        observation_count,
        open_position_dropped: position.is_long(),
    })
}
