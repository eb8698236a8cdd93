//! Observation — one priced, dated signal reading from the indicator stage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Directional signal derived upstream from the SMA comparison.
///
/// Serialized as the conventional integer encoding: `-1` sell, `0`
/// neutral, `+1` buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Signal {
    Sell,
    Neutral,
    Buy,
}

/// Error for integer values outside `{-1, 0, 1}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("signal must be -1, 0, or 1, got {0}")]
pub struct SignalError(pub i8);

impl TryFrom<i8> for Signal {
    type Error = SignalError;

    fn try_from(value: i8) -> Result<Self, SignalError> {
        match value {
            -1 => Ok(Signal::Sell),
            0 => Ok(Signal::Neutral),
            1 => Ok(Signal::Buy),
            other => Err(SignalError(other)),
        }
    }
}

impl From<Signal> for i8 {
    fn from(signal: Signal) -> i8 {
        match signal {
            Signal::Sell => -1,
            Signal::Neutral => 0,
            Signal::Buy => 1,
        }
    }
}

/// A single observation consumed by the simulator.
///
/// Observations arrive ordered by date (non-strictly increasing; duplicate
/// dates and gaps pass through as-is). The simulator consumes them one at
/// a time and never retains them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub price: f64,
    pub signal: Signal,
}

impl Observation {
    pub fn new(date: NaiveDate, price: f64, signal: Signal) -> Self {
        Self {
            date,
            price,
            signal,
        }
    }
}
