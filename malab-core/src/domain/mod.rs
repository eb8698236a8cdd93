//! Domain types for the MA-crossover backtest core.

pub mod ledger;
pub mod observation;
pub mod position;
pub mod trade;

pub use ledger::TradeLedger;
pub use observation::{Observation, Signal, SignalError};
pub use position::Position;
pub use trade::Trade;
