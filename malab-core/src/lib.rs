//! MALab Core — the MA-crossover backtest engine.
//!
//! This crate contains the heart of the backtester:
//! - Domain types (observations, signals, positions, trades, the ledger)
//! - The signal-to-trade simulator: a single-pass state machine that turns
//!   directional signals into closed trades with realized profit
//! - The metrics engine: five independent summary statistics over the
//!   trade ledger
//!
//! The core has no I/O. Upstream it consumes an ordered stream of
//! `(date, price, signal)` observations produced by an external indicator
//! stage; downstream it hands a read-only ledger to the metrics engine.

pub mod domain;
pub mod metrics;
pub mod simulator;

pub use domain::{Observation, Position, Signal, Trade, TradeLedger};
pub use metrics::{MetricError, MetricsReport};
pub use simulator::{simulate, SimConfig, SimError, SimResult, DEFAULT_INITIAL_CAPITAL};
