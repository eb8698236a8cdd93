//! MALab Runner — everything around the core: price loading, the SMA
//! crossover signal pipeline, run orchestration, and report output.
//!
//! The core consumes `(date, price, signal)` observations and knows
//! nothing about files or indicators; this crate is the collaborator that
//! produces those observations from a CSV of daily closes and renders the
//! resulting metrics report.

pub mod config;
pub mod data;
pub mod pipeline;
pub mod report;
pub mod runner;

pub use config::{ConfigError, RunConfig};
pub use data::{load_prices, LoadError, PriceBar};
pub use pipeline::{crossover_observations, PipelineError};
pub use report::{print_summary, save_artifacts};
pub use runner::{run_backtest, BacktestResult, RunError};
