//! Run orchestration: config → prices → observations → simulator → metrics.

use crate::config::{ConfigError, RunConfig};
use crate::data::{load_prices, LoadError};
use crate::pipeline::{crossover_observations, PipelineError};
use chrono::NaiveDate;
use malab_core::{simulate, MetricsReport, SimConfig, SimError, TradeLedger};
use std::path::PathBuf;
use thiserror::Error;

/// Errors from a complete backtest run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Sim(#[from] SimError),
}

/// Everything one run produced, for printing and artifact export.
#[derive(Debug)]
pub struct BacktestResult {
    pub prices_path: PathBuf,
    pub short_window: usize,
    pub long_window: usize,
    pub initial_capital: f64,
    /// First and last observation dates after warmup.
    pub period: Option<(NaiveDate, NaiveDate)>,
    pub bar_count: usize,
    pub observation_count: usize,
    pub ledger: TradeLedger,
    pub final_cash: f64,
    pub open_position_dropped: bool,
    pub report: MetricsReport,
}

/// Execute one configured run: load the close series, derive crossover
/// observations, simulate, and compute the metrics report.
pub fn run_backtest(config: &RunConfig) -> Result<BacktestResult, RunError> {
    config.validate()?;

    let bars = load_prices(&config.data.prices)?;
    let observations = crossover_observations(
        &bars,
        config.strategy.short_window,
        config.strategy.long_window,
    )?;
    let period = match (observations.first(), observations.last()) {
        (Some(first), Some(last)) => Some((first.date, last.date)),
        _ => None,
    };

    let initial_capital = config.backtest.initial_capital;
    let sim = simulate(observations, &SimConfig::new(initial_capital))?;
    let report = MetricsReport::compute(&sim.ledger, initial_capital);

    Ok(BacktestResult {
        prices_path: config.data.prices.clone(),
        short_window: config.strategy.short_window,
        long_window: config.strategy.long_window,
        initial_capital,
        period,
        bar_count: bars.len(),
        observation_count: sim.observation_count,
        ledger: sim.ledger,
        final_cash: sim.final_cash,
        open_position_dropped: sim.open_position_dropped,
        report,
    })
}
