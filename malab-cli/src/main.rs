//! MALab CLI — run a moving-average-crossover backtest over a CSV of
//! daily closes and report the standard performance metrics.
//!
//! Either point it at a TOML config file or give the price CSV and
//! parameters directly:
//!
//! ```text
//! malab --config run.toml
//! malab --prices data/crude_oil_daily.csv --short-window 5 --long-window 10
//! ```

use anyhow::{bail, Result};
use clap::Parser;
use malab_runner::{print_summary, run_backtest, save_artifacts, RunConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "malab",
    about = "MALab — moving-average crossover backtester"
)]
struct Cli {
    /// Path to a TOML config file. Mutually exclusive with --prices.
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV of daily closes (Date,Close columns).
    #[arg(long)]
    prices: Option<PathBuf>,

    /// Short SMA window in bars.
    #[arg(long, default_value_t = malab_runner::config::DEFAULT_SHORT_WINDOW)]
    short_window: usize,

    /// Long SMA window in bars.
    #[arg(long, default_value_t = malab_runner::config::DEFAULT_LONG_WINDOW)]
    long_window: usize,

    /// Starting capital for the simulated account.
    #[arg(long, default_value_t = malab_core::DEFAULT_INITIAL_CAPITAL)]
    capital: f64,

    /// If set, write trades.csv and report.json here.
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.config.is_some() && cli.prices.is_some() {
        bail!("--config and --prices are mutually exclusive");
    }

    let config = if let Some(path) = &cli.config {
        RunConfig::from_file(path)?
    } else if let Some(prices) = cli.prices {
        let mut config = RunConfig::new(prices);
        config.strategy.short_window = cli.short_window;
        config.strategy.long_window = cli.long_window;
        config.backtest.initial_capital = cli.capital;
        config
    } else {
        bail!("one of --config or --prices is required");
    };

    let result = run_backtest(&config)?;
    print_summary(&result);

    if let Some(output_dir) = &cli.output_dir {
        let dir = save_artifacts(&result, output_dir)?;
        println!("Artifacts saved to: {}", dir.display());
    }

    Ok(())
}
