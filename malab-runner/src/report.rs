//! Report output: run summary printing and artifact export.
//!
//! A failed metric is printed (and serialized) as its error message next
//! to the four that still computed; it never aborts reporting.

use crate::runner::BacktestResult;
use anyhow::{Context, Result};
use malab_core::MetricError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Print a human-readable run summary to stdout.
pub fn print_summary(result: &BacktestResult) {
    println!();
    println!("=== Backtest Result ===");
    println!("Prices:            {}", result.prices_path.display());
    println!(
        "SMA windows:       {} / {}",
        result.short_window, result.long_window
    );
    if let Some((start, end)) = result.period {
        println!("Period:            {start} to {end}");
    }
    println!(
        "Bars:              {} ({} observations after warmup)",
        result.bar_count, result.observation_count
    );
    println!("Trades:            {}", result.ledger.len());
    println!("Initial capital:   {:.2}", result.initial_capital);
    println!("Final cash:        {:.2}", result.final_cash);
    println!();
    println!("--- Performance ---");
    print_metric("Total Return", &result.report.total_return, "%");
    print_metric("Annualized Return", &result.report.annualized_return, "");
    print_metric("Max Drawdown", &result.report.maximum_drawdown, "");
    print_metric("Win Rate", &result.report.win_rate, "%");
    print_metric("Profit Factor", &result.report.profit_factor, "");
    if result.open_position_dropped {
        println!();
        println!("WARNING: series ended with an open position; it was dropped, not recorded");
    }
    println!();
}

fn print_metric(label: &str, value: &Result<f64, MetricError>, unit: &str) {
    match value {
        Ok(v) => println!("{label:<18} {v:.4}{unit}"),
        Err(e) => println!("{label:<18} n/a ({e})"),
    }
}

/// One metric in the JSON report: either its value or its error message.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MetricOutcome {
    Value(f64),
    Failed { error: String },
}

fn outcome(value: &Result<f64, MetricError>) -> MetricOutcome {
    match value {
        Ok(v) => MetricOutcome::Value(*v),
        Err(e) => MetricOutcome::Failed {
            error: e.to_string(),
        },
    }
}

#[derive(Debug, Serialize)]
struct ReportDoc {
    prices: String,
    short_window: usize,
    long_window: usize,
    initial_capital: f64,
    final_cash: f64,
    bar_count: usize,
    observation_count: usize,
    trade_count: usize,
    open_position_dropped: bool,
    metrics: BTreeMap<&'static str, MetricOutcome>,
}

/// Write `trades.csv` and `report.json` into `output_dir` and return the
/// directory path.
pub fn save_artifacts(result: &BacktestResult, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("cannot create output dir {}", output_dir.display()))?;

    let trades_path = output_dir.join("trades.csv");
    write_trades_csv(&trades_path, result)?;

    let report_path = output_dir.join("report.json");
    write_report_json(&report_path, result)?;

    Ok(output_dir.to_path_buf())
}

fn write_trades_csv(path: &Path, result: &BacktestResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot write trades to {}", path.display()))?;
    for trade in &result.ledger {
        writer.serialize(trade)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_report_json(path: &Path, result: &BacktestResult) -> Result<()> {
    let mut metrics = BTreeMap::new();
    metrics.insert("total_return_pct", outcome(&result.report.total_return));
    metrics.insert(
        "annualized_return",
        outcome(&result.report.annualized_return),
    );
    metrics.insert("maximum_drawdown", outcome(&result.report.maximum_drawdown));
    metrics.insert("win_rate_pct", outcome(&result.report.win_rate));
    metrics.insert("profit_factor", outcome(&result.report.profit_factor));

    let doc = ReportDoc {
        prices: result.prices_path.display().to_string(),
        short_window: result.short_window,
        long_window: result.long_window,
        initial_capital: result.initial_capital,
        final_cash: result.final_cash,
        bar_count: result.bar_count,
        observation_count: result.observation_count,
        trade_count: result.ledger.len(),
        open_position_dropped: result.open_position_dropped,
        metrics,
    };

    let json = serde_json::to_string_pretty(&doc).context("cannot serialize report")?;
    std::fs::write(path, json)
        .with_context(|| format!("cannot write report to {}", path.display()))?;
    Ok(())
}
