//! Metrics engine — pure functions over a closed-trade ledger.
//!
//! Each metric either returns a fully valid number or fails with its own
//! explicit error; nothing propagates a silent NaN or Inf. The aggregate
//! [`MetricsReport`] keeps the five results independent so one undefined
//! metric (a ledger with no losing trades, say) never hides the rest.
//!
//! Two formulas are kept bit-for-bit compatible with the reports this tool
//! replaces rather than corrected: annualized return raises `1 + Σprofit`
//! (the raw dollar sum, not a ratio) to `1/N` over distinct entry years,
//! and maximum drawdown runs over the percent change of the profit column
//! instead of an equity curve. See DESIGN.md.

use crate::domain::TradeLedger;
use chrono::Datelike;
use std::collections::HashSet;
use thiserror::Error;

/// A metric that could not be computed for this ledger.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricError {
    #[error("initial capital must be positive and finite, got {0}")]
    NonPositiveCapital(f64),

    #[error("win rate is undefined for an empty ledger")]
    EmptyLedger,

    #[error("no losing trades: gross loss is zero, profit factor is undefined")]
    ZeroGrossLoss,

    #[error("no trades, so no entry years to annualize over")]
    NoTradeYears,

    #[error("cumulative growth base {base} is negative, its fractional root is undefined")]
    NegativeGrowthBase { base: f64 },

    #[error("trade {index} has zero profit, percent change from it is undefined")]
    ZeroProfitBase { index: usize },

    #[error("running peak reached zero, drawdown ratio is undefined")]
    ZeroPeak,
}

/// Total return as a percentage of initial capital: `Σprofit / capital × 100`.
///
/// Linear, not compounded. An empty ledger is a valid 0.0.
pub fn total_return(ledger: &TradeLedger, initial_capital: f64) -> Result<f64, MetricError> {
    if !initial_capital.is_finite() || initial_capital <= 0.0 {
        return Err(MetricError::NonPositiveCapital(initial_capital));
    }
    Ok(ledger.total_profit() / initial_capital * 100.0)
}

/// Annualized return: `(1 + Σprofit)^(1/N) − 1`, where `N` is the number
/// of distinct calendar years among trade entry dates.
///
/// Compatibility formula: the profit sum is used directly as the growth
/// base and N counts distinct entry years, not elapsed years.
pub fn annualized_return(ledger: &TradeLedger) -> Result<f64, MetricError> {
    let years: HashSet<i32> = ledger.iter().map(|t| t.entry_date.year()).collect();
    if years.is_empty() {
        return Err(MetricError::NoTradeYears);
    }
    let base = 1.0 + ledger.total_profit();
    if base < 0.0 {
        return Err(MetricError::NegativeGrowthBase { base });
    }
    Ok(base.powf(1.0 / years.len() as f64) - 1.0)
}

/// Maximum drawdown of the running product of `1 + pct-change(profit)`
/// against its running peak.
///
/// Compatibility formula: operates on trade-over-trade percent change of
/// the profit column, not on the equity curve. Fewer than two trades give
/// no percent changes, hence zero drawdown.
pub fn maximum_drawdown(ledger: &TradeLedger) -> Result<f64, MetricError> {
    let profits: Vec<f64> = ledger.profits().collect();
    if profits.len() < 2 {
        return Ok(0.0);
    }

    let mut cumulative = 1.0_f64;
    let mut peak = f64::NEG_INFINITY;
    let mut max_dd = 0.0_f64;

    for (i, pair) in profits.windows(2).enumerate() {
        let (prev, cur) = (pair[0], pair[1]);
        if prev == 0.0 {
            return Err(MetricError::ZeroProfitBase { index: i });
        }
        let change = (cur - prev) / prev;
        cumulative *= 1.0 + change;
        peak = peak.max(cumulative);
        if peak == 0.0 {
            return Err(MetricError::ZeroPeak);
        }
        let dd = (peak - cumulative) / peak;
        if dd > max_dd {
            max_dd = dd;
        }
    }

    Ok(max_dd)
}

/// Win rate as a percentage: `wins / trades × 100`.
pub fn win_rate(ledger: &TradeLedger) -> Result<f64, MetricError> {
    if ledger.is_empty() {
        return Err(MetricError::EmptyLedger);
    }
    let wins = ledger.iter().filter(|t| t.is_winner()).count();
    Ok(wins as f64 / ledger.len() as f64 * 100.0)
}

/// Profit factor: gross winning profit over the magnitude of gross loss.
///
/// A ledger with no losing trades fails explicitly instead of returning
/// infinity.
pub fn profit_factor(ledger: &TradeLedger) -> Result<f64, MetricError> {
    let gross_profit: f64 = ledger.profits().filter(|p| *p > 0.0).sum();
    let gross_loss: f64 = ledger.profits().filter(|p| *p < 0.0).sum::<f64>().abs();
    if gross_loss == 0.0 {
        return Err(MetricError::ZeroGrossLoss);
    }
    Ok(gross_profit / gross_loss)
}

/// The five summary statistics for one ledger, each carrying its own
/// outcome so callers can report them independently.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsReport {
    pub total_return: Result<f64, MetricError>,
    pub annualized_return: Result<f64, MetricError>,
    pub maximum_drawdown: Result<f64, MetricError>,
    pub win_rate: Result<f64, MetricError>,
    pub profit_factor: Result<f64, MetricError>,
}

impl MetricsReport {
    /// Compute all five metrics. Pure: the same ledger always produces the
    /// same report.
    pub fn compute(ledger: &TradeLedger, initial_capital: f64) -> Self {
        Self {
            total_return: total_return(ledger, initial_capital),
            annualized_return: annualized_return(ledger),
            maximum_drawdown: maximum_drawdown(ledger),
            win_rate: win_rate(ledger),
            profit_factor: profit_factor(ledger),
        }
    }
}
