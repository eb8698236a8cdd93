//! SMA crossover pipeline: close prices → dated, priced signals.
//!
//! The indicator stage the core deliberately does not own. Computes short-
//! and long-window simple moving averages over the close series, drops the
//! warmup rows where the long average has no full window, and emits one
//! observation per remaining bar with the signal set to the sign of
//! `sma_short - sma_long`.

use crate::data::PriceBar;
use malab_core::{Observation, Signal};
use thiserror::Error;

/// Errors from the signal pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("moving-average windows must be at least 1")]
    ZeroWindow,

    #[error("short window {short} must be smaller than long window {long}")]
    WindowOrder { short: usize, long: usize },

    #[error("need at least {needed} price rows for the long window, got {got}")]
    NotEnoughRows { needed: usize, got: usize },
}

/// Simple moving average with a full window: one value per input position
/// from `window - 1` onwards. Empty when the series is shorter than the
/// window or the window is zero.
pub fn sma(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(values.len() - window + 1);
    let mut sum: f64 = values[..window].iter().sum();
    out.push(sum / window as f64);
    for i in window..values.len() {
        sum += values[i] - values[i - window];
        out.push(sum / window as f64);
    }
    out
}

/// Turn a close series into crossover observations for the simulator.
///
/// Output starts at the first bar where both averages have a full window
/// (so `bars.len() - long_window + 1` observations) and carries each bar's
/// own date and close, in input order.
pub fn crossover_observations(
    bars: &[PriceBar],
    short_window: usize,
    long_window: usize,
) -> Result<Vec<Observation>, PipelineError> {
    if short_window == 0 || long_window == 0 {
        return Err(PipelineError::ZeroWindow);
    }
    if short_window >= long_window {
        return Err(PipelineError::WindowOrder {
            short: short_window,
            long: long_window,
        });
    }
    if bars.len() < long_window {
        return Err(PipelineError::NotEnoughRows {
            needed: long_window,
            got: bars.len(),
        });
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let sma_short = sma(&closes, short_window);
    let sma_long = sma(&closes, long_window);

    let observations = bars[long_window - 1..]
        .iter()
        .enumerate()
        .map(|(offset, bar)| {
            let i = offset + long_window - 1;
            let short_ma = sma_short[i - (short_window - 1)];
            let long_ma = sma_long[offset];
            let signal = if short_ma > long_ma {
                Signal::Buy
            } else if short_ma < long_ma {
                Signal::Sell
            } else {
                Signal::Neutral
            };
            Observation::new(bar.date, bar.close, signal)
        })
        .collect();

    Ok(observations)
}
