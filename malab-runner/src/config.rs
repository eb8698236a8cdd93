//! Serializable run configuration.
//!
//! Every knob the implicit defaults of the original strategy hid — the
//! $100,000 starting capital, the 5/10 SMA windows — is explicit here and
//! passed into each call, so the simulator and metrics engine stay free of
//! module-level state.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SHORT_WINDOW: usize = 5;
pub const DEFAULT_LONG_WINDOW: usize = 10;

/// Errors reading or validating a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("moving-average windows must be at least 1")]
    ZeroWindow,

    #[error("short window {short} must be smaller than long window {long}")]
    WindowOrder { short: usize, long: usize },

    #[error("initial capital must be positive and finite, got {0}")]
    NonPositiveCapital(f64),
}

/// Complete configuration for a single backtest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub data: DataSection,
    #[serde(default)]
    pub strategy: StrategySection,
    #[serde(default)]
    pub backtest: BacktestSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSection {
    /// CSV of daily closes (`Date,Close` columns).
    pub prices: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySection {
    #[serde(default = "default_short_window")]
    pub short_window: usize,
    #[serde(default = "default_long_window")]
    pub long_window: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestSection {
    #[serde(default = "default_initial_capital")]
    pub initial_capital: f64,
}

fn default_short_window() -> usize {
    DEFAULT_SHORT_WINDOW
}

fn default_long_window() -> usize {
    DEFAULT_LONG_WINDOW
}

fn default_initial_capital() -> f64 {
    malab_core::DEFAULT_INITIAL_CAPITAL
}

impl Default for StrategySection {
    fn default() -> Self {
        Self {
            short_window: DEFAULT_SHORT_WINDOW,
            long_window: DEFAULT_LONG_WINDOW,
        }
    }
}

impl Default for BacktestSection {
    fn default() -> Self {
        Self {
            initial_capital: malab_core::DEFAULT_INITIAL_CAPITAL,
        }
    }
}

impl RunConfig {
    pub fn new(prices: PathBuf) -> Self {
        Self {
            data: DataSection { prices },
            strategy: StrategySection::default(),
            backtest: BacktestSection::default(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strategy.short_window == 0 || self.strategy.long_window == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        if self.strategy.short_window >= self.strategy.long_window {
            return Err(ConfigError::WindowOrder {
                short: self.strategy.short_window,
                long: self.strategy.long_window,
            });
        }
        let capital = self.backtest.initial_capital;
        if !capital.is_finite() || capital <= 0.0 {
            return Err(ConfigError::NonPositiveCapital(capital));
        }
        Ok(())
    }
}
