//! Price loading: a dated close series from CSV.
//!
//! Expects `Date,Close` columns (extra columns are ignored), dates in
//! `YYYY-MM-DD`. Rows must not move backwards in time; duplicate dates are
//! allowed and passed through untouched — the loader never resamples.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from the price loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read prices from {path}: {source}")]
    Read { path: PathBuf, source: csv::Error },

    #[error("{path}: dates move backwards at row {row} ({prev} followed by {next})")]
    OutOfOrder {
        path: PathBuf,
        row: usize,
        prev: NaiveDate,
        next: NaiveDate,
    },

    #[error("{path}: no price rows")]
    Empty { path: PathBuf },
}

/// One daily close.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PriceBar {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Close")]
    pub close: f64,
}

/// Load the full close series from a CSV file.
pub fn load_prices(path: &Path) -> Result<Vec<PriceBar>, LoadError> {
    let reader = csv::Reader::from_path(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_prices(reader, path)
}

fn read_prices<R: std::io::Read>(
    mut reader: csv::Reader<R>,
    path: &Path,
) -> Result<Vec<PriceBar>, LoadError> {
    let mut bars: Vec<PriceBar> = Vec::new();

    for (row, record) in reader.deserialize::<PriceBar>().enumerate() {
        let bar = record.map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(prev) = bars.last() {
            if bar.date < prev.date {
                return Err(LoadError::OutOfOrder {
                    path: path.to_path_buf(),
                    row: row + 1,
                    prev: prev.date,
                    next: bar.date,
                });
            }
        }
        bars.push(bar);
    }

    if bars.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(bars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_date_close_rows() {
        let file = write_csv("Date,Close\n2024-01-02,73.25\n2024-01-03,72.70\n");
        let bars = load_prices(file.path()).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert!((bars[0].close - 73.25).abs() < 1e-10);
    }

    #[test]
    fn ignores_extra_columns() {
        let file = write_csv(
            "Date,Open,High,Low,Close,Volume\n2024-01-02,72.0,74.0,71.5,73.25,120000\n",
        );
        let bars = load_prices(file.path()).unwrap();
        assert_eq!(bars.len(), 1);
        assert!((bars[0].close - 73.25).abs() < 1e-10);
    }

    #[test]
    fn rejects_backwards_dates() {
        let file = write_csv("Date,Close\n2024-01-05,73.0\n2024-01-03,72.0\n");
        let err = load_prices(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::OutOfOrder { row: 2, .. }));
    }

    #[test]
    fn allows_duplicate_dates() {
        let file = write_csv("Date,Close\n2024-01-03,73.0\n2024-01-03,72.0\n");
        let bars = load_prices(file.path()).unwrap();
        assert_eq!(bars.len(), 2);
    }

    #[test]
    fn header_only_file_is_empty() {
        let file = write_csv("Date,Close\n");
        let err = load_prices(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }

    #[test]
    fn unparseable_row_is_a_read_error() {
        let file = write_csv("Date,Close\n2024-01-02,not-a-number\n");
        let err = load_prices(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_prices(Path::new("/nonexistent/prices.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }
}
