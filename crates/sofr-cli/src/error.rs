//! CLI error types.

use std::path::PathBuf;

use sofr_core::SofrError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Calculation or validation error from the accrual libraries.
    #[error(transparent)]
    Sofr(#[from] SofrError),

    /// A rate file could not be read or understood.
    #[error("Rate file {}: {message}", path.display())]
    RateFile {
        /// File that failed to load.
        path: PathBuf,
        /// What was wrong with it.
        message: String,
    },

    /// Neither a rate file nor demo fixings were supplied.
    #[error("No rate source. Pass --rates <FILE> (CSV or JSON), list files under `rate_files` in the config, or use --demo.")]
    NoRateSource,

    /// Requested range exceeds the configured cap.
    #[error("Date range spans {days} days; the limit is {max}. Narrow the range or raise max_range_days in the config.")]
    RangeTooLong {
        /// Inclusive days requested.
        days: i64,
        /// Configured maximum.
        max: i64,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Creates a rate file error.
    pub fn rate_file(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::RateFile {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
