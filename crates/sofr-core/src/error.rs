//! Error types for SOFR accrual calculations.
//!
//! Every failure the accrual core can produce is a variant of [`SofrError`].
//! Validation and lookup failures abort a calculation; no partial result is
//! ever returned alongside an error.

use thiserror::Error;

use crate::types::Date;

/// A specialized Result type for SOFR accrual operations.
pub type SofrResult<T> = Result<T, SofrError>;

/// The main error type for SOFR accrual operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SofrError {
    /// Input is not in the strict `YYYY-MM-DD` form.
    #[error("Invalid date format: '{input}'. Use YYYY-MM-DD.")]
    InvalidDateFormat {
        /// The rejected input.
        input: String,
    },

    /// Input is well-formed but does not name a real calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// End of a date range precedes its start.
    #[error("Invalid date range: end date {end} is before start date {start}")]
    RangeOrder {
        /// Range start.
        start: Date,
        /// Range end.
        end: Date,
    },

    /// Principal is zero, negative or not a finite number.
    #[error("Invalid principal: {value}. Must be a positive number.")]
    InvalidPrincipal {
        /// The rejected principal, as given.
        value: String,
    },

    /// Spread is negative or not a finite number.
    #[error("Invalid spread: {value} bps. Must be 0 or greater.")]
    InvalidSpread {
        /// The rejected spread in basis points, as given.
        value: String,
    },

    /// Lookback is not an integer in `[0, 99]`.
    #[error("Invalid lookback: {value} days. Must be a whole number from 0 to 99.")]
    InvalidLookback {
        /// The rejected lookback, as given.
        value: String,
    },

    /// Rate index is not one of the supported indices.
    #[error("Unsupported rate index: {index}. Supported: {supported}")]
    UnsupportedRateIndex {
        /// The rejected index name.
        index: String,
        /// Comma-separated list of supported indices.
        supported: String,
    },

    /// Day count convention is unknown or not supported for the rate index.
    #[error("Unsupported day count: {day_count}. Supported: {supported}")]
    UnsupportedDayCount {
        /// The rejected convention name.
        day_count: String,
        /// Comma-separated list of supported conventions.
        supported: String,
    },

    /// The rate map has no base rate for an observation date.
    #[error("Missing base rate for {date}. Import SOFR rates or extend the rate range.")]
    MissingBaseRate {
        /// The observation date with no rate.
        date: Date,
    },

    /// A fixing store holds no fixing on or before the given date, so a
    /// carry-forward rate map cannot be started.
    #[error("No fixing on or before {date}. Import earlier SOFR rates.")]
    NoFixingOnOrBefore {
        /// First date of the requested window.
        date: Date,
    },

    /// An interest amount or running total does not fit in a `Decimal`.
    #[error("Accrual overflow on {date}: principal {principal} is too large for the rates supplied.")]
    AccrualOverflow {
        /// Accrual date whose interest or running total overflowed.
        date: Date,
        /// The request principal.
        principal: String,
    },
}

impl SofrError {
    /// Creates an invalid date format error.
    #[must_use]
    pub fn invalid_date_format(input: impl Into<String>) -> Self {
        Self::InvalidDateFormat {
            input: input.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a range order error.
    #[must_use]
    pub fn range_order(start: Date, end: Date) -> Self {
        Self::RangeOrder { start, end }
    }

    /// Creates an invalid principal error.
    #[must_use]
    pub fn invalid_principal(value: impl ToString) -> Self {
        Self::InvalidPrincipal {
            value: value.to_string(),
        }
    }

    /// Creates an invalid spread error.
    #[must_use]
    pub fn invalid_spread(value: impl ToString) -> Self {
        Self::InvalidSpread {
            value: value.to_string(),
        }
    }

    /// Creates an invalid lookback error.
    #[must_use]
    pub fn invalid_lookback(value: impl ToString) -> Self {
        Self::InvalidLookback {
            value: value.to_string(),
        }
    }

    /// Creates a missing base rate error.
    #[must_use]
    pub fn missing_base_rate(date: Date) -> Self {
        Self::MissingBaseRate { date }
    }

    /// Creates an accrual overflow error.
    #[must_use]
    pub fn accrual_overflow(date: Date, principal: impl ToString) -> Self {
        Self::AccrualOverflow {
            date,
            principal: principal.to_string(),
        }
    }

    /// Returns a stable machine-readable code for the error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidDateFormat { .. } => "INVALID_DATE_FORMAT",
            Self::InvalidDate { .. } => "INVALID_DATE",
            Self::RangeOrder { .. } => "RANGE_ORDER",
            Self::InvalidPrincipal { .. } => "INVALID_PRINCIPAL",
            Self::InvalidSpread { .. } => "INVALID_SPREAD",
            Self::InvalidLookback { .. } => "INVALID_LOOKBACK",
            Self::UnsupportedRateIndex { .. } => "UNSUPPORTED_RATE_INDEX",
            Self::UnsupportedDayCount { .. } => "UNSUPPORTED_DAY_COUNT",
            Self::MissingBaseRate { .. } => "MISSING_BASE_RATE",
            Self::NoFixingOnOrBefore { .. } => "NO_FIXING_ON_OR_BEFORE",
            Self::AccrualOverflow { .. } => "ACCRUAL_OVERFLOW",
        }
    }
}
