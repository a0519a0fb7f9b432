//! Day count conventions for daily accrual.
//!
//! A day count convention turns one calendar day into a fraction of a year.
//! Daily simple SOFR accrual applies that fraction to the all-in annual rate
//! on every day of the accrual period.
//!
//! # Supported Conventions
//!
//! - [`Act360`]: Actual/360 - each day is `1/360` of a year
//! - [`ActActDaily`]: Actual/Actual - each day is `1/365`, or `1/366` in a leap year
//!
//! # Usage
//!
//! ```rust
//! use sofr_core::daycounts::{day_count_fraction, DayCountConvention};
//! use sofr_core::types::Date;
//! use rust_decimal::Decimal;
//!
//! let date = Date::from_ymd(2024, 6, 3).unwrap();
//! let convention: DayCountConvention = "ACT_ACT".parse().unwrap();
//! assert_eq!(
//!     day_count_fraction(date, convention),
//!     Decimal::ONE / Decimal::from(366)
//! );
//! ```

mod act360;
mod actact;

pub use act360::Act360;
pub use actact::ActActDaily;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SofrError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the name of the convention (e.g., "ACT/360").
    fn name(&self) -> &'static str;

    /// Returns the year basis that applies to `date`.
    fn days_in_year(&self, date: Date) -> u32;

    /// Returns the fraction of a year that the single day `date` represents.
    fn daily_fraction(&self, date: Date) -> Decimal {
        Decimal::ONE / Decimal::from(self.days_in_year(date))
    }

    /// Sums the daily fractions over `[start, end)`.
    ///
    /// Returns zero when `end <= start`.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let mut total = Decimal::ZERO;
        let mut current = start;
        while current < end {
            total += self.daily_fraction(current);
            match current.succ() {
                Some(next) => current = next,
                None => break,
            }
        }
        total
    }
}

/// Enumeration of supported day count conventions.
///
/// Serialized as `ACT_360` / `ACT_ACT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/360 - money market convention, fixed 360-day year
    #[serde(rename = "ACT_360")]
    Act360,

    /// Actual/Actual - 365 or 366 days by calendar year
    #[serde(rename = "ACT_ACT")]
    ActAct,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Act360 => Box::new(Act360),
            DayCountConvention::ActAct => Box::new(ActActDaily),
        }
    }

    /// Returns the display name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::ActAct => "ACT/ACT",
        }
    }

    /// Returns the identifier used in requests and serialized output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => "ACT_360",
            DayCountConvention::ActAct => "ACT_ACT",
        }
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[DayCountConvention::ActAct, DayCountConvention::Act360]
    }

    /// Comma-separated list of convention codes, for error messages.
    #[must_use]
    pub fn supported_list() -> String {
        Self::all()
            .iter()
            .map(DayCountConvention::code)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = SofrError;

    /// Parses a day count convention, case-insensitively.
    ///
    /// Accepts request codes ("ACT_360"), market names ("ACT/360",
    /// "ACTUAL/360") and compact forms ("ACT360").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "ACT_360" | "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),
            "ACT_ACT" | "ACT/ACT" | "ACTUAL/ACTUAL" | "ACTACT" => Ok(DayCountConvention::ActAct),
            _ => Err(SofrError::UnsupportedDayCount {
                day_count: s.to_string(),
                supported: Self::supported_list(),
            }),
        }
    }
}

/// Returns the accrual weight of the single day `date` under `convention`.
#[must_use]
pub fn day_count_fraction(date: Date, convention: DayCountConvention) -> Decimal {
    match convention {
        DayCountConvention::Act360 => Act360.daily_fraction(date),
        DayCountConvention::ActAct => ActActDaily.daily_fraction(date),
    }
}
