//! Date type for accrual calculations.

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use crate::error::{SofrError, SofrResult};

/// A calendar date with no time or timezone component.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Arithmetic works on
/// whole calendar days, so there are no daylight-saving artifacts.
///
/// # Example
///
/// ```rust
/// use sofr_core::types::Date;
///
/// let date = Date::parse("2024-02-28").unwrap();
/// let next = date.shift(1).unwrap();
/// assert_eq!(next.to_string(), "2024-02-29");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `SofrError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> SofrResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| {
                SofrError::invalid_date(format!(
                    "{year:04}-{month:02}-{day:02} is not a calendar date"
                ))
            })
    }

    /// Parses a date from the strict ISO form `YYYY-MM-DD`.
    ///
    /// Exactly ten ASCII characters are accepted: four year digits, a hyphen,
    /// two month digits, a hyphen and two day digits. Anything else
    /// (surrounding whitespace, single-digit months, slashes, a time part)
    /// is a format error.
    ///
    /// # Errors
    ///
    /// Returns `SofrError::InvalidDateFormat` if the lexical form is wrong,
    /// and `SofrError::InvalidDate` if it is well-formed but names a
    /// non-existent date such as `2025-02-30`.
    pub fn parse(s: &str) -> SofrResult<Self> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !well_formed {
            return Err(SofrError::invalid_date_format(s));
        }

        // All ten bytes are ASCII, so slicing on these offsets is safe.
        let year: i32 = s[0..4]
            .parse()
            .map_err(|_| SofrError::invalid_date_format(s))?;
        let month: u32 = s[5..7]
            .parse()
            .map_err(|_| SofrError::invalid_date_format(s))?;
        let day: u32 = s[8..10]
            .parse()
            .map_err(|_| SofrError::invalid_date_format(s))?;

        Self::from_ymd(year, month, day)
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the date's year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Returns the number of days in the date's year.
    #[must_use]
    pub fn days_in_year(&self) -> u32 {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Returns the date `days` calendar days away (negative moves earlier).
    ///
    /// Month, year and leap-day rollover follow the proleptic Gregorian
    /// calendar.
    ///
    /// # Errors
    ///
    /// Returns `SofrError::InvalidDate` if the result is outside the
    /// representable date range.
    pub fn shift(&self, days: i64) -> SofrResult<Self> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .ok_or_else(|| {
                SofrError::invalid_date(format!("{self} shifted by {days} days is out of range"))
            })
    }

    /// Returns the following calendar day, or `None` at the end of the
    /// representable range.
    #[must_use]
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Date)
    }

    /// Returns the preceding calendar day, or `None` at the start of the
    /// representable range.
    #[must_use]
    pub fn pred(&self) -> Option<Self> {
        self.0.pred_opt().map(Date)
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a weekend (Saturday or Sunday).
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = SofrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Gregorian leap year rule: divisible by 4, except centuries not
/// divisible by 400.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
