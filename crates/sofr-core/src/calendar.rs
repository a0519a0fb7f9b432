//! Calendar utilities for daily accrual.
//!
//! Accrual runs over every calendar day of a range, weekends and holidays
//! included, so the only calendar needed here is the plain Gregorian one.
//! Business-day adjustment is the rate provider's concern (carry-forward).

use std::iter::FusedIterator;

use crate::error::{SofrError, SofrResult};
use crate::types::Date;

/// Parses a strict `YYYY-MM-DD` calendar date.
///
/// See [`Date::parse`] for the accepted form.
pub fn parse_calendar_date(s: &str) -> SofrResult<Date> {
    Date::parse(s)
}

/// Returns the date `delta_days` calendar days from `date`.
pub fn shift_date(date: Date, delta_days: i64) -> SofrResult<Date> {
    date.shift(delta_days)
}

/// Returns the inclusive sequence of days from `start` to `end`.
///
/// The sequence is lazy and restartable: clone the returned [`DayRange`]
/// to walk it again.
///
/// # Errors
///
/// Returns `SofrError::RangeOrder` if `end < start`.
///
/// # Example
///
/// ```rust
/// use sofr_core::calendar::enumerate_days_inclusive;
/// use sofr_core::types::Date;
///
/// let start = Date::parse("2024-02-28").unwrap();
/// let end = Date::parse("2024-03-01").unwrap();
/// let days: Vec<String> = enumerate_days_inclusive(start, end)
///     .unwrap()
///     .map(|d| d.to_string())
///     .collect();
/// assert_eq!(days, ["2024-02-28", "2024-02-29", "2024-03-01"]);
/// ```
pub fn enumerate_days_inclusive(start: Date, end: Date) -> SofrResult<DayRange> {
    DayRange::new(start, end)
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRange {
    // Next date to yield from the front and back; `None` once exhausted.
    front: Option<Date>,
    back: Option<Date>,
}

impl DayRange {
    /// Creates the range `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns `SofrError::RangeOrder` if `end < start`.
    pub fn new(start: Date, end: Date) -> SofrResult<Self> {
        if end < start {
            return Err(SofrError::range_order(start, end));
        }
        Ok(Self {
            front: Some(start),
            back: Some(end),
        })
    }

    fn remaining(&self) -> usize {
        match (self.front, self.back) {
            (Some(front), Some(back)) => front.days_between(&back) as usize + 1,
            _ => 0,
        }
    }

    fn exhaust(&mut self) {
        self.front = None;
        self.back = None;
    }
}

impl Iterator for DayRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.front?;
        if Some(current) == self.back {
            self.exhaust();
        } else {
            self.front = current.succ();
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl DoubleEndedIterator for DayRange {
    fn next_back(&mut self) -> Option<Date> {
        let current = self.back?;
        if Some(current) == self.front {
            self.exhaust();
        } else {
            self.back = current.pred();
        }
        Some(current)
    }
}

impl ExactSizeIterator for DayRange {}

impl FusedIterator for DayRange {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_ten_day_range() {
        let range = enumerate_days_inclusive(date(2026, 1, 1), date(2026, 1, 10)).unwrap();
        assert_eq!(range.len(), 10);
        let days: Vec<_> = range.collect();
        assert_eq!(days.first(), Some(&date(2026, 1, 1)));
        assert_eq!(days.last(), Some(&date(2026, 1, 10)));
        assert!(days.windows(2).all(|w| w[0].days_between(&w[1]) == 1));
    }

    #[test]
    fn test_single_day_range() {
        let d = date(2025, 6, 15);
        let days: Vec<_> = enumerate_days_inclusive(d, d).unwrap().collect();
        assert_eq!(days, vec![d]);
    }

    #[test]
    fn test_reversed_range_fails() {
        let err = enumerate_days_inclusive(date(2026, 1, 10), date(2026, 1, 1)).unwrap_err();
        assert!(matches!(err, SofrError::RangeOrder { .. }));
    }

    #[test]
    fn test_crosses_leap_day_and_year_end() {
        let days: Vec<_> = enumerate_days_inclusive(date(2024, 2, 27), date(2024, 3, 2))
            .unwrap()
            .collect();
        assert_eq!(days.len(), 5);
        assert!(days.contains(&date(2024, 2, 29)));

        let days: Vec<_> = enumerate_days_inclusive(date(2025, 12, 30), date(2026, 1, 2))
            .unwrap()
            .collect();
        assert_eq!(
            days,
            vec![
                date(2025, 12, 30),
                date(2025, 12, 31),
                date(2026, 1, 1),
                date(2026, 1, 2)
            ]
        );
    }

    #[test]
    fn test_restartable() {
        let range = enumerate_days_inclusive(date(2026, 3, 1), date(2026, 3, 31)).unwrap();
        let first: Vec<_> = range.clone().collect();
        let second: Vec<_> = range.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_double_ended() {
        let mut range = enumerate_days_inclusive(date(2026, 1, 1), date(2026, 1, 3)).unwrap();
        assert_eq!(range.next_back(), Some(date(2026, 1, 3)));
        assert_eq!(range.next(), Some(date(2026, 1, 1)));
        assert_eq!(range.len(), 1);
        assert_eq!(range.next_back(), Some(date(2026, 1, 2)));
        assert_eq!(range.next(), None);
        assert_eq!(range.next_back(), None);
    }

    #[test]
    fn test_shift_date_lookback() {
        assert_eq!(shift_date(date(2026, 1, 6), -5).unwrap(), date(2026, 1, 1));
        assert_eq!(shift_date(date(2024, 3, 1), -1).unwrap(), date(2024, 2, 29));
        assert_eq!(shift_date(date(2023, 3, 1), -1).unwrap(), date(2023, 2, 28));
    }

    #[test]
    fn test_parse_calendar_date() {
        assert_eq!(parse_calendar_date("2026-01-06").unwrap(), date(2026, 1, 6));
        assert!(matches!(
            parse_calendar_date("01/06/2026"),
            Err(SofrError::InvalidDateFormat { .. })
        ));
    }
}
