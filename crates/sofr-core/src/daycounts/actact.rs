//! Actual/Actual day count convention for daily accrual.

use super::DayCount;
use crate::types::Date;

/// Actual/Actual day count applied one day at a time.
///
/// Each day accrues `1/365` of the annual rate, or `1/366` when the day
/// falls in a leap year. Summing daily fractions over a period that spans
/// a year boundary gives the ISDA split automatically.
///
/// # Formula
///
/// $$\text{Daily Fraction} = \frac{1}{\text{Days in the calendar year of the date}}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActDaily;

impl DayCount for ActActDaily {
    fn name(&self) -> &'static str {
        "ACT/ACT"
    }

    fn days_in_year(&self, date: Date) -> u32 {
        date.days_in_year()
    }
}
