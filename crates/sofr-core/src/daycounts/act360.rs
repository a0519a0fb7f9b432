//! Actual/360 day count convention.
//!
//! Used for money market instruments and most USD floating rate loans.

use super::DayCount;
use crate::types::Date;

/// Actual/360 day count convention.
///
/// Every calendar day accrues `1/360` of the annual rate, so a full
/// calendar year accrues `365/360` (or `366/360`) of it.
///
/// # Formula
///
/// $$\text{Daily Fraction} = \frac{1}{360}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn days_in_year(&self, _date: Date) -> u32 {
        360
    }
}
