//! Accrual request types.
//!
//! [`AccrualRequest`] is the typed request the engine consumes.
//! [`RawAccrualRequest`] is the untrusted boundary form (JSON bodies, form
//! fields) that is parsed and validated once into an `AccrualRequest`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sofr_core::daycounts::DayCountConvention;
use sofr_core::error::{SofrError, SofrResult};
use sofr_core::types::{Date, Spread};

use crate::index::{ensure_supported, RateIndex};

/// Longest accepted lookback, in calendar days.
pub const MAX_LOOKBACK_DAYS: u32 = 99;

/// Lookback used by hosts that enable lookback without naming a value.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 5;

/// A daily accrual request.
///
/// Construct with [`AccrualRequest::new`] and the `with_*` methods, then
/// call [`validate`](AccrualRequest::validate). The engine re-validates
/// every request it receives.
///
/// # Example
///
/// ```rust
/// use sofr_accrual::{AccrualRequest, RateIndex};
/// use sofr_core::daycounts::DayCountConvention;
/// use sofr_core::types::Date;
/// use rust_decimal_macros::dec;
///
/// let request = AccrualRequest::new(
///     dec!(1000000),
///     dec!(250),
///     Date::parse("2026-01-01").unwrap(),
///     Date::parse("2026-01-10").unwrap(),
/// )
/// .with_day_count(DayCountConvention::ActAct)
/// .with_lookback(5);
///
/// assert!(request.validate().is_ok());
/// assert_eq!(request.observation_window().unwrap().0, Date::parse("2025-12-27").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccrualRequest {
    /// Loan principal, strictly positive.
    pub principal: Decimal,
    /// Margin over the base rate in basis points, non-negative.
    pub spread_bps: Decimal,
    /// First accrual date (inclusive).
    pub start_date: Date,
    /// Last accrual date (inclusive).
    pub end_date: Date,
    /// Day count convention.
    pub day_count: DayCountConvention,
    /// Reference rate index.
    pub rate_index: RateIndex,
    /// Observation lookback in calendar days; `None` observes each accrual
    /// date itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookback_days: Option<u32>,
}

impl AccrualRequest {
    /// Creates a request with ACT/360, daily simple SOFR and no lookback.
    #[must_use]
    pub fn new(principal: Decimal, spread_bps: Decimal, start_date: Date, end_date: Date) -> Self {
        Self {
            principal,
            spread_bps,
            start_date,
            end_date,
            day_count: DayCountConvention::Act360,
            rate_index: RateIndex::SofrDailySimple,
            lookback_days: None,
        }
    }

    /// Sets the day count convention.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the rate index.
    #[must_use]
    pub fn with_rate_index(mut self, rate_index: RateIndex) -> Self {
        self.rate_index = rate_index;
        self
    }

    /// Sets the observation lookback in calendar days.
    #[must_use]
    pub fn with_lookback(mut self, days: u32) -> Self {
        self.lookback_days = Some(days);
        self
    }

    /// Checks every request invariant.
    ///
    /// Checks run in a fixed order (principal, spread, index and day count,
    /// lookback, date order) and the first failure is returned.
    pub fn validate(&self) -> SofrResult<()> {
        if self.principal <= Decimal::ZERO {
            return Err(SofrError::invalid_principal(self.principal));
        }
        Spread::from_bps(self.spread_bps)?;
        ensure_supported(self.rate_index, self.day_count)?;
        if let Some(days) = self.lookback_days {
            if days > MAX_LOOKBACK_DAYS {
                return Err(SofrError::invalid_lookback(days));
            }
        }
        if self.end_date < self.start_date {
            return Err(SofrError::range_order(self.start_date, self.end_date));
        }
        Ok(())
    }

    /// Returns the spread as a validated [`Spread`].
    pub fn spread(&self) -> SofrResult<Spread> {
        Spread::from_bps(self.spread_bps)
    }

    /// Lookback in days, with `None` treated as zero.
    #[must_use]
    pub fn effective_lookback(&self) -> u32 {
        self.lookback_days.unwrap_or(0)
    }

    /// Returns the observation date for an accrual date.
    pub fn observation_date(&self, accrual_date: Date) -> SofrResult<Date> {
        match self.effective_lookback() {
            0 => Ok(accrual_date),
            days => accrual_date.shift(-i64::from(days)),
        }
    }

    /// Returns the inclusive window a rate map should cover:
    /// `[start_date - lookback, end_date]`.
    ///
    /// The engine reads `[start_date - lookback, end_date - lookback]`, which
    /// lies inside this window.
    pub fn observation_window(&self) -> SofrResult<(Date, Date)> {
        Ok((self.observation_date(self.start_date)?, self.end_date))
    }

    /// Number of accrual days, both ends included.
    #[must_use]
    pub fn accrual_days(&self) -> i64 {
        self.start_date.days_between(&self.end_date) + 1
    }
}

/// An unvalidated accrual request as received from a caller.
///
/// Numeric fields arrive as floats and enums as strings, mirroring a JSON
/// request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAccrualRequest {
    /// Loan principal.
    pub principal: f64,
    /// Spread in basis points.
    pub spread_bps: f64,
    /// First accrual date, `YYYY-MM-DD`.
    pub start_date: String,
    /// Last accrual date, `YYYY-MM-DD`.
    pub end_date: String,
    /// Day count convention name, e.g. `ACT_360`.
    pub day_count: String,
    /// Rate index name, e.g. `SOFR_DAILY_SIMPLE`.
    pub rate_index: String,
    /// Lookback in days; must be a whole number in `[0, 99]` when present.
    #[serde(default)]
    pub lookback_days: Option<f64>,
}

impl RawAccrualRequest {
    /// Parses and validates the raw request into an [`AccrualRequest`].
    pub fn validate(&self) -> SofrResult<AccrualRequest> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(SofrError::invalid_principal(self.principal));
        }
        let principal = Decimal::try_from(self.principal)
            .map_err(|_| SofrError::invalid_principal(self.principal))?;
        let spread = Spread::from_bps_f64(self.spread_bps)?;

        let rate_index: RateIndex = self.rate_index.parse()?;
        let day_count: DayCountConvention = self.day_count.parse()?;

        let lookback_days = self.lookback_days.map(parse_lookback).transpose()?;

        let start_date = Date::parse(&self.start_date)?;
        let end_date = Date::parse(&self.end_date)?;

        let request = AccrualRequest {
            principal,
            spread_bps: spread.as_bps(),
            start_date,
            end_date,
            day_count,
            rate_index,
            lookback_days,
        };
        request.validate()?;
        Ok(request)
    }
}

fn parse_lookback(value: f64) -> SofrResult<u32> {
    let in_range = value.is_finite()
        && value.fract() == 0.0
        && (0.0..=f64::from(MAX_LOOKBACK_DAYS)).contains(&value);
    if !in_range {
        return Err(SofrError::invalid_lookback(value));
    }
    Ok(value as u32)
}
