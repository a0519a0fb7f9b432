//! Daily simple SOFR accrual engine.
//!
//! For every calendar day `D` of the accrual period the engine observes the
//! base rate on `O = D - lookback`, adds the spread and accrues
//!
//! ```text
//! interest(D) = principal × (base_rate(O) + spread) × day_count_fraction(D)
//! ```
//!
//! The result carries one record per day with the running total, so the
//! accrued amount for any prefix of the period is read off directly.

use log::{debug, trace};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sofr_core::calendar::enumerate_days_inclusive;
use sofr_core::daycounts::{day_count_fraction, DayCountConvention};
use sofr_core::error::{SofrError, SofrResult};
use sofr_core::types::Date;

use crate::index::RateIndex;
use crate::rates::RateMap;
use crate::request::{AccrualRequest, RawAccrualRequest};

/// One accrual day of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAccrualRecord {
    /// Accrual date.
    pub date: Date,
    /// Date whose base rate was used (`date - lookback`).
    pub observation_date: Date,
    /// Annualized base rate observed.
    pub base_rate: Decimal,
    /// Spread as a decimal rate.
    pub spread: Decimal,
    /// `base_rate + spread`.
    pub all_in_rate: Decimal,
    /// Year fraction for this single day.
    pub day_count_fraction: Decimal,
    /// Interest accrued on this day.
    pub interest: Decimal,
    /// Interest accrued from the start date through this day.
    pub accrued_to_date: Decimal,
}

/// A complete accrual schedule with totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccrualResult {
    /// Rate index accrued against.
    pub rate_index: RateIndex,
    /// Day count convention applied.
    pub day_count: DayCountConvention,
    /// Loan principal.
    pub principal: Decimal,
    /// Spread in basis points.
    pub spread_bps: Decimal,
    /// First accrual date.
    pub start_date: Date,
    /// Last accrual date.
    pub end_date: Date,
    /// Lookback applied, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookback_days: Option<u32>,
    /// Sum of daily interest over the period.
    pub total_interest: Decimal,
    /// `principal + total_interest`.
    pub total_amount: Decimal,
    /// One record per calendar day, ascending.
    pub daily: Vec<DailyAccrualRecord>,
}

impl AccrualResult {
    /// Number of accrual days.
    #[must_use]
    pub fn days(&self) -> usize {
        self.daily.len()
    }

    /// Returns the record for an accrual date.
    #[must_use]
    pub fn record(&self, date: Date) -> Option<&DailyAccrualRecord> {
        let offset = self.start_date.days_between(&date);
        usize::try_from(offset)
            .ok()
            .and_then(|i| self.daily.get(i))
    }

    /// Interest accrued from the start date through `date`, inclusive.
    ///
    /// Returns `None` if `date` is outside the accrual period.
    #[must_use]
    pub fn accrued_to(&self, date: Date) -> Option<Decimal> {
        self.record(date).map(|r| r.accrued_to_date)
    }

    /// Mean all-in rate over the period.
    ///
    /// Returns `None` for an empty schedule or if the sum of rates leaves the
    /// `Decimal` range.
    #[must_use]
    pub fn average_all_in_rate(&self) -> Option<Decimal> {
        if self.daily.is_empty() {
            return None;
        }
        let sum = self
            .daily
            .iter()
            .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(r.all_in_rate))?;
        sum.checked_div(Decimal::from(self.daily.len()))
    }
}

/// Computes the daily accrual schedule for `request` using `rates`.
///
/// The request is validated first. Every accrual day must resolve a base
/// rate; the first day whose observation date is absent from `rates` aborts
/// the whole calculation and no partial schedule is returned.
///
/// # Errors
///
/// - `InvalidPrincipal`, `InvalidSpread`, `UnsupportedRateIndex`,
///   `UnsupportedDayCount`, `InvalidLookback`, `RangeOrder` from request
///   validation.
/// - `MissingBaseRate(date)` naming the first observation date with no rate.
/// - `AccrualOverflow` if an interest amount, the running total or the
///   total amount exceeds the `Decimal` range.
///
/// # Example
///
/// ```rust
/// use sofr_accrual::{compute_accrual, AccrualRequest, RateMap};
/// use sofr_core::types::Date;
/// use rust_decimal_macros::dec;
///
/// let day = Date::parse("2026-01-02").unwrap();
/// let rates: RateMap = [(day, dec!(0.05))].into_iter().collect();
/// let request = AccrualRequest::new(dec!(1000000), dec!(250), day, day);
///
/// // 1,000,000 x (0.05 + 0.025) / 360
/// let result = compute_accrual(&request, &rates).unwrap();
/// assert_eq!(result.daily[0].all_in_rate, dec!(0.075));
/// assert_eq!(result.total_interest.round_dp(2), dec!(208.33));
/// ```
pub fn compute_accrual(request: &AccrualRequest, rates: &RateMap) -> SofrResult<AccrualResult> {
    request.validate()?;

    let spread = request.spread()?.as_decimal();
    let days = enumerate_days_inclusive(request.start_date, request.end_date)?;

    let mut daily = Vec::with_capacity(days.len());
    let mut accrued = Decimal::ZERO;

    for date in days {
        let observation_date = request.observation_date(date)?;
        let base_rate = rates.require(observation_date)?;
        let overflow = || SofrError::accrual_overflow(date, request.principal);
        let all_in_rate = base_rate.checked_add(spread).ok_or_else(overflow)?;
        let fraction = day_count_fraction(date, request.day_count);
        let interest = request
            .principal
            .checked_mul(all_in_rate)
            .and_then(|v| v.checked_mul(fraction))
            .ok_or_else(overflow)?;
        accrued = accrued.checked_add(interest).ok_or_else(overflow)?;

        trace!("{date} obs {observation_date} rate {all_in_rate} interest {interest}");

        daily.push(DailyAccrualRecord {
            date,
            observation_date,
            base_rate,
            spread,
            all_in_rate,
            day_count_fraction: fraction,
            interest,
            accrued_to_date: accrued,
        });
    }

    debug!(
        "accrued {} over {} days ({}, {}, lookback {}): {}",
        request.principal,
        daily.len(),
        request.rate_index,
        request.day_count,
        request.effective_lookback(),
        accrued
    );

    let total_amount = request
        .principal
        .checked_add(accrued)
        .ok_or_else(|| SofrError::accrual_overflow(request.end_date, request.principal))?;

    Ok(AccrualResult {
        rate_index: request.rate_index,
        day_count: request.day_count,
        principal: request.principal,
        spread_bps: request.spread_bps,
        start_date: request.start_date,
        end_date: request.end_date,
        lookback_days: request.lookback_days,
        total_interest: accrued,
        total_amount,
        daily,
    })
}

/// Validates a raw caller request and computes its accrual schedule.
pub fn compute_accrual_raw(request: &RawAccrualRequest, rates: &RateMap) -> SofrResult<AccrualResult> {
    compute_accrual(&request.validate()?, rates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn flat_rates(start: Date, end: Date, rate: Decimal) -> RateMap {
        enumerate_days_inclusive(start, end)
            .unwrap()
            .map(|d| (d, rate))
            .collect()
    }

    #[test]
    fn test_one_day_act360() {
        let day = date(2026, 1, 2);
        let rates = flat_rates(day, day, dec!(0.05));
        let request = AccrualRequest::new(dec!(1000000), dec!(250), day, day);

        let result = compute_accrual(&request, &rates).unwrap();
        let record = &result.daily[0];

        assert_eq!(record.spread, dec!(0.025));
        assert_eq!(record.all_in_rate, dec!(0.075));
        assert_eq!(record.day_count_fraction, Decimal::ONE / dec!(360));
        assert_eq!(
            record.interest,
            dec!(1000000) * dec!(0.075) * (Decimal::ONE / dec!(360))
        );
        assert_eq!(result.total_interest.round_dp(2), dec!(208.33));
    }

    #[test]
    fn test_all_in_5_25_one_day() {
        // all-in 0.0525
        let day = date(2026, 1, 2);
        let rates = flat_rates(day, day, dec!(0.0275));
        let request = AccrualRequest::new(dec!(1000000), dec!(250), day, day);

        let result = compute_accrual(&request, &rates).unwrap();
        assert_eq!(result.daily[0].all_in_rate, dec!(0.0525));
        assert_eq!(result.total_interest.round_dp(2), dec!(145.83));
    }

    #[test]
    fn test_running_total_and_summary() {
        let start = date(2026, 1, 1);
        let end = date(2026, 1, 10);
        let rates = flat_rates(start, end, dec!(0.0525));
        let request = AccrualRequest::new(dec!(500000), dec!(100), start, end)
            .with_day_count(DayCountConvention::ActAct);

        let result = compute_accrual(&request, &rates).unwrap();

        assert_eq!(result.days(), 10);
        let mut running = Decimal::ZERO;
        for record in &result.daily {
            running += record.interest;
            assert_eq!(record.accrued_to_date, running);
        }
        assert_eq!(result.total_interest, running);
        assert_eq!(result.total_amount, dec!(500000) + result.total_interest);
        assert_eq!(result.average_all_in_rate(), Some(dec!(0.0625)));
    }

    #[test]
    fn test_lookback_shifts_observation() {
        let start = date(2026, 1, 6);
        let end = date(2026, 1, 8);
        let rates = flat_rates(date(2026, 1, 1), end, dec!(0.05));
        let request =
            AccrualRequest::new(dec!(100000), dec!(0), start, end).with_lookback(5);

        let result = compute_accrual(&request, &rates).unwrap();
        let observed: Vec<_> = result.daily.iter().map(|r| r.observation_date).collect();
        assert_eq!(observed, vec![date(2026, 1, 1), date(2026, 1, 2), date(2026, 1, 3)]);
        assert_eq!(result.lookback_days, Some(5));
    }

    #[test]
    fn test_lookback_uses_shifted_rate() {
        let start = date(2026, 1, 6);
        let rates: RateMap = [(date(2026, 1, 1), dec!(0.04)), (start, dec!(0.09))]
            .into_iter()
            .collect();
        let request = AccrualRequest::new(dec!(360), dec!(0), start, start).with_lookback(5);

        let result = compute_accrual(&request, &rates).unwrap();
        assert_eq!(result.daily[0].base_rate, dec!(0.04));
    }

    #[test]
    fn test_missing_rate_aborts() {
        let start = date(2026, 1, 1);
        let end = date(2026, 1, 5);
        let mut rates = flat_rates(start, end, dec!(0.05));
        rates = rates
            .iter()
            .filter(|(d, _)| *d != date(2026, 1, 3))
            .collect();
        let request = AccrualRequest::new(dec!(1000), dec!(0), start, end);

        let err = compute_accrual(&request, &rates).unwrap_err();
        assert_eq!(err, SofrError::MissingBaseRate { date: date(2026, 1, 3) });
    }

    #[test]
    fn test_missing_lookback_rate_names_observation_date() {
        let start = date(2026, 1, 6);
        let rates = flat_rates(start, start, dec!(0.05));
        let request = AccrualRequest::new(dec!(1000), dec!(0), start, start).with_lookback(2);

        let err = compute_accrual(&request, &rates).unwrap_err();
        assert_eq!(err, SofrError::MissingBaseRate { date: date(2026, 1, 4) });
    }

    #[test]
    fn test_total_amount_overflow() {
        let day = date(2026, 1, 2);
        let rates = flat_rates(day, day, dec!(0.05));
        let request = AccrualRequest::new(Decimal::MAX, dec!(250), day, day);

        let err = compute_accrual(&request, &rates).unwrap_err();
        assert_eq!(err, SofrError::accrual_overflow(day, Decimal::MAX));
    }

    #[test]
    fn test_interest_overflow_names_day() {
        let start = date(2026, 1, 1);
        let end = date(2026, 1, 3);
        let mut rates = flat_rates(start, end, dec!(0.05));
        rates.insert(date(2026, 1, 2), Decimal::MAX);
        let request = AccrualRequest::new(dec!(1000000000), dec!(0), start, end);

        let err = compute_accrual(&request, &rates).unwrap_err();
        assert!(matches!(err, SofrError::AccrualOverflow { date: day, .. } if day == date(2026, 1, 2)));
    }

    #[test]
    fn test_running_total_overflow() {
        let start = date(2026, 1, 1);
        let end = start.shift(999).unwrap();
        // Each day's interest fits; the total over 1000 days at 100% does not.
        let principal = Decimal::MAX / dec!(2);
        let rates = flat_rates(start, end, Decimal::ONE);
        let request = AccrualRequest::new(principal, dec!(0), start, end);

        let err = compute_accrual(&request, &rates).unwrap_err();
        assert!(matches!(err, SofrError::AccrualOverflow { date: day, .. } if day < end));
    }

    #[test]
    fn test_validation_runs_first() {
        let day = date(2026, 1, 1);
        let request = AccrualRequest::new(dec!(1000), dec!(0), day, date(2025, 12, 31));
        let err = compute_accrual(&request, &RateMap::new()).unwrap_err();
        assert!(matches!(err, SofrError::RangeOrder { .. }));

        let request = AccrualRequest::new(dec!(0), dec!(0), day, day);
        let err = compute_accrual(&request, &RateMap::new()).unwrap_err();
        assert!(matches!(err, SofrError::InvalidPrincipal { .. }));
    }

    #[test]
    fn test_leap_year_actact() {
        let start = date(2024, 12, 31);
        let end = date(2025, 1, 1);
        let rates = flat_rates(start, end, dec!(0.0366));
        let request = AccrualRequest::new(dec!(1000), dec!(0), start, end)
            .with_day_count(DayCountConvention::ActAct);

        let result = compute_accrual(&request, &rates).unwrap();
        assert_eq!(result.daily[0].day_count_fraction, Decimal::ONE / dec!(366));
        assert_eq!(result.daily[1].day_count_fraction, Decimal::ONE / dec!(365));
        assert_eq!(result.daily[0].interest.round_dp(10), dec!(0.1));
    }

    #[test]
    fn test_accrued_to_prefix() {
        let start = date(2026, 1, 1);
        let end = date(2026, 1, 31);
        let rates = flat_rates(start, end, dec!(0.036));
        let request = AccrualRequest::new(dec!(10000), dec!(0), start, end);

        let result = compute_accrual(&request, &rates).unwrap();
        // 10,000 × 3.6% / 360 = 1.00 per day
        assert_eq!(result.accrued_to(date(2026, 1, 10)).unwrap().round_dp(10), dec!(10));
        assert_eq!(result.accrued_to(end), Some(result.total_interest));
        assert_eq!(result.accrued_to(date(2025, 12, 31)), None);
        assert_eq!(result.accrued_to(date(2026, 2, 1)), None);
    }

    #[test]
    fn test_raw_request_path() {
        let day = date(2026, 1, 2);
        let rates = flat_rates(day, day, dec!(0.05));
        let raw = RawAccrualRequest {
            principal: 1_000_000.0,
            spread_bps: 250.0,
            start_date: "2026-01-02".into(),
            end_date: "2026-01-02".into(),
            day_count: "ACT_360".into(),
            rate_index: "SOFR_DAILY_SIMPLE".into(),
            lookback_days: None,
        };
        let result = compute_accrual_raw(&raw, &rates).unwrap();
        assert_eq!(result.total_interest.round_dp(2), dec!(208.33));

        let bad = RawAccrualRequest {
            lookback_days: Some(2.5),
            ..raw
        };
        let err = compute_accrual_raw(&bad, &rates).unwrap_err();
        assert_eq!(err.kind(), "INVALID_LOOKBACK");
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let day = date(2026, 1, 2);
        let rates = flat_rates(day, day, dec!(0.05));
        let request = AccrualRequest::new(dec!(1000), dec!(0), day, day);
        let result = compute_accrual(&request, &rates).unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["rateIndex"], "SOFR_DAILY_SIMPLE");
        assert_eq!(json["dayCount"], "ACT_360");
        assert_eq!(json["daily"][0]["observationDate"], "2026-01-02");
        assert!(json["daily"][0].get("accruedToDate").is_some());
        assert!(json.get("lookbackDays").is_none());
    }
}
