//! Index fixing store for historical rate lookups.
//!
//! Holds published fixings per rate index and builds the [`RateMap`] an
//! accrual calculation needs. The store is the caller's side of the rate
//! contract: the engine never talks to it directly.

use std::collections::BTreeMap;

use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sofr_core::calendar::enumerate_days_inclusive;
use sofr_core::error::{SofrError, SofrResult};
use sofr_core::types::Date;

use crate::index::RateIndex;
use crate::rates::RateMap;

/// A single rate fixing observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexFixing {
    /// The fixing date
    pub date: Date,
    /// The rate index
    pub index: RateIndex,
    /// The fixing rate (as decimal, e.g., 0.0530 for 5.30%)
    pub rate: Decimal,
}

impl IndexFixing {
    /// Creates a new index fixing.
    #[must_use]
    pub fn new(date: Date, index: RateIndex, rate: Decimal) -> Self {
        Self { date, index, rate }
    }

    /// Creates a fixing from a rate quoted in percent (e.g., 5.30 for 5.30%).
    #[must_use]
    pub fn from_percent(date: Date, index: RateIndex, percent: Decimal) -> Self {
        Self::new(date, index, percent / Decimal::ONE_HUNDRED)
    }

    /// Returns the rate as a percentage (e.g., 5.30 for 5.30%).
    #[must_use]
    pub fn rate_percent(&self) -> Decimal {
        self.rate * Decimal::ONE_HUNDRED
    }
}

/// How days without a stored fixing are treated when building a rate map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillPolicy {
    /// Only dates with a stored fixing are included. Gaps are left for the
    /// engine to report as missing.
    Exact,
    /// Each day takes the most recent fixing on or before it, so weekends
    /// and holidays reuse the last published rate.
    #[default]
    CarryForward,
}

/// One calendar day of stored fixings, with `None` where nothing is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRate {
    /// Calendar date
    pub date: Date,
    /// Stored fixing for the date, if any
    pub rate: Option<Decimal>,
}

/// Storage for historical rate fixings.
///
/// Internally uses a BTreeMap per index for ordered date access, enabling
/// efficient range queries and carry-forward lookups.
///
/// # Example
///
/// ```rust
/// use sofr_accrual::{FillPolicy, FixingStore, RateIndex};
/// use sofr_core::types::Date;
/// use rust_decimal_macros::dec;
///
/// let friday = Date::parse("2026-01-02").unwrap();
/// let sunday = Date::parse("2026-01-04").unwrap();
///
/// let mut store = FixingStore::new();
/// store.add_fixing(friday, RateIndex::SofrDailySimple, dec!(0.0525));
///
/// let rates = store
///     .rate_map(RateIndex::SofrDailySimple, friday, sunday, FillPolicy::CarryForward)
///     .unwrap();
/// assert_eq!(rates.get(sunday), Some(dec!(0.0525)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixingStore {
    /// Fixings organized by index -> date -> rate
    fixings: BTreeMap<RateIndex, BTreeMap<Date, Decimal>>,
}

impl FixingStore {
    /// Creates a new empty fixing store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single fixing to the store, replacing any fixing already
    /// stored for the same index and date.
    pub fn add_fixing(&mut self, date: Date, index: RateIndex, rate: Decimal) {
        self.fixings.entry(index).or_default().insert(date, rate);
    }

    /// Adds a fixing using an IndexFixing struct.
    pub fn add(&mut self, fixing: IndexFixing) {
        self.add_fixing(fixing.date, fixing.index, fixing.rate);
    }

    /// Adds multiple fixings at once.
    pub fn add_fixings(&mut self, fixings: impl IntoIterator<Item = IndexFixing>) {
        for fixing in fixings {
            self.add(fixing);
        }
    }

    /// Retrieves a fixing for a specific index and date.
    #[must_use]
    pub fn get_fixing(&self, index: RateIndex, date: Date) -> Option<Decimal> {
        self.fixings
            .get(&index)
            .and_then(|dates| dates.get(&date).copied())
    }

    /// Retrieves all fixings for an index between start and end dates (inclusive).
    ///
    /// Returns fixings in chronological order.
    #[must_use]
    pub fn get_range(&self, index: RateIndex, start: Date, end: Date) -> Vec<(Date, Decimal)> {
        if end < start {
            return Vec::new();
        }
        self.fixings
            .get(&index)
            .map(|dates| dates.range(start..=end).map(|(d, r)| (*d, *r)).collect())
            .unwrap_or_default()
    }

    /// Returns the most recent fixing on or before the given date.
    #[must_use]
    pub fn last_fixing_on_or_before(&self, index: RateIndex, date: Date) -> Option<(Date, Decimal)> {
        self.fixings
            .get(&index)
            .and_then(|dates| dates.range(..=date).next_back().map(|(d, r)| (*d, *r)))
    }

    /// Returns the date of the latest stored fixing for an index.
    #[must_use]
    pub fn latest_fixing_date(&self, index: RateIndex) -> Option<Date> {
        self.fixings
            .get(&index)
            .and_then(|dates| dates.keys().next_back().copied())
    }

    /// Returns the count of fixings for an index.
    #[must_use]
    pub fn count(&self, index: RateIndex) -> usize {
        self.fixings.get(&index).map_or(0, BTreeMap::len)
    }

    /// Returns one entry per calendar day in `[start, end]`, with `None`
    /// on days that have no stored fixing.
    ///
    /// # Errors
    ///
    /// Returns `SofrError::RangeOrder` if `end < start`.
    pub fn daily_rates(&self, index: RateIndex, start: Date, end: Date) -> SofrResult<Vec<DailyRate>> {
        let days = enumerate_days_inclusive(start, end)?;
        Ok(days
            .map(|date| DailyRate {
                date,
                rate: self.get_fixing(index, date),
            })
            .collect())
    }

    /// Builds the rate map for `[start, end]` under `fill`.
    ///
    /// # Errors
    ///
    /// - `SofrError::RangeOrder` if `end < start`.
    /// - `SofrError::NoFixingOnOrBefore` under [`FillPolicy::CarryForward`]
    ///   when no fixing exists on or before `start`. The window is never
    ///   back-filled from a later fixing.
    pub fn rate_map(
        &self,
        index: RateIndex,
        start: Date,
        end: Date,
        fill: FillPolicy,
    ) -> SofrResult<RateMap> {
        let days = enumerate_days_inclusive(start, end)?;

        let rates: RateMap = match fill {
            FillPolicy::Exact => self.get_range(index, start, end).into_iter().collect(),
            FillPolicy::CarryForward => {
                let (_, mut carried) = self
                    .last_fixing_on_or_before(index, start)
                    .ok_or(SofrError::NoFixingOnOrBefore { date: start })?;
                let mut filled = 0usize;
                let mut map = RateMap::new();
                for date in days {
                    match self.get_fixing(index, date) {
                        Some(rate) => carried = rate,
                        None => filled += 1,
                    }
                    map.insert(date, carried);
                }
                if filled > 0 {
                    warn!("carried {filled} {index} rate(s) forward over {start}..={end}");
                }
                map
            }
        };

        debug!(
            "built {index} rate map {start}..={end} ({fill:?}): {} dated rates",
            rates.len()
        );
        Ok(rates)
    }

    /// Creates a store from date-rate pairs for a specific index.
    #[must_use]
    pub fn from_rates(index: RateIndex, rates: impl IntoIterator<Item = (Date, Decimal)>) -> Self {
        let mut store = Self::new();
        for (date, rate) in rates {
            store.add_fixing(date, index, rate);
        }
        store
    }
}
