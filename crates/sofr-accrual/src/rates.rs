//! Date-to-rate lookup consumed by the accrual engine.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sofr_core::error::{SofrError, SofrResult};
use sofr_core::types::Date;

/// Annualized base rates by calendar date, as decimals (`0.0525` = 5.25%).
///
/// A rate map is built fresh for each calculation, usually by
/// [`FixingStore::rate_map`](crate::FixingStore::rate_map), and is only read
/// by the engine. It may be carry-forward filled or contain gaps; a gap on a
/// date the engine needs is reported as `SofrError::MissingBaseRate`.
///
/// # Example
///
/// ```rust
/// use sofr_accrual::RateMap;
/// use sofr_core::types::Date;
/// use rust_decimal_macros::dec;
///
/// let d = Date::parse("2026-01-02").unwrap();
/// let rates: RateMap = [(d, dec!(0.0525))].into_iter().collect();
/// assert_eq!(rates.get(d), Some(dec!(0.0525)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateMap {
    rates: BTreeMap<Date, Decimal>,
}

impl RateMap {
    /// Creates an empty rate map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rate for `date`, replacing any previous value.
    pub fn insert(&mut self, date: Date, rate: Decimal) {
        self.rates.insert(date, rate);
    }

    /// Returns the rate for `date`, if present.
    #[must_use]
    pub fn get(&self, date: Date) -> Option<Decimal> {
        self.rates.get(&date).copied()
    }

    /// Returns the rate for `date`.
    ///
    /// # Errors
    ///
    /// Returns `SofrError::MissingBaseRate` naming `date` if absent.
    pub fn require(&self, date: Date) -> SofrResult<Decimal> {
        self.get(date)
            .ok_or_else(|| SofrError::missing_base_rate(date))
    }

    /// Returns the number of dated rates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the map holds no rates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Returns the earliest and latest dates present.
    #[must_use]
    pub fn date_span(&self) -> Option<(Date, Date)> {
        let first = self.rates.keys().next()?;
        let last = self.rates.keys().next_back()?;
        Some((*first, *last))
    }

    /// Iterates over `(date, rate)` pairs in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, Decimal)> + '_ {
        self.rates.iter().map(|(d, r)| (*d, *r))
    }
}

impl FromIterator<(Date, Decimal)> for RateMap {
    fn from_iter<I: IntoIterator<Item = (Date, Decimal)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Date, Decimal)> for RateMap {
    fn extend<I: IntoIterator<Item = (Date, Decimal)>>(&mut self, iter: I) {
        self.rates.extend(iter);
    }
}
