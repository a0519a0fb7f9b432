//! Reference rate indices and the supported (index, day count) registry.
//!
//! Every accrual request names a rate index and a day count convention
//! explicitly. The pair is checked against [`SUPPORTED_COMBINATIONS`], the
//! single place that decides what the engine can compute. Legacy method
//! names are rejected rather than mapped to a default.

use serde::{Deserialize, Serialize};

use sofr_core::daycounts::DayCountConvention;
use sofr_core::error::{SofrError, SofrResult};

/// Reference rate indices the engine accrues against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RateIndex {
    /// Daily simple SOFR: each accrual day uses one published SOFR fixing,
    /// with no compounding.
    #[serde(rename = "SOFR_DAILY_SIMPLE")]
    SofrDailySimple,
}

impl RateIndex {
    /// Returns the identifier used in requests and serialized output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            RateIndex::SofrDailySimple => "SOFR_DAILY_SIMPLE",
        }
    }

    /// Returns a human-readable description of the index.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            RateIndex::SofrDailySimple => "Daily simple SOFR (NY Fed overnight rate)",
        }
    }

    /// Returns all supported indices.
    #[must_use]
    pub fn all() -> &'static [RateIndex] {
        &[RateIndex::SofrDailySimple]
    }

    /// Comma-separated list of index codes, for error messages.
    #[must_use]
    pub fn supported_list() -> String {
        Self::all()
            .iter()
            .map(RateIndex::code)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for RateIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for RateIndex {
    type Err = SofrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SOFR_DAILY_SIMPLE" => Ok(RateIndex::SofrDailySimple),
            _ => Err(SofrError::UnsupportedRateIndex {
                index: s.to_string(),
                supported: Self::supported_list(),
            }),
        }
    }
}

/// Every (index, day count) pair the engine accepts.
pub const SUPPORTED_COMBINATIONS: &[(RateIndex, DayCountConvention)] = &[
    (RateIndex::SofrDailySimple, DayCountConvention::ActAct),
    (RateIndex::SofrDailySimple, DayCountConvention::Act360),
];

/// Checks that `index` may be accrued under `day_count`.
///
/// # Errors
///
/// Returns `SofrError::UnsupportedDayCount` listing the conventions that
/// are supported for `index`.
pub fn ensure_supported(index: RateIndex, day_count: DayCountConvention) -> SofrResult<()> {
    if SUPPORTED_COMBINATIONS.contains(&(index, day_count)) {
        return Ok(());
    }
    Err(SofrError::UnsupportedDayCount {
        day_count: day_count.code().to_string(),
        supported: supported_day_counts(index)
            .iter()
            .map(DayCountConvention::code)
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Returns the day count conventions registered for `index`.
#[must_use]
pub fn supported_day_counts(index: RateIndex) -> Vec<DayCountConvention> {
    SUPPORTED_COMBINATIONS
        .iter()
        .filter(|(i, _)| *i == index)
        .map(|(_, dc)| *dc)
        .collect()
}
