//! # SOFR Accrual
//!
//! Daily simple SOFR interest accrual for floating-rate loans.
//!
//! This crate provides:
//!
//! - **Requests**: validated [`AccrualRequest`] and its untyped form [`RawAccrualRequest`]
//! - **Rate indices**: [`RateIndex`] and the supported (index, day count) registry
//! - **Rate data**: [`FixingStore`] of published fixings, turned into a per-request [`RateMap`]
//! - **Engine**: [`compute_accrual`] producing a per-day ledger and totals
//!
//! ## Example
//!
//! ```rust
//! use sofr_accrual::prelude::*;
//! use sofr_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let start = Date::parse("2026-01-05").unwrap();
//! let end = Date::parse("2026-01-09").unwrap();
//!
//! let mut store = FixingStore::new();
//! for (day, rate) in [("2025-12-31", dec!(0.0530)), ("2026-01-02", dec!(0.0525))] {
//!     store.add_fixing(Date::parse(day).unwrap(), RateIndex::SofrDailySimple, rate);
//! }
//!
//! let request = AccrualRequest::new(dec!(1000000), dec!(150), start, end).with_lookback(5);
//! let (from, to) = request.observation_window().unwrap();
//! let rates = store
//!     .rate_map(RateIndex::SofrDailySimple, from, to, FillPolicy::CarryForward)
//!     .unwrap();
//!
//! let result = compute_accrual(&request, &rates).unwrap();
//! assert_eq!(result.days(), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod engine;
pub mod fixing_store;
pub mod index;
pub mod rates;
pub mod request;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::engine::{compute_accrual, compute_accrual_raw, AccrualResult, DailyAccrualRecord};
    pub use crate::fixing_store::{DailyRate, FillPolicy, FixingStore, IndexFixing};
    pub use crate::index::{ensure_supported, RateIndex, SUPPORTED_COMBINATIONS};
    pub use crate::rates::RateMap;
    pub use crate::request::{AccrualRequest, RawAccrualRequest};
}

pub use engine::{compute_accrual, compute_accrual_raw, AccrualResult, DailyAccrualRecord};
pub use fixing_store::{DailyRate, FillPolicy, FixingStore, IndexFixing};
pub use index::{ensure_supported, RateIndex, SUPPORTED_COMBINATIONS};
pub use rates::RateMap;
pub use request::{AccrualRequest, RawAccrualRequest, DEFAULT_LOOKBACK_DAYS, MAX_LOOKBACK_DAYS};
