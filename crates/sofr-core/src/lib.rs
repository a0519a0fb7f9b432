//! # SOFR Core
//!
//! Core types for daily SOFR accrual calculations.
//!
//! This crate provides the leaf building blocks used by the accrual engine:
//!
//! - **Types**: [`Date`] with strict ISO parsing, [`Spread`](types::Spread) in basis points
//! - **Calendar**: inclusive day ranges and calendar-day shifting
//! - **Day Count Conventions**: daily ACT/360 and ACT/ACT fractions
//! - **Errors**: the [`SofrError`] taxonomy shared by every crate in the workspace
//!
//! ## Example
//!
//! ```rust
//! use sofr_core::prelude::*;
//!
//! let start = Date::parse("2026-01-01").unwrap();
//! let end = Date::parse("2026-01-10").unwrap();
//! assert_eq!(enumerate_days_inclusive(start, end).unwrap().len(), 10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

pub mod calendar;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendar::{enumerate_days_inclusive, parse_calendar_date, shift_date, DayRange};
    pub use crate::daycounts::{day_count_fraction, DayCount, DayCountConvention};
    pub use crate::error::{SofrError, SofrResult};
    pub use crate::types::{Date, Spread};
}

// Re-export commonly used types at crate root
pub use error::{SofrError, SofrResult};
pub use types::{Date, Spread};
