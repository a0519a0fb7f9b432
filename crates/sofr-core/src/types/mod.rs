//! Domain types for accrual calculations.
//!
//! - [`Date`]: Calendar date with strict ISO parsing and day shifting
//! - [`Spread`]: Non-negative margin in basis points

mod date;
mod spread;

pub use date::{is_leap_year, Date};
pub use spread::Spread;
