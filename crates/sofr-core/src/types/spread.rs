//! Loan margin over the benchmark rate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SofrError, SofrResult};

const BPS_PER_UNIT: Decimal = dec!(10000);

/// A non-negative spread in basis points.
///
/// # Example
///
/// ```rust
/// use sofr_core::types::Spread;
/// use rust_decimal_macros::dec;
///
/// let spread = Spread::from_bps(dec!(250)).unwrap();
/// assert_eq!(spread.as_bps(), dec!(250));
/// assert_eq!(spread.as_decimal(), dec!(0.025));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "Decimal", try_from = "Decimal")]
pub struct Spread {
    value_bps: Decimal,
}

impl Spread {
    /// A zero spread.
    pub const ZERO: Spread = Spread {
        value_bps: Decimal::ZERO,
    };

    /// Creates a spread from basis points.
    ///
    /// # Errors
    ///
    /// Returns `SofrError::InvalidSpread` if `bps` is negative.
    pub fn from_bps(bps: Decimal) -> SofrResult<Self> {
        if bps.is_sign_negative() && !bps.is_zero() {
            return Err(SofrError::invalid_spread(bps));
        }
        Ok(Self { value_bps: bps })
    }

    /// Creates a spread from a floating-point basis point value.
    ///
    /// # Errors
    ///
    /// Returns `SofrError::InvalidSpread` if `bps` is negative, NaN or
    /// infinite.
    pub fn from_bps_f64(bps: f64) -> SofrResult<Self> {
        if !bps.is_finite() {
            return Err(SofrError::invalid_spread(bps));
        }
        let value = Decimal::try_from(bps).map_err(|_| SofrError::invalid_spread(bps))?;
        Self::from_bps(value)
    }

    /// Returns the spread in basis points.
    #[must_use]
    pub fn as_bps(&self) -> Decimal {
        self.value_bps
    }

    /// Returns the spread as a decimal rate (250 bps = 0.025).
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        self.value_bps / BPS_PER_UNIT
    }
}

impl TryFrom<Decimal> for Spread {
    type Error = SofrError;

    fn try_from(bps: Decimal) -> SofrResult<Self> {
        Self::from_bps(bps)
    }
}

impl From<Spread> for Decimal {
    fn from(spread: Spread) -> Self {
        spread.value_bps
    }
}

impl fmt::Display for Spread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bps", self.value_bps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bps_to_decimal() {
        assert_eq!(Spread::from_bps(dec!(250)).unwrap().as_decimal(), dec!(0.025));
        assert_eq!(Spread::from_bps(dec!(1)).unwrap().as_decimal(), dec!(0.0001));
        assert_eq!(Spread::ZERO.as_decimal(), Decimal::ZERO);
    }

    #[test]
    fn test_fractional_bps() {
        let spread = Spread::from_bps(dec!(12.5)).unwrap();
        assert_eq!(spread.as_decimal(), dec!(0.00125));
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(
            Spread::from_bps(dec!(-0.5)),
            Err(SofrError::InvalidSpread { .. })
        ));
        assert!(Spread::from_bps(dec!(-0)).is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Spread::from_bps_f64(f64::NAN).is_err());
        assert!(Spread::from_bps_f64(f64::INFINITY).is_err());
        assert!(Spread::from_bps_f64(-1.0).is_err());
        assert_eq!(
            Spread::from_bps_f64(250.0).unwrap().as_bps(),
            dec!(250)
        );
    }

    #[test]
    fn test_serde_validates() {
        let spread: Spread = serde_json::from_str("250").unwrap();
        assert_eq!(spread.as_bps(), dec!(250));
        let json = serde_json::to_string(&spread).unwrap();
        assert_eq!(serde_json::from_str::<Spread>(&json).unwrap(), spread);

        let err = serde_json::from_str::<Spread>("-5").unwrap_err();
        assert!(err.to_string().contains("Invalid spread"), "{err}");
    }

    #[test]
    fn test_display() {
        assert_eq!(Spread::from_bps(dec!(250)).unwrap().to_string(), "250 bps");
    }
}
