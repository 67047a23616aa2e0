//! Amount type for expense values.
//!
//! Wraps `Decimal` so that parsing is the single place where the
//! numeric-amount rule is enforced: a string that does not parse as a
//! number is rejected before it can reach the store.

use crate::error::Error;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A monetary amount.
///
/// Parsing tolerates a leading dollar sign (`$12.50`, `-$3`); the value
/// is always written back as a plain decimal. Anything that is not a
/// number fails with `Error::InvalidAmount`.
///
/// # Examples
///
/// ```
/// # use expense_sync::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("-$50.00").unwrap();
/// assert_eq!(amount.to_string(), "-50.00");
/// assert!(Amount::from_str("lots").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Creates a new Amount from a Decimal value.
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.0.is_sign_negative()
    }

    /// Lossy conversion for interfaces that require binary floats
    /// (workbook cells, remote JSON numbers).
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// Converts from a binary float, failing on NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        Decimal::from_f64(value).map(Self)
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // Strip an optional dollar sign, which may follow a minus sign.
        let plain = if let Some(after_minus) = trimmed.strip_prefix('-') {
            if let Some(after_dollar) = after_minus.strip_prefix('$') {
                format!("-{after_dollar}")
            } else {
                trimmed.to_string()
            }
        } else if let Some(after_dollar) = trimmed.strip_prefix('$') {
            after_dollar.to_string()
        } else {
            trimmed.to_string()
        };

        Decimal::from_str(&plain)
            .map(Amount)
            .map_err(|_| Error::InvalidAmount(s.to_string()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_plain() {
        let amount = Amount::from_str("50.00").unwrap();
        assert_eq!(amount.value(), dec!(50.00));
    }

    #[test]
    fn test_parse_integer() {
        let amount = Amount::from_str("12").unwrap();
        assert_eq!(amount.value(), dec!(12));
    }

    #[test]
    fn test_parse_with_dollar_sign() {
        let amount = Amount::from_str("$50.00").unwrap();
        assert_eq!(amount.value(), dec!(50.00));
    }

    #[test]
    fn test_parse_negative_with_dollar_sign() {
        let amount = Amount::from_str("-$50.00").unwrap();
        assert_eq!(amount.value(), dec!(-50.00));
    }

    #[test]
    fn test_parse_whitespace() {
        let amount = Amount::from_str("  7.25  ").unwrap();
        assert_eq!(amount.value(), dec!(7.25));
    }

    #[test]
    fn test_parse_non_numeric_rejected() {
        let err = Amount::from_str("lots").unwrap_err();
        assert!(matches!(err, Error::InvalidAmount(s) if s == "lots"));
    }

    #[test]
    fn test_parse_empty_rejected() {
        assert!(matches!(
            Amount::from_str(""),
            Err(Error::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_display_plain_decimal() {
        let amount = Amount::from_str("-$1234.50").unwrap();
        assert_eq!(amount.to_string(), "-1234.50");
    }

    #[test]
    fn test_serialize_as_string() {
        let amount = Amount::new(dec!(50.00));
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"50.00\"");
    }

    #[test]
    fn test_deserialize_from_string() {
        let amount: Amount = serde_json::from_str("\"-3.75\"").unwrap();
        assert_eq!(amount.value(), dec!(-3.75));
    }

    #[test]
    fn test_zero_is_not_negative() {
        let zero = Amount::from_str("0.00").unwrap();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
    }

    #[test]
    fn test_f64_round_trip() {
        let amount = Amount::from_f64(12.5).unwrap();
        assert_eq!(amount.value(), dec!(12.5));
        assert_eq!(amount.to_f64(), 12.5);
    }

    #[test]
    fn test_from_f64_rejects_nan() {
        assert!(Amount::from_f64(f64::NAN).is_none());
    }
}
