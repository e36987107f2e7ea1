//! Monetary amounts (unit prices, proceeds, revenue).

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A non-negative, finite amount of money.
///
/// Plain `f64` arithmetic; no rounding is applied beyond what display does.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money(f64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0.0);

    /// Validate and wrap a raw amount.
    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("amount must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("amount cannot be negative"));
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> f64 {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    pub fn times(self, quantity: u32) -> DomainResult<Money> {
        Self::in_range(self.0 * f64::from(quantity))
    }

    pub fn checked_add(self, rhs: Money) -> DomainResult<Money> {
        Self::in_range(self.0 + rhs.0)
    }

    fn in_range(amount: f64) -> DomainResult<Money> {
        if amount.is_finite() {
            Ok(Self(amount))
        } else {
            Err(DomainError::validation("sale amount out of range"))
        }
    }
}

impl TryFrom<f64> for Money {
    type Error = DomainError;

    fn try_from(amount: f64) -> DomainResult<Self> {
        Money::new(amount)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> f64 {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        assert!(matches!(Money::new(-0.01), Err(DomainError::Validation(_))));
        assert!(matches!(Money::new(f64::NAN), Err(DomainError::Validation(_))));
        assert!(matches!(
            Money::new(f64::INFINITY),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn zero_is_a_valid_price() {
        assert_eq!(Money::new(0.0).unwrap(), Money::ZERO);
    }

    #[test]
    fn times_multiplies_unit_price_by_quantity() {
        let price = Money::new(25.0).unwrap();
        assert_eq!(price.times(4).unwrap().amount(), 100.0);
        assert_eq!(price.times(0).unwrap(), Money::ZERO);
    }

    #[test]
    fn arithmetic_that_overflows_to_infinity_is_rejected() {
        let price = Money::new(1e308).unwrap();
        assert_eq!(
            price.times(10),
            Err(DomainError::validation("sale amount out of range"))
        );
        assert!(matches!(
            price.checked_add(price),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(
            Money::new(1.5).unwrap().checked_add(Money::new(2.0).unwrap()),
            Ok(Money::new(3.5).unwrap())
        );
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Money::new(100.0).unwrap().to_string(), "100.00");
        assert_eq!(Money::new(2.5).unwrap().to_string(), "2.50");
    }

    #[test]
    fn serializes_as_a_bare_number() {
        let json = serde_json::to_string(&Money::new(1.5).unwrap()).unwrap();
        assert_eq!(json, "1.5");
    }

    #[test]
    fn deserializing_applies_the_same_validation() {
        assert_eq!(serde_json::from_str::<Money>("2.25").unwrap().amount(), 2.25);
        assert!(serde_json::from_str::<Money>("-1.0").is_err());
    }
}
