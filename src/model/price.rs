//! Fixed-point prices.

use crate::error::ValidationError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::{self, Display};

/// A non-negative amount with exactly two fractional digits.
///
/// Only [`Price::parse`] builds a non-zero price, so every value in the store has passed
/// the sign, scale and width checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Fractional digits kept for every price.
    pub const SCALE: u32 = 2;

    /// Total digits allowed for a catalog price.
    pub const PRODUCT_DIGITS: u32 = 8;

    /// Total digits allowed for a price frozen on an order item.
    pub const ITEM_DIGITS: u32 = 9;

    /// Validates `value` for `field` and normalizes it to two fractional digits.
    pub fn parse(field: &str, value: Decimal, max_digits: u32) -> Result<Self, ValidationError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ValidationError::new(
                field,
                "ensure this value is greater than or equal to 0",
            ));
        }
        if value.normalize().scale() > Self::SCALE {
            return Err(ValidationError::new(
                field,
                format!("ensure that there are no more than {} decimal places", Self::SCALE),
            ));
        }

        let limit = Decimal::from(10u64.pow(max_digits - Self::SCALE));
        if value >= limit {
            return Err(ValidationError::new(
                field,
                format!("ensure that there are no more than {max_digits} digits in total"),
            ));
        }

        let mut amount = value.abs();
        amount.rescale(Self::SCALE);
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Line amount for `quantity` units at this price.
    pub fn times(self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_normalizes_to_two_places() {
        let price = Price::parse("price", dec!(100), Price::PRODUCT_DIGITS).unwrap();
        assert_eq!(price.to_string(), "100.00");

        let price = Price::parse("price", dec!(49.9), Price::PRODUCT_DIGITS).unwrap();
        assert_eq!(price.to_string(), "49.90");
    }

    #[test]
    fn test_zero_is_a_valid_price() {
        let price = Price::parse("price", dec!(0.00), Price::PRODUCT_DIGITS).unwrap();
        assert_eq!(price, Price::ZERO);
    }

    #[test]
    fn test_rejects_negative_amounts() {
        let err = Price::parse("price", dec!(-0.01), Price::PRODUCT_DIGITS).unwrap_err();
        assert_eq!(err.field, "price");
        assert!(err.message.contains("greater than or equal to 0"));
    }

    #[test]
    fn test_rejects_extra_fractional_digits() {
        let err = Price::parse("price", dec!(1.005), Price::PRODUCT_DIGITS).unwrap_err();
        assert!(err.message.contains("decimal places"));

        // trailing zeros are not significant
        assert!(Price::parse("price", dec!(1.500), Price::PRODUCT_DIGITS).is_ok());
    }

    #[test]
    fn test_width_limit_depends_on_column() {
        assert!(Price::parse("price", dec!(999999.99), Price::PRODUCT_DIGITS).is_ok());
        assert!(Price::parse("price", dec!(1000000.00), Price::PRODUCT_DIGITS).is_err());
        assert!(Price::parse("item_price", dec!(1000000.00), Price::ITEM_DIGITS).is_ok());
    }

    #[test]
    fn test_times_quantity() {
        let price = Price::parse("price", dec!(100.00), Price::PRODUCT_DIGITS).unwrap();
        assert_eq!(price.times(2), dec!(200.00));
        assert_eq!(price.times(0), Decimal::ZERO);
    }
}
