use std::iter::Sum;
use std::ops::{Add, Sub};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueObjectError {
    #[error("value.negative_amount")]
    NegativeAmount,
    #[error("value.percentage_out_of_range")]
    PercentageOutOfRange,
}

/// Opaque identifier of the shopper owning a cart and a favorites list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShopperId(String);

impl ShopperId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShopperId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ShopperId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ShopperId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Currency amount in major units (e.g. 12.50).
///
/// Arithmetic is exact; rounding only happens when the amount is displayed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Builds a non-negative amount.
    pub fn new(amount: Decimal) -> Result<Self, ValueObjectError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ValueObjectError::NegativeAmount);
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiplies the amount by a line quantity.
    pub fn times(self, quantity: Quantity) -> Money {
        Money(self.0 * Decimal::from(quantity.get()))
    }

    /// Applies a percentage to the amount, e.g. 20% of 50.00 is 10.00.
    pub fn percent(self, percentage: Percentage) -> Money {
        Money(self.0 * percentage.value() / Decimal::ONE_HUNDRED)
    }

    /// Subtraction that stops at zero.
    pub fn saturating_sub(self, other: Money) -> Money {
        if other.0 >= self.0 {
            Money::ZERO
        } else {
            Money(self.0 - other.0)
        }
    }

    /// The amount rounded to cents, as shown to the shopper.
    pub fn rounded(&self) -> Decimal {
        let mut value = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(2);
        value
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rounded())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

/// Discount percentage in the closed range 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Percentage(Decimal);

impl Percentage {
    pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(ValueObjectError::PercentageOutOfRange);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Line item quantity, never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    /// Clamps any integer input into a valid quantity.
    ///
    /// Zero and negative values become 1; values above `u32::MAX` saturate.
    pub fn clamped(value: i64) -> Self {
        Self(u32::try_from(value.max(1)).unwrap_or(u32::MAX))
    }

    /// Parses free text input; anything non-numeric becomes 1.
    ///
    /// Fractional input is truncated, so "2.5" reads as 2.
    pub fn parse_lenient(input: &str) -> Self {
        let input = input.trim();
        input
            .parse::<i64>()
            .ok()
            .or_else(|| {
                input
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .map(|value| value as i64)
            })
            .map(Self::clamped)
            .unwrap_or(Self::ONE)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn should_display_shopper_id() {
        let shopper = ShopperId::new("device-42");
        assert_eq!(format!("{}", shopper), "device-42");
    }

    #[test]
    fn should_compare_shopper_ids_for_equality() {
        let a: ShopperId = "same".into();
        let b = ShopperId::from("same".to_string());
        assert_eq!(a, b);
        assert_ne!(a, ShopperId::new("other"));
    }

    #[test]
    fn should_reject_negative_money() {
        let result = Money::new(dec!(-0.01));
        assert_eq!(result.unwrap_err(), ValueObjectError::NegativeAmount);
    }

    #[test]
    fn should_format_money_with_two_decimals() {
        assert_eq!(Money::new(dec!(5)).unwrap().to_string(), "5.00");
        assert_eq!(Money::new(dec!(12.345)).unwrap().to_string(), "12.35");
        assert_eq!(Money::new(dec!(0.1)).unwrap().to_string(), "0.10");
    }

    #[test]
    fn should_apply_percentage_exactly() {
        let price = Money::new(dec!(50)).unwrap();
        let twenty = Percentage::new(dec!(20)).unwrap();

        assert_eq!(price.percent(twenty).amount(), dec!(10));
    }

    #[test]
    fn should_saturate_subtraction_at_zero() {
        let small = Money::new(dec!(3)).unwrap();
        let big = Money::new(dec!(10)).unwrap();

        assert_eq!(small.saturating_sub(big), Money::ZERO);
        assert_eq!(big.saturating_sub(small).amount(), dec!(7));
    }

    #[test]
    fn should_sum_money() {
        let total: Money = [dec!(1.10), dec!(2.20), dec!(3.30)]
            .into_iter()
            .map(|d| Money::new(d).unwrap())
            .sum();
        assert_eq!(total.amount(), dec!(6.60));
    }

    #[test]
    fn should_reject_percentage_out_of_range() {
        assert!(Percentage::new(dec!(-1)).is_err());
        assert!(Percentage::new(dec!(100.01)).is_err());
        assert!(Percentage::new(dec!(0)).is_ok());
        assert!(Percentage::new(dec!(100)).is_ok());
    }

    #[test]
    fn should_clamp_quantity_to_at_least_one() {
        assert_eq!(Quantity::clamped(0).get(), 1);
        assert_eq!(Quantity::clamped(-5).get(), 1);
        assert_eq!(Quantity::clamped(7).get(), 7);
        assert_eq!(Quantity::clamped(i64::MAX).get(), u32::MAX);
    }

    #[test]
    fn should_parse_non_numeric_quantity_as_one() {
        assert_eq!(Quantity::parse_lenient("abc").get(), 1);
        assert_eq!(Quantity::parse_lenient("").get(), 1);
        assert_eq!(Quantity::parse_lenient(" 4 ").get(), 4);
        assert_eq!(Quantity::parse_lenient("-2").get(), 1);
        assert_eq!(Quantity::parse_lenient("2.5").get(), 2);
        assert_eq!(Quantity::parse_lenient("NaN").get(), 1);
    }
}
