use super::errors::PromoError;
use crate::domain::shared::value_objects::Money;

pub const DEFAULT_PROMO_CODE: &str = "PROMO10";

/// Checks codes against the single accepted promo code.
#[derive(Debug, Clone)]
pub struct PromoCodeValidator {
    accepted_code: String,
    discount: Money,
}

impl PromoCodeValidator {
    pub fn new(accepted_code: impl Into<String>, discount: Money) -> Self {
        Self {
            accepted_code: accepted_code.into(),
            discount,
        }
    }

    /// Case-insensitive match, surrounding whitespace ignored.
    pub fn validate(&self, code: &str) -> Result<Money, PromoError> {
        if code.trim().eq_ignore_ascii_case(self.accepted_code.trim()) {
            Ok(self.discount)
        } else {
            Err(PromoError::InvalidCode)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn should_accept_code_in_any_case() {
        let validator = PromoCodeValidator::new(DEFAULT_PROMO_CODE, Money::new(dec!(10)).unwrap());

        assert_eq!(validator.validate("PROMO10").unwrap().amount(), dec!(10));
        assert_eq!(validator.validate("Promo10").unwrap().amount(), dec!(10));
        assert_eq!(validator.validate(" promo10 ").unwrap().amount(), dec!(10));
    }

    #[test]
    fn should_reject_other_codes() {
        let validator = PromoCodeValidator::new(DEFAULT_PROMO_CODE, Money::new(dec!(10)).unwrap());

        assert_eq!(validator.validate("PROMO1").unwrap_err(), PromoError::InvalidCode);
        assert_eq!(validator.validate("WRONG").unwrap_err(), PromoError::InvalidCode);
    }
}
