use serde::{Deserialize, Serialize};

use super::errors::PromoError;
use super::validator::PromoCodeValidator;
use crate::domain::shared::value_objects::Money;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromoStatus {
    #[default]
    NotApplied,
    Applied,
    Rejected,
}

impl std::fmt::Display for PromoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromoStatus::NotApplied => write!(f, "not_applied"),
            PromoStatus::Applied => write!(f, "applied"),
            PromoStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Promo code entered on a cart.
///
/// A rejected code is kept so the shopper can correct it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoState {
    pub code: Option<String>,
    pub discount: Money,
    pub status: PromoStatus,
}

impl PromoState {
    /// Validates `code` and records the outcome.
    ///
    /// A blank code removes the promo instead of being rejected.
    pub fn apply(&mut self, code: &str, validator: &PromoCodeValidator) -> Result<Money, PromoError> {
        if code.trim().is_empty() {
            *self = PromoState::default();
            return Ok(Money::ZERO);
        }

        self.code = Some(code.to_string());
        match validator.validate(code) {
            Ok(discount) => {
                self.discount = discount;
                self.status = PromoStatus::Applied;
                Ok(discount)
            }
            Err(err) => {
                self.discount = Money::ZERO;
                self.status = PromoStatus::Rejected;
                Err(err)
            }
        }
    }
}
