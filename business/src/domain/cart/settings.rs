use std::time::Duration;

use rust_decimal::Decimal;

use crate::domain::cart::pending_deletion::DEFAULT_UNDO_WINDOW_MS;
use crate::domain::promo::validator::DEFAULT_PROMO_CODE;
use crate::domain::shared::value_objects::Money;

/// Tunables shared by every cart session.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSettings {
    /// Charged when no pickup point is selected.
    pub delivery_cost: Money,
    pub promo_code: String,
    pub promo_discount: Money,
    pub undo_window: Duration,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            delivery_cost: Money::new(Decimal::new(500, 2)).unwrap_or_default(),
            promo_code: DEFAULT_PROMO_CODE.to_string(),
            promo_discount: Money::new(Decimal::new(1000, 2)).unwrap_or_default(),
            undo_window: Duration::from_millis(DEFAULT_UNDO_WINDOW_MS.unsigned_abs()),
        }
    }
}
