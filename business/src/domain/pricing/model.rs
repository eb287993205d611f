use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::Money;

/// Price breakdown shown under the cart.
///
/// `discount` is informational: it adds the product discounts already folded
/// into `subtotal` to the promo discount. The total only subtracts the promo
/// discount, so `gross_subtotal - discount + delivery_cost == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSummary {
    /// Units across visible lines.
    pub item_count: u64,
    /// Sum of base prices times quantities.
    pub gross_subtotal: Money,
    /// Sum of discounted prices times quantities.
    pub subtotal: Money,
    pub item_discount: Money,
    /// Discount granted by the promo code, before capping.
    pub promo_code_discount: Money,
    /// Promo discount actually applied, capped at the subtotal.
    pub promo_discount: Money,
    pub discount: Money,
    pub delivery_cost: Money,
    pub total: Money,
}
