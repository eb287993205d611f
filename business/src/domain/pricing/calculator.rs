use crate::domain::cart::model::CartLineItem;
use crate::domain::shared::value_objects::Money;

use super::model::PriceSummary;

/// Derives the price summary of the given lines.
///
/// Callers pass only the lines the shopper can see; a line staged for removal
/// does not count.
pub fn calculate<'a, I>(items: I, promo_discount: Money, delivery_cost: Money) -> PriceSummary
where
    I: IntoIterator<Item = &'a CartLineItem>,
{
    let mut summary = PriceSummary::default();

    for item in items {
        summary.item_count += u64::from(item.quantity.get());
        summary.gross_subtotal = summary.gross_subtotal + item.gross_total();
        summary.subtotal = summary.subtotal + item.total();
        summary.item_discount = summary.item_discount + item.discount_total();
    }

    summary.promo_code_discount = promo_discount;
    summary.promo_discount = promo_discount.min(summary.subtotal);
    summary.discount = summary.item_discount + summary.promo_discount;
    summary.delivery_cost = delivery_cost;
    summary.total = summary.subtotal.saturating_sub(promo_discount) + delivery_cost;

    summary
}
