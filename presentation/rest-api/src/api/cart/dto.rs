use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde_json::Value;

use business::application::cart::session::{CartSnapshot, PendingItem};
use business::domain::cart::model::CartLineItem;
use business::domain::pricing::model::PriceSummary;
use business::domain::promo::model::{PromoState, PromoStatus};
use business::domain::shared::value_objects::Quantity;

use crate::api::pickup_point::dto::PickupPointResponse;
use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "snake_case")]
pub struct AddCartItemRequest {
    pub product_id: String,
    #[oai(skip_serializing_if_is_none)]
    pub size: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub color: Option<String>,
}

/// New quantity for a line.
///
/// Accepts a number or a numeric string. Fractions are truncated, values
/// below 1 become 1, anything non-numeric becomes 1.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "snake_case")]
pub struct ChangeQuantityRequest {
    pub quantity: Value,
}

impl ChangeQuantityRequest {
    pub fn requested_quantity(&self) -> i64 {
        match &self.quantity {
            Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().map(|f| f as i64))
                .unwrap_or(1),
            Value::String(text) => i64::from(Quantity::parse_lenient(text).get()),
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "snake_case")]
pub struct ApplyPromoRequest {
    pub code: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "snake_case")]
pub struct CartItemResponse {
    pub id: String,
    pub product: ProductResponse,
    pub quantity: u32,
    #[oai(skip_serializing_if_is_none)]
    pub size: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub color: Option<String>,
    /// Quantity times the discounted unit price
    pub line_total: String,
}

impl From<CartLineItem> for CartItemResponse {
    fn from(item: CartLineItem) -> Self {
        Self {
            id: item.id.to_string(),
            line_total: item.total().to_string(),
            quantity: item.quantity.get(),
            size: item.attributes.size,
            color: item.attributes.color,
            product: item.product.into(),
        }
    }
}

/// Line shown in the undo banner.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "snake_case")]
pub struct PendingItemResponse {
    pub item: CartItemResponse,
    pub deadline: DateTime<Utc>,
    pub remaining_ms: i64,
}

impl From<PendingItem> for PendingItemResponse {
    fn from(pending: PendingItem) -> Self {
        Self {
            item: pending.item.into(),
            deadline: pending.deadline,
            remaining_ms: pending.remaining_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum PromoStatusDto {
    #[oai(rename = "not_applied")]
    NotApplied,
    #[oai(rename = "applied")]
    Applied,
    #[oai(rename = "rejected")]
    Rejected,
}

impl From<PromoStatus> for PromoStatusDto {
    fn from(status: PromoStatus) -> Self {
        match status {
            PromoStatus::NotApplied => PromoStatusDto::NotApplied,
            PromoStatus::Applied => PromoStatusDto::Applied,
            PromoStatus::Rejected => PromoStatusDto::Rejected,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "snake_case")]
pub struct PromoResponse {
    #[oai(skip_serializing_if_is_none)]
    pub code: Option<String>,
    pub discount: String,
    pub status: PromoStatusDto,
}

impl From<PromoState> for PromoResponse {
    fn from(promo: PromoState) -> Self {
        Self {
            discount: promo.discount.to_string(),
            status: promo.status.into(),
            code: promo.code,
        }
    }
}

/// Amounts rounded to two decimals.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "snake_case")]
pub struct PriceSummaryResponse {
    pub item_count: u64,
    pub gross_subtotal: String,
    pub subtotal: String,
    pub item_discount: String,
    pub promo_code_discount: String,
    pub promo_discount: String,
    pub discount: String,
    pub delivery_cost: String,
    pub total: String,
}

impl From<PriceSummary> for PriceSummaryResponse {
    fn from(summary: PriceSummary) -> Self {
        Self {
            item_count: summary.item_count,
            gross_subtotal: summary.gross_subtotal.to_string(),
            subtotal: summary.subtotal.to_string(),
            item_discount: summary.item_discount.to_string(),
            promo_code_discount: summary.promo_code_discount.to_string(),
            promo_discount: summary.promo_discount.to_string(),
            discount: summary.discount.to_string(),
            delivery_cost: summary.delivery_cost.to_string(),
            total: summary.total.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "snake_case")]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub pending: Option<PendingItemResponse>,
    pub promo: PromoResponse,
    #[oai(skip_serializing_if_is_none)]
    pub pickup_point: Option<PickupPointResponse>,
    pub summary: PriceSummaryResponse,
    /// True once the cart has items and a pickup point is selected
    pub can_checkout: bool,
}

impl From<CartSnapshot> for CartResponse {
    fn from(snapshot: CartSnapshot) -> Self {
        Self {
            items: snapshot.items.into_iter().map(CartItemResponse::from).collect(),
            pending: snapshot.pending.map(PendingItemResponse::from),
            promo: snapshot.promo.into(),
            pickup_point: snapshot.pickup_point.map(PickupPointResponse::from),
            summary: snapshot.summary.into(),
            can_checkout: snapshot.can_checkout,
        }
    }
}
