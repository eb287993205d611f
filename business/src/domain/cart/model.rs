use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::{Money, Quantity};

/// Identifier of one cart line, independent of the product id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItemId(Uuid);

impl LineItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for LineItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LineItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Options picked by the shopper when adding a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemAttributes {
    pub size: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: LineItemId,
    pub product: Product,
    pub quantity: Quantity,
    pub attributes: LineItemAttributes,
}

impl CartLineItem {
    pub fn new(product: Product, attributes: LineItemAttributes) -> Self {
        Self {
            id: LineItemId::new(),
            product,
            quantity: Quantity::ONE,
            attributes,
        }
    }

    /// Line total before the product discount.
    pub fn gross_total(&self) -> Money {
        self.product.price.times(self.quantity)
    }

    /// Line total after the product discount.
    pub fn total(&self) -> Money {
        self.product.effective_price().times(self.quantity)
    }

    pub fn discount_total(&self) -> Money {
        self.product.unit_discount().times(self.quantity)
    }
}
