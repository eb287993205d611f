use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ProductError;
use crate::domain::shared::value_objects::{Money, Percentage};

/// A sellable product as loaded from the catalog.
///
/// Carts keep their own snapshot, so a product never changes under a line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: Money,
    pub discount: Option<Percentage>,
    pub image_url: Option<String>,
}

pub struct NewProductProps {
    pub name: String,
    pub price: Decimal,
    pub discount_percent: Option<Decimal>,
    pub image_url: Option<String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        let price = Money::new(props.price)?;
        let discount = props.discount_percent.map(Percentage::new).transpose()?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            price,
            discount,
            image_url: props.image_url,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        price: Money,
        discount: Option<Percentage>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            discount,
            image_url,
        }
    }

    /// Amount taken off one unit by the product's own discount.
    pub fn unit_discount(&self) -> Money {
        self.discount
            .map(|discount| self.price.percent(discount))
            .unwrap_or(Money::ZERO)
    }

    /// Unit price after the product's own discount.
    pub fn effective_price(&self) -> Money {
        self.price - self.unit_discount()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::ValueObjectError;
    use rust_decimal_macros::dec;

    fn props(price: Decimal, discount_percent: Option<Decimal>) -> NewProductProps {
        NewProductProps {
            name: "Linen Shirt".to_string(),
            price,
            discount_percent,
            image_url: None,
        }
    }

    #[test]
    fn should_create_product_when_props_valid() {
        let product = Product::new(props(dec!(50), Some(dec!(20)))).unwrap();

        assert_eq!(product.name, "Linen Shirt");
        assert_eq!(product.price.amount(), dec!(50));
        assert_eq!(product.discount.unwrap().value(), dec!(20));
    }

    #[test]
    fn should_reject_when_name_only_whitespace() {
        let mut p = props(dec!(10), None);
        p.name = "   ".to_string();

        let result = Product::new(p);

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[test]
    fn should_reject_negative_price() {
        let result = Product::new(props(dec!(-1), None));

        assert!(matches!(
            result.unwrap_err(),
            ProductError::InvalidValue(ValueObjectError::NegativeAmount)
        ));
    }

    #[test]
    fn should_reject_discount_above_hundred() {
        let result = Product::new(props(dec!(10), Some(dec!(150))));

        assert!(matches!(
            result.unwrap_err(),
            ProductError::InvalidValue(ValueObjectError::PercentageOutOfRange)
        ));
    }

    #[test]
    fn should_compute_effective_price_with_discount() {
        let product = Product::new(props(dec!(50), Some(dec!(20)))).unwrap();

        assert_eq!(product.unit_discount().amount(), dec!(10));
        assert_eq!(product.effective_price().amount(), dec!(40));
    }

    #[test]
    fn should_use_base_price_without_discount() {
        let product = Product::new(props(dec!(75), None)).unwrap();

        assert_eq!(product.unit_discount(), Money::ZERO);
        assert_eq!(product.effective_price().amount(), dec!(75));
    }
}
