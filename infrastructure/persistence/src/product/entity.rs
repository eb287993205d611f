use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::{Money, Percentage};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub discount_percent: Option<Decimal>,
    pub image_url: Option<String>,
}

impl ProductEntity {
    /// Rows with a negative price or a discount outside 0..=100 are rejected.
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let price = Money::new(self.price).map_err(|_| corrupt(self.id, "price"))?;
        let discount = self
            .discount_percent
            .map(Percentage::new)
            .transpose()
            .map_err(|_| corrupt(self.id, "discount_percent"))?;

        Ok(Product::from_repository(
            self.id,
            self.name,
            price,
            discount,
            self.image_url,
        ))
    }
}

fn corrupt(id: Uuid, column: &str) -> RepositoryError {
    tracing::warn!(product_id = %id, column, "Corrupt product row");
    RepositoryError::CorruptRecord
}
