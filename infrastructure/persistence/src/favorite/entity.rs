use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::favorite::model::Favorite;
use business::domain::shared::value_objects::ShopperId;

#[derive(Debug, FromRow)]
pub struct FavoriteEntity {
    pub shopper_id: String,
    pub product_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl FavoriteEntity {
    pub fn into_domain(self) -> Favorite {
        Favorite {
            shopper_id: ShopperId::new(self.shopper_id),
            product_id: self.product_id,
            created_at: self.created_at,
        }
    }
}
