use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::shared::value_objects::ShopperId;

/// A product bookmarked by a shopper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub shopper_id: ShopperId,
    pub product_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(shopper_id: ShopperId, product_id: Uuid) -> Self {
        Self {
            shopper_id,
            product_id,
            created_at: Utc::now(),
        }
    }
}
