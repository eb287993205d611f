use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::shared::value_objects::ShopperId;

pub struct ToggleFavoriteParams {
    pub shopper_id: ShopperId,
    pub product_id: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteToggle {
    pub product_id: Uuid,
    pub is_favorite: bool,
}

#[async_trait]
pub trait ToggleFavoriteUseCase: Send + Sync {
    async fn execute(&self, params: ToggleFavoriteParams) -> Result<FavoriteToggle, FavoriteError>;
}
