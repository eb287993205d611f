use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::Favorite;
use crate::domain::shared::value_objects::ShopperId;

pub struct GetFavoritesParams {
    pub shopper_id: ShopperId,
}

#[async_trait]
pub trait GetFavoritesUseCase: Send + Sync {
    async fn execute(&self, params: GetFavoritesParams) -> Result<Vec<Favorite>, FavoriteError>;
}
