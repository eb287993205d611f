use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ShopperId;

use super::model::Favorite;

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Newest first.
    async fn get_all(&self, shopper_id: &ShopperId) -> Result<Vec<Favorite>, RepositoryError>;
    async fn contains(
        &self,
        shopper_id: &ShopperId,
        product_id: Uuid,
    ) -> Result<bool, RepositoryError>;
    async fn save(&self, favorite: &Favorite) -> Result<(), RepositoryError>;
    async fn delete(&self, shopper_id: &ShopperId, product_id: Uuid)
    -> Result<(), RepositoryError>;
}
