use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::PickupPoint;

/// Source of candidate pickup points.
#[async_trait]
pub trait PickupPointRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<PickupPoint>, RepositoryError>;
    async fn get_by_id(&self, id: &str) -> Result<PickupPoint, RepositoryError>;
}
