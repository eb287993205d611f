use async_trait::async_trait;

use crate::domain::pickup_point::errors::PickupPointError;
use crate::domain::pickup_point::model::PickupPoint;

#[async_trait]
pub trait GetAllPickupPointsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PickupPoint>, PickupPointError>;
}
