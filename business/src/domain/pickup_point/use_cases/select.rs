use async_trait::async_trait;

use crate::domain::pickup_point::errors::PickupPointError;
use crate::domain::pickup_point::model::PickupPoint;
use crate::domain::shared::value_objects::ShopperId;

pub struct SelectPickupPointParams {
    pub shopper_id: ShopperId,
    pub pickup_point_id: String,
}

/// Looks up a pickup point and selects it on the shopper's cart.
#[async_trait]
pub trait SelectPickupPointUseCase: Send + Sync {
    async fn execute(&self, params: SelectPickupPointParams)
    -> Result<PickupPoint, PickupPointError>;
}
