use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::registry::CartSessionRegistry;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::pickup_point::errors::PickupPointError;
use crate::domain::pickup_point::model::PickupPoint;
use crate::domain::pickup_point::repository::PickupPointRepository;
use crate::domain::pickup_point::use_cases::select::{
    SelectPickupPointParams, SelectPickupPointUseCase,
};

pub struct SelectPickupPointUseCaseImpl {
    pub repository: Arc<dyn PickupPointRepository>,
    pub sessions: Arc<CartSessionRegistry>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SelectPickupPointUseCase for SelectPickupPointUseCaseImpl {
    async fn execute(
        &self,
        params: SelectPickupPointParams,
    ) -> Result<PickupPoint, PickupPointError> {
        let point = self
            .repository
            .get_by_id(&params.pickup_point_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PickupPointError::NotFound,
                other => PickupPointError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Shopper {} picked pickup point {}",
            params.shopper_id, point.id
        ));
        self.sessions
            .get_or_create(&params.shopper_id)
            .select_pickup_point(point.clone());
        Ok(point)
    }
}
