use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::pickup_point::errors::PickupPointError;
use crate::domain::pickup_point::model::PickupPoint;
use crate::domain::pickup_point::repository::PickupPointRepository;
use crate::domain::pickup_point::use_cases::get_all::GetAllPickupPointsUseCase;

pub struct GetAllPickupPointsUseCaseImpl {
    pub repository: Arc<dyn PickupPointRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllPickupPointsUseCase for GetAllPickupPointsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<PickupPoint>, PickupPointError> {
        let points = self.repository.get_all().await?;
        self.logger
            .info(&format!("Found {} pickup points", points.len()));
        Ok(points)
    }
}
