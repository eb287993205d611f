use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::Favorite;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::toggle::{
    FavoriteToggle, ToggleFavoriteParams, ToggleFavoriteUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct ToggleFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleFavoriteUseCase for ToggleFavoriteUseCaseImpl {
    async fn execute(&self, params: ToggleFavoriteParams) -> Result<FavoriteToggle, FavoriteError> {
        self.product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => FavoriteError::ProductNotFound,
                other => FavoriteError::Repository(other),
            })?;

        let is_favorite = if self
            .repository
            .contains(&params.shopper_id, params.product_id)
            .await?
        {
            self.repository
                .delete(&params.shopper_id, params.product_id)
                .await?;
            false
        } else {
            self.repository
                .save(&Favorite::new(params.shopper_id.clone(), params.product_id))
                .await?;
            true
        };

        self.logger.info(&format!(
            "Favorite {} for {}: {}",
            params.product_id, params.shopper_id, is_favorite
        ));
        Ok(FavoriteToggle {
            product_id: params.product_id,
            is_favorite,
        })
    }
}
