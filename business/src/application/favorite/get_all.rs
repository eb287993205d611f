use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::Favorite;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::get_all::{GetFavoritesParams, GetFavoritesUseCase};
use crate::domain::logger::Logger;

pub struct GetFavoritesUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFavoritesUseCase for GetFavoritesUseCaseImpl {
    async fn execute(&self, params: GetFavoritesParams) -> Result<Vec<Favorite>, FavoriteError> {
        self.logger
            .info(&format!("Fetching favorites of {}", params.shopper_id));
        let favorites = self.repository.get_all(&params.shopper_id).await?;
        Ok(favorites)
    }
}
