use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::registry::CartSessionRegistry;
use crate::domain::cart::model::CartLineItem;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub sessions: Arc<CartSessionRegistry>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartLineItem, ProductError> {
        self.logger.info(&format!(
            "Adding product {} to cart of {}",
            params.product_id, params.shopper_id
        ));

        let product = self
            .repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let session = self.sessions.get_or_create(&params.shopper_id);
        Ok(session.add_item(product, params.attributes))
    }
}
