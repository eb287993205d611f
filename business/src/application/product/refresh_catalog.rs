use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::feed::CatalogFeed;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::refresh_catalog::RefreshCatalogUseCase;

pub struct RefreshCatalogUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub feed: Arc<CatalogFeed>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RefreshCatalogUseCase for RefreshCatalogUseCaseImpl {
    async fn execute(&self) -> Result<usize, ProductError> {
        let products = self.repository.get_all().await.inspect_err(|e| {
            self.logger
                .error(&format!("Catalog refresh failed: {}", e));
        })?;

        self.feed.publish(&products);
        self.logger.info(&format!(
            "Catalog refreshed: {} products sent to {} listeners",
            products.len(),
            self.feed.listener_count()
        ));
        Ok(products.len())
    }
}
