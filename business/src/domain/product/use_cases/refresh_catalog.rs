use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

/// Reloads the catalog and publishes it to the catalog feed.
#[async_trait]
pub trait RefreshCatalogUseCase: Send + Sync {
    /// Returns the number of published products.
    async fn execute(&self) -> Result<usize, ProductError>;
}
