use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::application::cart::registry::CartSessionRegistry;

use crate::api::product::catalog_cache::CatalogCache;
use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Products in the cached catalog
    pub catalog_products: u64,
    /// Carts held in memory
    pub open_carts: u64,
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    catalog: Arc<CatalogCache>,
    sessions: Arc<CartSessionRegistry>,
}

impl Api {
    pub fn new(catalog: Arc<CatalogCache>, sessions: Arc<CartSessionRegistry>) -> Self {
        Self { catalog, sessions }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service together with the size of
    /// the cached catalog and the number of carts held in memory.
    /// This endpoint is public and does not require a shopper header.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            catalog_products: self.catalog.len() as u64,
            open_carts: self.sessions.len() as u64,
        })
    }
}
