use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::refresh_catalog::RefreshCatalogUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::catalog_cache::CatalogCache;
use crate::api::product::dto::{ProductResponse, RefreshCatalogResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    refresh_catalog_use_case: Arc<dyn RefreshCatalogUseCase>,
    catalog: Arc<CatalogCache>,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        refresh_catalog_use_case: Arc<dyn RefreshCatalogUseCase>,
        catalog: Arc<CatalogCache>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            refresh_catalog_use_case,
            catalog,
        }
    }
}

/// Product catalog API
#[OpenApi]
impl ProductApi {
    /// List the catalog
    ///
    /// Served from the last refreshed catalog when there is one.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        if let Some(products) = self.catalog.products() {
            return GetAllProductsResponse::Ok(Json(
                products.into_iter().map(ProductResponse::from).collect(),
            ));
        }

        match self.get_all_use_case.execute().await {
            Ok(products) => GetAllProductsResponse::Ok(Json(
                products.into_iter().map(ProductResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetProductByIdResponse::BadRequest(ErrorResponse::json(
                "ValidationError",
                "product.invalid_id",
            ));
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Reload the catalog
    ///
    /// Reads every product from the database and publishes the result to the
    /// catalog feed.
    #[oai(path = "/products/refresh", method = "post", tag = "ApiTags::Products")]
    async fn refresh_catalog(&self) -> RefreshCatalogApiResponse {
        match self.refresh_catalog_use_case.execute().await {
            Ok(published) => RefreshCatalogApiResponse::Ok(Json(RefreshCatalogResponse {
                published: published as u64,
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                RefreshCatalogApiResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RefreshCatalogApiResponse {
    #[oai(status = 200)]
    Ok(Json<RefreshCatalogResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
