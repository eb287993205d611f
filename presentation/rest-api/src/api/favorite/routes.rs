use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::favorite::use_cases::get_all::{GetFavoritesParams, GetFavoritesUseCase};
use business::domain::favorite::use_cases::toggle::{ToggleFavoriteParams, ToggleFavoriteUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::favorite::dto::{FavoriteResponse, FavoriteToggleResponse};
use crate::api::security::ShopperHeader;
use crate::api::tags::ApiTags;

pub struct FavoriteApi {
    get_all_use_case: Arc<dyn GetFavoritesUseCase>,
    toggle_use_case: Arc<dyn ToggleFavoriteUseCase>,
}

impl FavoriteApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetFavoritesUseCase>,
        toggle_use_case: Arc<dyn ToggleFavoriteUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            toggle_use_case,
        }
    }
}

/// Favorites of the calling shopper
#[OpenApi]
impl FavoriteApi {
    /// List favorites, newest first
    #[oai(path = "/favorites", method = "get", tag = "ApiTags::Favorites")]
    async fn get_favorites(&self, shopper: ShopperHeader) -> GetFavoritesResponse {
        match self
            .get_all_use_case
            .execute(GetFavoritesParams {
                shopper_id: shopper.0,
            })
            .await
        {
            Ok(favorites) => GetFavoritesResponse::Ok(Json(
                favorites.into_iter().map(FavoriteResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetFavoritesResponse::InternalError(json)
            }
        }
    }

    /// Toggle a favorite
    ///
    /// Adds the product to the favorites, or removes it when it already is one.
    #[oai(
        path = "/favorites/:product_id/toggle",
        method = "post",
        tag = "ApiTags::Favorites"
    )]
    async fn toggle_favorite(
        &self,
        shopper: ShopperHeader,
        product_id: Path<String>,
    ) -> ToggleFavoriteResponse {
        let Ok(product_id) = Uuid::parse_str(&product_id.0) else {
            return ToggleFavoriteResponse::BadRequest(ErrorResponse::json(
                "ValidationError",
                "product.invalid_id",
            ));
        };

        match self
            .toggle_use_case
            .execute(ToggleFavoriteParams {
                shopper_id: shopper.0,
                product_id,
            })
            .await
        {
            Ok(toggle) => ToggleFavoriteResponse::Ok(Json(toggle.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ToggleFavoriteResponse::NotFound(json),
                    _ => ToggleFavoriteResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetFavoritesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<FavoriteResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ToggleFavoriteResponse {
    #[oai(status = 200)]
    Ok(Json<FavoriteToggleResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
