use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::favorite::errors::FavoriteError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for FavoriteError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            FavoriteError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::json("NotFound", "favorite.product_not_found"),
            ),
            FavoriteError::Repository(err) => {
                tracing::error!(error = %err, "Favorite repository failure");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal())
            }
        }
    }
}
