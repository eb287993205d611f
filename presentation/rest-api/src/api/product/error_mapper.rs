use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::json("ValidationError", "product.name_empty"),
            ),
            ProductError::InvalidValue(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::json("ValidationError", &err.to_string()),
            ),
            ProductError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::json("NotFound", "product.not_found"),
            ),
            ProductError::Repository(err) => {
                tracing::error!(error = %err, "Product repository failure");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal())
            }
        }
    }
}
