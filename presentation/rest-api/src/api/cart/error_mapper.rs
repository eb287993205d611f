use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::promo::errors::PromoError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for PromoError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            PromoError::InvalidCode => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::json("PromoError", "promo.invalid_code"),
            ),
        }
    }
}
