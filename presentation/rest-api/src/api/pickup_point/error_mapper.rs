use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::pickup_point::errors::PickupPointError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for PickupPointError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            PickupPointError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::json("NotFound", "pickup_point.not_found"),
            ),
            PickupPointError::Repository(err) => {
                tracing::error!(error = %err, "Pickup point repository failure");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal())
            }
        }
    }
}
