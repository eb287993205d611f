use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn json(name: &str, message: &str) -> Json<ErrorResponse> {
        Json(ErrorResponse {
            name: name.to_string(),
            message: message.to_string(),
        })
    }

    pub fn internal() -> Json<ErrorResponse> {
        Self::json("InternalError", "repository.persistence")
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
