use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::pickup_point::use_cases::get_all::GetAllPickupPointsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::pickup_point::dto::PickupPointResponse;
use crate::api::tags::ApiTags;

pub struct PickupPointApi {
    get_all_use_case: Arc<dyn GetAllPickupPointsUseCase>,
}

impl PickupPointApi {
    pub fn new(get_all_use_case: Arc<dyn GetAllPickupPointsUseCase>) -> Self {
        Self { get_all_use_case }
    }
}

#[OpenApi]
impl PickupPointApi {
    /// List pickup points
    ///
    /// Candidate parcel lockers, nearest first. Selecting one makes delivery
    /// free (see `PUT /cart/pickup-point`).
    #[oai(path = "/pickup-points", method = "get", tag = "ApiTags::PickupPoints")]
    async fn get_all_pickup_points(&self) -> GetAllPickupPointsResponse {
        match self.get_all_use_case.execute().await {
            Ok(points) => GetAllPickupPointsResponse::Ok(Json(
                points.into_iter().map(PickupPointResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllPickupPointsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllPickupPointsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<PickupPointResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
