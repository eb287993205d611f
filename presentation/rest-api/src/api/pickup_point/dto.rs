use poem_openapi::Object;

use business::domain::pickup_point::model::PickupPoint;

#[derive(Debug, Clone, Object)]
pub struct PickupPointResponse {
    pub id: String,
    /// Carrier operating the point, e.g. "InPost"
    pub provider: String,
    pub address: String,
    /// Distance as displayed to the shopper
    pub distance: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<PickupPoint> for PickupPointResponse {
    fn from(point: PickupPoint) -> Self {
        Self {
            id: point.id,
            provider: point.provider,
            address: point.address,
            distance: point.distance,
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SelectPickupPointRequest {
    pub pickup_point_id: String,
}
