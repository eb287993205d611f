use sqlx::FromRow;

use business::domain::pickup_point::model::PickupPoint;

#[derive(Debug, FromRow)]
pub struct PickupPointEntity {
    pub id: String,
    pub provider: String,
    pub address: String,
    pub distance: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl PickupPointEntity {
    pub fn into_domain(self) -> PickupPoint {
        PickupPoint {
            id: self.id,
            provider: self.provider,
            address: self.address,
            distance: self.distance,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
