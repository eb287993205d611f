use serde::{Deserialize, Serialize};

/// Parcel locker or collection point where an order can be picked up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupPoint {
    pub id: String,
    pub provider: String,
    pub address: String,
    /// Distance as shown to the shopper, e.g. "350 m".
    pub distance: String,
    pub latitude: f64,
    pub longitude: f64,
}
