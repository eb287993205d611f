use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::favorite::model::Favorite;
use business::domain::favorite::use_cases::toggle::FavoriteToggle;

#[derive(Debug, Clone, Object)]
pub struct FavoriteResponse {
    pub product_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self {
            product_id: favorite.product_id.to_string(),
            created_at: favorite.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct FavoriteToggleResponse {
    pub product_id: String,
    /// Whether the product is a favorite after the toggle
    pub is_favorite: bool,
}

impl From<FavoriteToggle> for FavoriteToggleResponse {
    fn from(toggle: FavoriteToggle) -> Self {
        Self {
            product_id: toggle.product_id.to_string(),
            is_favorite: toggle.is_favorite,
        }
    }
}
