use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::ApiKey;

use business::domain::shared::value_objects::ShopperId;

pub const SHOPPER_HEADER: &str = "X-Shopper-Id";

/// Shopper identification through the `X-Shopper-Id` header.
///
/// This only scopes carts and favorites; it is not authentication.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-Shopper-Id",
    key_in = "header",
    checker = "shopper_checker"
)]
pub struct ShopperHeader(pub ShopperId);

async fn shopper_checker(_req: &Request, api_key: ApiKey) -> Option<ShopperId> {
    match parse_shopper_id(&api_key.key) {
        Some(shopper_id) => Some(shopper_id),
        None => {
            tracing::warn!("Rejected request with blank {SHOPPER_HEADER} header");
            None
        }
    }
}

fn parse_shopper_id(raw: &str) -> Option<ShopperId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.len() > 128 {
        return None;
    }
    Some(ShopperId::new(trimmed))
}
