use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::application::cart::registry::CartSessionRegistry;
use business::domain::cart::model::{LineItemAttributes, LineItemId};
use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::pickup_point::use_cases::select::{
    SelectPickupPointParams, SelectPickupPointUseCase,
};

use crate::api::cart::dto::{
    AddCartItemRequest, ApplyPromoRequest, CartResponse, ChangeQuantityRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::pickup_point::dto::SelectPickupPointRequest;
use crate::api::security::ShopperHeader;
use crate::api::tags::ApiTags;

pub struct CartApi {
    sessions: Arc<CartSessionRegistry>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    select_pickup_point_use_case: Arc<dyn SelectPickupPointUseCase>,
}

impl CartApi {
    pub fn new(
        sessions: Arc<CartSessionRegistry>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        select_pickup_point_use_case: Arc<dyn SelectPickupPointUseCase>,
    ) -> Self {
        Self {
            sessions,
            add_item_use_case,
            select_pickup_point_use_case,
        }
    }

    /// Renders the shopper's cart without opening a session for them.
    fn cart(&self, shopper: &ShopperHeader) -> CartResponse {
        self.sessions.snapshot(&shopper.0).into()
    }
}

fn parse_item_id(raw: &str) -> Result<LineItemId, Json<ErrorResponse>> {
    Uuid::parse_str(raw)
        .map(LineItemId::from_uuid)
        .map_err(|_| ErrorResponse::json("ValidationError", "cart.invalid_item_id"))
}

/// Shopping cart of the calling shopper
///
/// Every call returns the whole cart so the client can re-render from it.
/// Operations on unknown line items are ignored.
#[OpenApi]
impl CartApi {
    /// Get the cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, shopper: ShopperHeader) -> Json<CartResponse> {
        Json(self.cart(&shopper))
    }

    /// Empty the cart
    ///
    /// Drops every line, the pending removal and the pickup point.
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(&self, shopper: ShopperHeader) -> Json<CartResponse> {
        if let Some(session) = self.sessions.get(&shopper.0) {
            session.clear();
        }
        Json(self.cart(&shopper))
    }

    /// Add a product to the cart
    ///
    /// Every call creates a new line with quantity 1.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(
        &self,
        shopper: ShopperHeader,
        body: Json<AddCartItemRequest>,
    ) -> AddCartItemResponse {
        let Ok(product_id) = Uuid::parse_str(&body.0.product_id) else {
            return AddCartItemResponse::BadRequest(ErrorResponse::json(
                "ValidationError",
                "product.invalid_id",
            ));
        };

        let params = AddCartItemParams {
            shopper_id: shopper.0.clone(),
            product_id,
            attributes: LineItemAttributes {
                size: body.0.size,
                color: body.0.color,
            },
        };

        match self.add_item_use_case.execute(params).await {
            Ok(_) => AddCartItemResponse::Created(Json(self.cart(&shopper))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddCartItemResponse::BadRequest(json),
                    404 => AddCartItemResponse::NotFound(json),
                    _ => AddCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Change the quantity of a line
    #[oai(path = "/cart/items/:id", method = "put", tag = "ApiTags::Cart")]
    async fn change_quantity(
        &self,
        shopper: ShopperHeader,
        id: Path<String>,
        body: Json<ChangeQuantityRequest>,
    ) -> CartMutationResponse {
        let item_id = match parse_item_id(&id.0) {
            Ok(item_id) => item_id,
            Err(json) => return CartMutationResponse::BadRequest(json),
        };

        if let Some(session) = self.sessions.get(&shopper.0) {
            session.change_quantity(item_id, body.0.requested_quantity());
        }
        CartMutationResponse::Ok(Json(self.cart(&shopper)))
    }

    /// Remove a line
    ///
    /// The line is hidden at once and deleted when the undo window ends.
    /// Removing the same line again deletes it immediately.
    #[oai(path = "/cart/items/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, shopper: ShopperHeader, id: Path<String>) -> CartMutationResponse {
        let item_id = match parse_item_id(&id.0) {
            Ok(item_id) => item_id,
            Err(json) => return CartMutationResponse::BadRequest(json),
        };

        if let Some(session) = self.sessions.get(&shopper.0) {
            session.remove_item(item_id);
        }
        CartMutationResponse::Ok(Json(self.cart(&shopper)))
    }

    /// Undo the last removal
    #[oai(path = "/cart/undo", method = "post", tag = "ApiTags::Cart")]
    async fn undo_remove(&self, shopper: ShopperHeader) -> Json<CartResponse> {
        if let Some(session) = self.sessions.get(&shopper.0) {
            session.undo_remove();
        }
        Json(self.cart(&shopper))
    }

    /// Apply a promo code
    ///
    /// A blank code removes the current promo.
    #[oai(path = "/cart/promo", method = "put", tag = "ApiTags::Cart")]
    async fn apply_promo(
        &self,
        shopper: ShopperHeader,
        body: Json<ApplyPromoRequest>,
    ) -> ApplyPromoResponse {
        let session = self.sessions.get_or_create(&shopper.0);
        match session.apply_promo(&body.0.code) {
            Ok(_) => ApplyPromoResponse::Ok(Json(session.snapshot().into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ApplyPromoResponse::UnprocessableEntity(json)
            }
        }
    }

    /// Select a pickup point
    ///
    /// Delivery becomes free and checkout is unlocked.
    #[oai(path = "/cart/pickup-point", method = "put", tag = "ApiTags::Cart")]
    async fn select_pickup_point(
        &self,
        shopper: ShopperHeader,
        body: Json<SelectPickupPointRequest>,
    ) -> SelectPickupPointResponse {
        match self
            .select_pickup_point_use_case
            .execute(SelectPickupPointParams {
                shopper_id: shopper.0.clone(),
                pickup_point_id: body.0.pickup_point_id,
            })
            .await
        {
            Ok(_) => SelectPickupPointResponse::Ok(Json(self.cart(&shopper))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => SelectPickupPointResponse::NotFound(json),
                    _ => SelectPickupPointResponse::InternalError(json),
                }
            }
        }
    }

    /// Clear the pickup point
    #[oai(path = "/cart/pickup-point", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_pickup_point(&self, shopper: ShopperHeader) -> Json<CartResponse> {
        if let Some(session) = self.sessions.get(&shopper.0) {
            session.clear_pickup_point();
        }
        Json(self.cart(&shopper))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartItemResponse {
    #[oai(status = 201)]
    Created(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ApplyPromoResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SelectPickupPointResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::application::cart::add_item::AddCartItemUseCaseImpl;
    use business::application::pickup_point::select::SelectPickupPointUseCaseImpl;
    use business::domain::cart::settings::CartSettings;
    use business::domain::errors::RepositoryError;
    use business::domain::pickup_point::model::PickupPoint;
    use business::domain::pickup_point::repository::PickupPointRepository;
    use business::domain::product::model::{NewProductProps, Product};
    use business::domain::product::repository::ProductRepository;
    use logger::TracingLogger;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use rust_decimal_macros::dec;
    use scheduler::TokioScheduler;
    use serde_json::{Value, json};

    struct FixedProducts(Vec<Product>);

    #[async_trait]
    impl ProductRepository for FixedProducts {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
            Ok(self.0.clone())
        }

        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
            self.0
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }
    }

    struct FixedPickupPoints(Vec<PickupPoint>);

    #[async_trait]
    impl PickupPointRepository for FixedPickupPoints {
        async fn get_all(&self) -> Result<Vec<PickupPoint>, RepositoryError> {
            Ok(self.0.clone())
        }

        async fn get_by_id(&self, id: &str) -> Result<PickupPoint, RepositoryError> {
            self.0
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }
    }

    fn product(name: &str, price: rust_decimal::Decimal, discount: Option<rust_decimal::Decimal>) -> Product {
        Product::new(NewProductProps {
            name: name.to_string(),
            price,
            discount_percent: discount,
            image_url: None,
        })
        .unwrap()
    }

    struct Fixture {
        client: TestClient<Route>,
        sessions: Arc<CartSessionRegistry>,
        dress: Product,
        bag: Product,
    }

    fn fixture() -> Fixture {
        let dress = product("Summer Dress", dec!(50), Some(dec!(20)));
        let bag = product("Shoulder Bag", dec!(75), None);
        let logger = Arc::new(TracingLogger::new("cart"));
        let sessions = Arc::new(CartSessionRegistry::new(
            CartSettings::default(),
            Arc::new(TokioScheduler::from_current().unwrap()),
            logger.clone(),
        ));
        let products = Arc::new(FixedProducts(vec![dress.clone(), bag.clone()]));
        let points = Arc::new(FixedPickupPoints(vec![PickupPoint {
            id: "KRA01M".to_string(),
            provider: "InPost".to_string(),
            address: "ul. Floriańska 12, Kraków".to_string(),
            distance: "350 m".to_string(),
            latitude: 50.0633,
            longitude: 19.9407,
        }]));

        let api = CartApi::new(
            sessions.clone(),
            Arc::new(AddCartItemUseCaseImpl {
                repository: products,
                sessions: sessions.clone(),
                logger: logger.clone(),
            }),
            Arc::new(SelectPickupPointUseCaseImpl {
                repository: points,
                sessions: sessions.clone(),
                logger,
            }),
        );
        let service = OpenApiService::new(api, "cart", "1.0");

        Fixture {
            client: TestClient::new(Route::new().nest("/", service)),
            sessions,
            dress,
            bag,
        }
    }

    async fn add(fixture: &Fixture, product: &Product) -> Value {
        let response = fixture
            .client
            .post("/cart/items")
            .header("X-Shopper-Id", "shopper-1")
            .body_json(&json!({ "product_id": product.id.to_string() }))
            .send()
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json().await.value().deserialize()
    }

    #[tokio::test]
    async fn should_require_shopper_header() {
        let fixture = fixture();

        let response = fixture.client.get("/cart").send().await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_price_example_cart() {
        let fixture = fixture();
        add(&fixture, &fixture.dress).await;
        let cart = add(&fixture, &fixture.bag).await;

        assert_eq!(cart["items"].as_array().unwrap().len(), 2);
        assert_eq!(cart["summary"]["subtotal"], "115.00");
        assert_eq!(cart["summary"]["discount"], "10.00");
        assert_eq!(cart["summary"]["delivery_cost"], "5.00");
        assert_eq!(cart["summary"]["total"], "120.00");
        assert_eq!(cart["can_checkout"], false);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_product() {
        let fixture = fixture();

        let response = fixture
            .client
            .post("/cart/items")
            .header("X-Shopper-Id", "shopper-1")
            .body_json(&json!({ "product_id": Uuid::new_v4().to_string() }))
            .send()
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_accept_string_quantities() {
        let fixture = fixture();
        let cart = add(&fixture, &fixture.bag).await;
        let item_id = cart["items"][0]["id"].as_str().unwrap().to_string();

        let response = fixture
            .client
            .put(format!("/cart/items/{item_id}"))
            .header("X-Shopper-Id", "shopper-1")
            .body_json(&json!({ "quantity": "3" }))
            .send()
            .await;
        response.assert_status_is_ok();
        let cart: Value = response.json().await.value().deserialize();
        assert_eq!(cart["items"][0]["quantity"], 3);
        assert_eq!(cart["summary"]["subtotal"], "225.00");

        let response = fixture
            .client
            .put(format!("/cart/items/{item_id}"))
            .header("X-Shopper-Id", "shopper-1")
            .body_json(&json!({ "quantity": "many" }))
            .send()
            .await;
        let cart: Value = response.json().await.value().deserialize();
        assert_eq!(cart["items"][0]["quantity"], 1);
    }

    #[tokio::test]
    async fn should_stage_removal_and_undo_it() {
        let fixture = fixture();
        let cart = add(&fixture, &fixture.bag).await;
        let item_id = cart["items"][0]["id"].as_str().unwrap().to_string();

        let response = fixture
            .client
            .delete(format!("/cart/items/{item_id}"))
            .header("X-Shopper-Id", "shopper-1")
            .send()
            .await;
        let cart: Value = response.json().await.value().deserialize();
        assert!(cart["items"].as_array().unwrap().is_empty());
        assert_eq!(cart["pending"]["item"]["id"], item_id.as_str());
        assert_eq!(cart["summary"]["subtotal"], "0.00");

        let response = fixture
            .client
            .post("/cart/undo")
            .header("X-Shopper-Id", "shopper-1")
            .send()
            .await;
        let cart: Value = response.json().await.value().deserialize();
        assert_eq!(cart["items"][0]["id"], item_id.as_str());
        assert!(cart.get("pending").is_none());
    }

    #[tokio::test]
    async fn should_reject_unknown_promo_code() {
        let fixture = fixture();
        add(&fixture, &fixture.bag).await;

        let response = fixture
            .client
            .put("/cart/promo")
            .header("X-Shopper-Id", "shopper-1")
            .body_json(&json!({ "code": "WRONG" }))
            .send()
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let response = fixture
            .client
            .put("/cart/promo")
            .header("X-Shopper-Id", "shopper-1")
            .body_json(&json!({ "code": "promo10" }))
            .send()
            .await;
        response.assert_status_is_ok();
        let cart: Value = response.json().await.value().deserialize();
        assert_eq!(cart["promo"]["status"], "applied");
        assert_eq!(cart["summary"]["total"], "70.00");
    }

    #[tokio::test]
    async fn should_unlock_checkout_with_pickup_point() {
        let fixture = fixture();
        add(&fixture, &fixture.bag).await;

        let response = fixture
            .client
            .put("/cart/pickup-point")
            .header("X-Shopper-Id", "shopper-1")
            .body_json(&json!({ "pickup_point_id": "KRA01M" }))
            .send()
            .await;
        response.assert_status_is_ok();
        let cart: Value = response.json().await.value().deserialize();
        assert_eq!(cart["pickup_point"]["id"], "KRA01M");
        assert_eq!(cart["summary"]["delivery_cost"], "0.00");
        assert_eq!(cart["can_checkout"], true);

        let response = fixture
            .client
            .put("/cart/pickup-point")
            .header("X-Shopper-Id", "shopper-1")
            .body_json(&json!({ "pickup_point_id": "NOPE" }))
            .send()
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_keep_carts_apart_per_shopper() {
        let fixture = fixture();
        add(&fixture, &fixture.bag).await;

        let response = fixture
            .client
            .get("/cart")
            .header("X-Shopper-Id", "shopper-2")
            .send()
            .await;
        let cart: Value = response.json().await.value().deserialize();

        assert!(cart["items"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_not_open_sessions_for_read_only_requests() {
        let fixture = fixture();

        for n in 0..50 {
            let response = fixture
                .client
                .get("/cart")
                .header("X-Shopper-Id", format!("visitor-{n}"))
                .send()
                .await;
            response.assert_status_is_ok();
        }
        let response = fixture
            .client
            .post("/cart/undo")
            .header("X-Shopper-Id", "visitor-0")
            .send()
            .await;
        response.assert_status_is_ok();
        let response = fixture
            .client
            .delete("/cart")
            .header("X-Shopper-Id", "visitor-1")
            .send()
            .await;
        let cart: Value = response.json().await.value().deserialize();

        assert!(fixture.sessions.is_empty());
        assert!(cart["items"].as_array().unwrap().is_empty());
        assert_eq!(cart["summary"]["total"], "5.00");
    }
}
