use std::sync::Arc;

use logger::TracingLogger;
use persistence::favorite::repository::FavoriteRepositoryPostgres;
use persistence::pickup_point::repository::PickupPointRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use scheduler::TokioScheduler;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::registry::CartSessionRegistry;
use business::application::favorite::get_all::GetFavoritesUseCaseImpl;
use business::application::favorite::toggle::ToggleFavoriteUseCaseImpl;
use business::application::pickup_point::get_all::GetAllPickupPointsUseCaseImpl;
use business::application::pickup_point::select::SelectPickupPointUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::refresh_catalog::RefreshCatalogUseCaseImpl;
use business::domain::product::feed::CatalogFeed;
use business::domain::product::use_cases::refresh_catalog::RefreshCatalogUseCase;

use crate::api::product::catalog_cache::CatalogCache;
use crate::config::cart_config::CartConfig;
use crate::setup::session_sweeper::SessionSweeper;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub pickup_point_api: crate::api::pickup_point::routes::PickupPointApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub favorite_api: crate::api::favorite::routes::FavoriteApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool, cart_config: CartConfig) -> anyhow::Result<Self> {
        let cart_logger = Arc::new(TracingLogger::new("cart"));
        let catalog_logger = Arc::new(TracingLogger::new("catalog"));
        let favorites_logger = Arc::new(TracingLogger::new("favorites"));
        let scheduler = Arc::new(TokioScheduler::from_current()?);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let pickup_point_repository = Arc::new(PickupPointRepositoryPostgres::new(pool.clone()));
        let favorite_repository = Arc::new(FavoriteRepositoryPostgres::new(pool));

        // Catalog feed and its in-memory copy
        let feed = Arc::new(CatalogFeed::new());
        let catalog = Arc::new(CatalogCache::subscribe_to(&feed));

        // Carts
        let sessions = Arc::new(CartSessionRegistry::new(
            cart_config.settings,
            scheduler,
            cart_logger.clone(),
        ));
        SessionSweeper::spawn(sessions.clone(), cart_config.session_idle_timeout);

        // Product use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: catalog_logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: catalog_logger.clone(),
        });
        let refresh_catalog_use_case = Arc::new(RefreshCatalogUseCaseImpl {
            repository: product_repository.clone(),
            feed,
            logger: catalog_logger.clone(),
        });

        // Pickup point use cases
        let get_all_pickup_points_use_case = Arc::new(GetAllPickupPointsUseCaseImpl {
            repository: pickup_point_repository.clone(),
            logger: catalog_logger,
        });
        let select_pickup_point_use_case = Arc::new(SelectPickupPointUseCaseImpl {
            repository: pickup_point_repository,
            sessions: sessions.clone(),
            logger: cart_logger.clone(),
        });

        // Cart use cases
        let add_cart_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: product_repository.clone(),
            sessions: sessions.clone(),
            logger: cart_logger,
        });

        // Favorite use cases
        let get_favorites_use_case = Arc::new(GetFavoritesUseCaseImpl {
            repository: favorite_repository.clone(),
            logger: favorites_logger.clone(),
        });
        let toggle_favorite_use_case = Arc::new(ToggleFavoriteUseCaseImpl {
            repository: favorite_repository,
            product_repository,
            logger: favorites_logger,
        });

        // Warm the catalog; the API falls back to the database if this fails.
        if let Err(err) = refresh_catalog_use_case.execute().await {
            tracing::warn!(error = %err, "Initial catalog load failed");
        }

        let health_api = crate::api::health::routes::Api::new(catalog.clone(), sessions.clone());

        let product_api = crate::api::product::routes::ProductApi::new(
            get_all_use_case,
            get_by_id_use_case,
            refresh_catalog_use_case,
            catalog,
        );

        let pickup_point_api =
            crate::api::pickup_point::routes::PickupPointApi::new(get_all_pickup_points_use_case);

        let cart_api = crate::api::cart::routes::CartApi::new(
            sessions,
            add_cart_item_use_case,
            select_pickup_point_use_case,
        );

        let favorite_api = crate::api::favorite::routes::FavoriteApi::new(
            get_favorites_use_case,
            toggle_favorite_use_case,
        );

        Ok(Self {
            health_api,
            product_api,
            pickup_point_api,
            cart_api,
            favorite_api,
        })
    }
}
