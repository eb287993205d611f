use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod security;
    pub mod tags;
    pub mod cart {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod favorite {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod health {
        pub mod routes;
    }
    pub mod pickup_point {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod product {
        pub mod catalog_cache;
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}

mod config {
    pub mod app_config;
    pub mod cart_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod server_config;
}

mod setup {
    pub mod dependency_injection;
    pub mod server;
    pub mod session_sweeper;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
///
/// - config/: Application configuration (server, CORS, database, cart)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env();
    tracing::info!(
        delivery_cost = %config.cart.settings.delivery_cost,
        undo_window_ms = config.cart.settings.undo_window.as_millis() as u64,
        session_idle_timeout = ?config.cart.session_idle_timeout,
        "Cart settings loaded"
    );

    // 4. Initialize database and run migrations
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, config.cart).await?;

    // 6. Run server
    Server::run(config.server, config.cors, container).await?;

    Ok(())
}
