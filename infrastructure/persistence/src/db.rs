use sqlx::migrate::{MigrateError, Migrator};
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError(#[source] sqlx::Error),
    #[error("database.migrations_not_found")]
    MigrationsNotFound(String),
    #[error("database.migration_error")]
    MigrationError(#[source] MigrateError),
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default pool limits
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(DatabaseError::ConnectionError)?;

    tracing::info!(
        max_connections = config.max_connections,
        "Postgres pool created"
    );
    Ok(pool)
}

/// Runs the catalog and favorites migrations found in `migrations_path`
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);
    if !path.is_dir() {
        return Err(DatabaseError::MigrationsNotFound(
            migrations_path.to_string(),
        ));
    }

    let migrator = Migrator::new(path)
        .await
        .map_err(DatabaseError::MigrationError)?;
    migrator
        .run(pool)
        .await
        .map_err(DatabaseError::MigrationError)?;

    tracing::info!(path = migrations_path, "Database migrations applied");
    Ok(())
}
