use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::pickup_point::model::PickupPoint;
use business::domain::pickup_point::repository::PickupPointRepository;

use super::entity::PickupPointEntity;

pub struct PickupPointRepositoryPostgres {
    pool: PgPool,
}

impl PickupPointRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PickupPointRepository for PickupPointRepositoryPostgres {
    /// Nearest first.
    async fn get_all(&self) -> Result<Vec<PickupPoint>, RepositoryError> {
        let entities = sqlx::query_as::<_, PickupPointEntity>(
            "SELECT id, provider, address, distance, latitude, longitude FROM pickup_points ORDER BY distance_meters, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<PickupPoint, RepositoryError> {
        let entity = sqlx::query_as::<_, PickupPointEntity>(
            "SELECT id, provider, address, distance, latitude, longitude FROM pickup_points WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
