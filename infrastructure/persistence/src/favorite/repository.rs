use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::favorite::model::Favorite;
use business::domain::favorite::repository::FavoriteRepository;
use business::domain::shared::value_objects::ShopperId;

use super::entity::FavoriteEntity;

pub struct FavoriteRepositoryPostgres {
    pool: PgPool,
}

impl FavoriteRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryPostgres {
    async fn get_all(&self, shopper_id: &ShopperId) -> Result<Vec<Favorite>, RepositoryError> {
        let entities = sqlx::query_as::<_, FavoriteEntity>(
            "SELECT shopper_id, product_id, created_at FROM favorites WHERE shopper_id = $1 ORDER BY created_at DESC",
        )
        .bind(shopper_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn contains(
        &self,
        shopper_id: &ShopperId,
        product_id: Uuid,
    ) -> Result<bool, RepositoryError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM favorites WHERE shopper_id = $1 AND product_id = $2)",
        )
        .bind(shopper_id.as_str())
        .bind(product_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(exists)
    }

    async fn save(&self, favorite: &Favorite) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO favorites (shopper_id, product_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (shopper_id, product_id) DO NOTHING"#,
        )
        .bind(favorite.shopper_id.as_str())
        .bind(favorite.product_id)
        .bind(favorite.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(
        &self,
        shopper_id: &ShopperId,
        product_id: Uuid,
    ) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM favorites WHERE shopper_id = $1 AND product_id = $2")
            .bind(shopper_id.as_str())
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
