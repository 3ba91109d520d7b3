use crate::{
    abstract_trait::recommendation::repository::RecommendationCommandRepositoryTrait,
    domain::requests::recommendation::CreateRecommendationRequest,
    model::recommendation::Recommendation as RecommendationModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct RecommendationCommandRepository {
    db: ConnectionPool,
}

impl RecommendationCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecommendationCommandRepositoryTrait for RecommendationCommandRepository {
    async fn create_recommendation(
        &self,
        req: &CreateRecommendationRequest,
    ) -> Result<RecommendationModel, RepositoryError> {
        info!(
            "➕ Creating recommendation {} for productId {}",
            req.recommendation_id, req.product_id
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let recommendation = sqlx::query_as::<_, RecommendationModel>(
            r#"
            INSERT INTO recommendations
                (product_id, recommendation_id, author, rating, content, created_at)
            VALUES ($1, $2, $3, $4, $5, CURRENT_TIMESTAMP)
            RETURNING id, product_id, recommendation_id, author, rating, content, created_at
            "#,
        )
        .bind(req.product_id)
        .bind(req.recommendation_id)
        .bind(&req.author)
        .bind(req.rating)
        .bind(&req.content)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            let err = RepositoryError::from(e);
            error!(
                "❌ Failed to create recommendation {}/{}: {}",
                req.product_id, req.recommendation_id, err
            );
            err
        })?;

        Ok(recommendation)
    }

    async fn delete_by_product_id(&self, product_id: i32) -> Result<(), RepositoryError> {
        info!("🧨 Deleting recommendations for productId: {}", product_id);

        let result = sqlx::query("DELETE FROM recommendations WHERE product_id = $1")
            .bind(product_id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!(
                    "❌ Failed to delete recommendations for product {}: {:?}",
                    product_id, e
                );
                RepositoryError::from(e)
            })?;

        info!(
            "✅ Deleted {} recommendations for productId {}",
            result.rows_affected(),
            product_id
        );

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        info!("🧹 Deleting all recommendations");

        sqlx::query("DELETE FROM recommendations")
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete all recommendations: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(())
    }
}
