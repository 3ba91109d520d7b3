use crate::{
    abstract_trait::recommendation::repository::RecommendationQueryRepositoryTrait,
    model::recommendation::Recommendation as RecommendationModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct RecommendationQueryRepository {
    db: ConnectionPool,
}

impl RecommendationQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecommendationQueryRepositoryTrait for RecommendationQueryRepository {
    async fn find_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<Vec<RecommendationModel>, RepositoryError> {
        info!("🔍 Fetching recommendations for productId: {}", product_id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query_as::<_, RecommendationModel>(
            r#"
            SELECT
                id,
                product_id,
                recommendation_id,
                author,
                rating,
                content,
                created_at
            FROM recommendations
            WHERE product_id = $1
            ORDER BY recommendation_id ASC
            "#,
        )
        .bind(product_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to fetch recommendations for product {}: {:?}",
                product_id, e
            );
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Found {} recommendations for productId {}",
            rows.len(),
            product_id
        );
        Ok(rows)
    }
}
