use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        info!("🆔 Fetching product by productId: {}", product_id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT
                id,
                product_id,
                name,
                weight,
                created_at
            FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product {}: {:?}", product_id, e);
            RepositoryError::from(e)
        })?;

        Ok(result)
    }
}
