use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::CreateProductRequest, model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        info!("➕ Creating product with productId: {}", req.product_id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (product_id, name, weight, created_at)
            VALUES ($1, $2, $3, CURRENT_TIMESTAMP)
            RETURNING id, product_id, name, weight, created_at
            "#,
        )
        .bind(req.product_id)
        .bind(&req.name)
        .bind(req.weight)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            let err = RepositoryError::from(e);
            error!("❌ Failed to create product {}: {}", req.product_id, err);
            err
        })?;

        info!("✅ Product stored with internal id {}", product.id);
        Ok(product)
    }

    async fn delete_by_product_id(&self, product_id: i32) -> Result<(), RepositoryError> {
        info!("🧨 Deleting product with productId: {}", product_id);

        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(product_id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product {}: {:?}", product_id, e);
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            info!("ℹ️ No product stored for productId {}, nothing deleted", product_id);
        }

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        info!("🧹 Deleting all products");

        sqlx::query("DELETE FROM products")
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete all products: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(())
    }
}
