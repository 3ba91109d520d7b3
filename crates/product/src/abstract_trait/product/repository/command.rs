use crate::{
    domain::requests::product::CreateProductRequest, model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    /// Fails with `RepositoryError::AlreadyExists` when the product id is taken.
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    /// Removing an id that is not stored is not an error.
    async fn delete_by_product_id(&self, product_id: i32) -> Result<(), RepositoryError>;
    async fn delete_all(&self) -> Result<(), RepositoryError>;
}
