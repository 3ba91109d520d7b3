use crate::domain::{
    requests::product::CreateProductRequest, response::product::ProductResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    async fn delete_product(&self, product_id: i32) -> Result<(), ServiceError>;
}
