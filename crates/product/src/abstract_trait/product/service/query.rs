use crate::domain::response::product::ProductResponse;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    /// Takes the identifier exactly as it arrived on the path.
    async fn find_by_product_id(&self, raw_id: &str) -> Result<ProductResponse, ServiceError>;
}
