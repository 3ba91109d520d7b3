use crate::domain::response::recommendation::RecommendationResponse;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynRecommendationQueryService = Arc<dyn RecommendationQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait RecommendationQueryServiceTrait {
    async fn find_by_product_id(
        &self,
        raw_id: &str,
    ) -> Result<Vec<RecommendationResponse>, ServiceError>;
}
