use crate::domain::{
    requests::recommendation::CreateRecommendationRequest,
    response::recommendation::RecommendationResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynRecommendationCommandService =
    Arc<dyn RecommendationCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait RecommendationCommandServiceTrait {
    async fn create_recommendation(
        &self,
        req: &CreateRecommendationRequest,
    ) -> Result<RecommendationResponse, ServiceError>;
    async fn delete_recommendations(&self, product_id: i32) -> Result<(), ServiceError>;
}
