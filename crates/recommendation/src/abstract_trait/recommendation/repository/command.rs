use crate::{
    domain::requests::recommendation::CreateRecommendationRequest,
    model::recommendation::Recommendation as RecommendationModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynRecommendationCommandRepository =
    Arc<dyn RecommendationCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RecommendationCommandRepositoryTrait {
    async fn create_recommendation(
        &self,
        req: &CreateRecommendationRequest,
    ) -> Result<RecommendationModel, RepositoryError>;
    /// Removes every recommendation of the product; none stored is fine.
    async fn delete_by_product_id(&self, product_id: i32) -> Result<(), RepositoryError>;
    async fn delete_all(&self) -> Result<(), RepositoryError>;
}
