use crate::model::recommendation::Recommendation as RecommendationModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynRecommendationQueryRepository =
    Arc<dyn RecommendationQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RecommendationQueryRepositoryTrait {
    /// Ordered by recommendation id; empty when the product has none.
    async fn find_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<Vec<RecommendationModel>, RepositoryError>;
}
