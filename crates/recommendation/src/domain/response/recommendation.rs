use crate::model::recommendation::Recommendation as RecommendationModel;
use serde::{Deserialize, Serialize};
use shared::utils::ServiceAddress;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    #[schema(example = 1)]
    pub product_id: i32,
    #[schema(example = 1)]
    pub recommendation_id: i32,
    #[schema(example = "author-1")]
    pub author: String,
    #[serde(rename = "rate")]
    #[schema(example = 1)]
    pub rating: i32,
    #[schema(example = "content-1")]
    pub content: String,
    #[schema(example = "recommendation-1:7002")]
    pub service_address: String,
}

impl RecommendationResponse {
    pub fn from_model(value: RecommendationModel, service_address: &ServiceAddress) -> Self {
        RecommendationResponse {
            product_id: value.product_id,
            recommendation_id: value.recommendation_id,
            author: value.author,
            rating: value.rating,
            content: value.content,
            service_address: service_address.to_string(),
        }
    }
}
