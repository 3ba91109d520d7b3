use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecommendationRequest {
    #[schema(example = 1)]
    pub product_id: i32,

    #[schema(example = 1)]
    pub recommendation_id: i32,

    #[validate(length(min = 1, max = 255, message = "Author must be 1 to 255 characters"))]
    #[schema(example = "author-1")]
    pub author: String,

    #[serde(rename = "rate")]
    #[schema(example = 1)]
    pub rating: i32,

    #[schema(example = "content-1")]
    pub content: String,

    #[serde(default)]
    pub service_address: Option<String>,
}

/// `productId` stays a raw string so a missing or non-numeric value can be
/// reported as a type mismatch instead of axum's query rejection.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductIdQuery {
    #[param(value_type = Option<i32>, example = 1)]
    pub product_id: Option<String>,
}
