use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[schema(example = 1)]
    pub product_id: i32,

    #[validate(length(min = 1, max = 255, message = "Name must be 1 to 255 characters"))]
    #[schema(example = "name-1")]
    pub name: String,

    #[schema(example = 1)]
    pub weight: i32,

    /// Accepted for symmetry with the response body; never persisted.
    #[serde(default)]
    pub service_address: Option<String>,
}
