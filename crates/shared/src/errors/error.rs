use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response: the requested path and a readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "/product/13")]
    pub path: String,
    #[schema(example = "No product found for productID:13")]
    pub message: String,
}
