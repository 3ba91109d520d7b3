use crate::model::product::Product as ProductModel;
use serde::{Deserialize, Serialize};
use shared::utils::ServiceAddress;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    #[schema(example = 1)]
    pub product_id: i32,
    #[schema(example = "name-1")]
    pub name: String,
    #[schema(example = 1)]
    pub weight: i32,
    #[schema(example = "product-1:7001")]
    pub service_address: String,
}

impl ProductResponse {
    pub fn from_model(value: ProductModel, service_address: &ServiceAddress) -> Self {
        ProductResponse {
            product_id: value.product_id,
            name: value.name,
            weight: value.weight,
            service_address: service_address.to_string(),
        }
    }
}
