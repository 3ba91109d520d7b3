use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One recommendation row; `(product_id, recommendation_id)` is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Recommendation {
    pub id: i64,
    pub product_id: i32,
    pub recommendation_id: i32,
    pub author: String,
    pub rating: i32,
    pub content: String,
    pub created_at: Option<NaiveDateTime>,
}
