use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Persisted product row. `id` is assigned by the store; `product_id` is the
/// externally supplied identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub product_id: i32,
    pub name: String,
    pub weight: i32,
    pub created_at: Option<NaiveDateTime>,
}
