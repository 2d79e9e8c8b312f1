use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Total in cents.
    pub total_amount: i64,
    /// One of `pending`, `processing`, `shipped`, `delivered`, `cancelled`.
    pub status: String,
    pub shipping_address: Option<String>,
    pub billing_address: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
