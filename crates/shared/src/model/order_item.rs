use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub plant_id: Uuid,
    pub quantity: i32,
    /// Unit price in cents at order time.
    pub price: i64,
    pub created_at: Option<NaiveDateTime>,
}
