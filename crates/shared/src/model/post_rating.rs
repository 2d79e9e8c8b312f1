use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PostRating {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub created_at: Option<NaiveDateTime>,
}
