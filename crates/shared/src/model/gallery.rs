use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Gallery {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}
