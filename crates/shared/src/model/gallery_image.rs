use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct GalleryImage {
    pub id: Uuid,
    pub gallery_id: Uuid,
    pub image_url: String,
    pub public_id: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}
