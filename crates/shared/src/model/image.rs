use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A hosted media asset. `public_id` is the media host's opaque handle and is
/// required to delete the remote file again.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Image {
    pub id: Uuid,
    pub url: String,
    pub public_id: Option<String>,
    pub plant_id: Option<Uuid>,
    pub post_id: Option<Uuid>,
    pub testimonial_id: Option<Uuid>,
    pub created_at: Option<NaiveDateTime>,
}
