use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateGalleryImageRequest {
    pub gallery_id: Uuid,

    #[validate(url(message = "Invalid image url"), length(max = 255))]
    pub image_url: String,

    #[validate(length(max = 255))]
    pub public_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateGalleryImageRequest {
    pub gallery_id: Option<Uuid>,

    #[validate(url(message = "Invalid image url"), length(max = 255))]
    pub image_url: Option<String>,

    #[validate(length(max = 255))]
    pub public_id: Option<String>,
}
