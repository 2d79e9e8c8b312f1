use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateImageRequest {
    #[validate(length(min = 1, max = 255, message = "Url must be 1-255 characters"))]
    pub url: String,

    #[validate(length(max = 255))]
    pub public_id: Option<String>,

    pub plant_id: Option<Uuid>,

    pub post_id: Option<Uuid>,

    pub testimonial_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateImageRequest {
    #[validate(length(min = 1, max = 255, message = "Url must be 1-255 characters"))]
    pub url: Option<String>,

    #[validate(length(max = 255))]
    pub public_id: Option<String>,

    pub plant_id: Option<Uuid>,

    pub post_id: Option<Uuid>,

    pub testimonial_id: Option<Uuid>,
}
