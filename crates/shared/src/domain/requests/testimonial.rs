use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateTestimonialRequest {
    #[validate(length(min = 1, max = 255, message = "Customer name must be 1-255 characters"))]
    pub customer_name: String,

    #[validate(length(max = 255))]
    pub customer_title: Option<String>,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateTestimonialRequest {
    #[validate(length(min = 1, max = 255, message = "Customer name must be 1-255 characters"))]
    pub customer_name: Option<String>,

    #[validate(length(max = 255))]
    pub customer_title: Option<String>,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: Option<String>,
}
