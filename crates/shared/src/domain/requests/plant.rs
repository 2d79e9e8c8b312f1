use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreatePlantRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i64,

    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: i32,

    pub category_id: Option<Uuid>,

    #[validate(length(max = 255))]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdatePlantRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: Option<i64>,

    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: Option<i32>,

    pub category_id: Option<Uuid>,

    #[validate(length(max = 255))]
    pub image_url: Option<String>,
}

/// A plant row ready for insertion: the validated request plus the slug the
/// service minted for it.
#[derive(Debug, Clone)]
pub struct NewPlant {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: i64,
    pub stock: i32,
    pub category_id: Option<Uuid>,
    pub image_url: Option<String>,
}

impl NewPlant {
    pub fn from_request(req: &CreatePlantRequest, slug: String) -> Self {
        Self {
            name: req.name.clone(),
            slug,
            description: req.description.clone(),
            price: req.price,
            stock: req.stock,
            category_id: req.category_id,
            image_url: req.image_url.clone(),
        }
    }
}
