use crate::model::{Category, Image, Plant};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct PlantDetailResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: i64,
    pub stock: i32,
    pub category_id: Option<Uuid>,
    pub image_url: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub images: Vec<Image>,
    pub category: Option<Category>,
}

impl PlantDetailResponse {
    pub fn new(plant: Plant, images: Vec<Image>, category: Option<Category>) -> Self {
        Self {
            id: plant.id,
            name: plant.name,
            slug: plant.slug,
            description: plant.description,
            price: plant.price,
            stock: plant.stock,
            category_id: plant.category_id,
            image_url: plant.image_url,
            created_at: plant.created_at,
            updated_at: plant.updated_at,
            images,
            category,
        }
    }
}
