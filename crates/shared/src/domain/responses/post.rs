use crate::domain::responses::UserResponse;
use crate::model::{Image, Post};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct PostDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: Option<String>,
    pub rating: String,
    pub user_id: Uuid,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub images: Vec<Image>,
    pub author: Option<UserResponse>,
}

impl PostDetailResponse {
    pub fn new(post: Post, images: Vec<Image>, author: Option<UserResponse>) -> Self {
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            content: post.content,
            rating: post.rating,
            user_id: post.user_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
            images,
            author,
        }
    }
}
