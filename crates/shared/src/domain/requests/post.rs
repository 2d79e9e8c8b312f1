use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

pub const RATE_LEVELS: &[&str] = &["low", "medium", "high"];

pub fn valid_rate_level(value: &str) -> Result<(), ValidationError> {
    if RATE_LEVELS.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("rate_level"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    pub content: Option<String>,

    pub user_id: Uuid,

    #[validate(custom(function = valid_rate_level))]
    pub rating: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    pub content: Option<String>,

    #[validate(custom(function = valid_rate_level))]
    pub rating: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub content: Option<String>,
    pub rating: String,
    pub user_id: Uuid,
}

impl NewPost {
    pub fn from_request(req: &CreatePostRequest, slug: String) -> Self {
        Self {
            title: req.title.clone(),
            slug,
            content: req.content.clone(),
            rating: req.rating.clone().unwrap_or_else(|| "low".to_string()),
            user_id: req.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_level_accepts_known_values() {
        for level in RATE_LEVELS {
            assert!(valid_rate_level(level).is_ok());
        }
    }

    #[test]
    fn test_rate_level_rejects_unknown_values() {
        assert!(valid_rate_level("great").is_err());
        assert!(valid_rate_level("").is_err());
    }
}
