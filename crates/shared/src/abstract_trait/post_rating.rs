use crate::{
    domain::requests::{CreatePostRatingRequest, UpdatePostRatingRequest},
    errors::RepositoryError,
    model::PostRating,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynPostRatingRepository = Arc<dyn PostRatingRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PostRatingRepositoryTrait {
    async fn find_all(&self, limit: Option<i64>) -> Result<Vec<PostRating>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<PostRating>, RepositoryError>;
    async fn create(&self, req: &CreatePostRatingRequest) -> Result<PostRating, RepositoryError>;
    async fn create_many(
        &self,
        reqs: &[CreatePostRatingRequest],
    ) -> Result<u64, RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        req: &UpdatePostRatingRequest,
    ) -> Result<PostRating, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
