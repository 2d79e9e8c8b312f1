use crate::{
    domain::requests::{NewPost, UpdatePostRequest},
    errors::RepositoryError,
    model::Post,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynPostRepository = Arc<dyn PostRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PostRepositoryTrait {
    async fn find_all(
        &self,
        limit: Option<i64>,
        rating: Option<&str>,
    ) -> Result<Vec<Post>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepositoryError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepositoryError>;
    async fn create(&self, post: &NewPost) -> Result<Post, RepositoryError>;
    async fn create_many(&self, posts: &[NewPost]) -> Result<u64, RepositoryError>;
    async fn update(&self, id: Uuid, req: &UpdatePostRequest) -> Result<Post, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
