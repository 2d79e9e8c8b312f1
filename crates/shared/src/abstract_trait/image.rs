use crate::{
    domain::requests::{CreateImageRequest, UpdateImageRequest},
    errors::RepositoryError,
    model::Image,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynImageRepository = Arc<dyn ImageRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ImageRepositoryTrait {
    async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Image>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Image>, RepositoryError>;
    async fn find_by_plant_id(&self, plant_id: Uuid) -> Result<Vec<Image>, RepositoryError>;
    async fn find_by_post_id(&self, post_id: Uuid) -> Result<Vec<Image>, RepositoryError>;
    async fn create(&self, req: &CreateImageRequest) -> Result<Image, RepositoryError>;
    async fn create_many(&self, reqs: &[CreateImageRequest]) -> Result<u64, RepositoryError>;
    async fn update(&self, id: Uuid, req: &UpdateImageRequest) -> Result<Image, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
