use crate::{
    domain::requests::{CreateGalleryRequest, UpdateGalleryRequest},
    errors::RepositoryError,
    model::Gallery,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynGalleryRepository = Arc<dyn GalleryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait GalleryRepositoryTrait {
    async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Gallery>, RepositoryError>;
    async fn find_first(&self) -> Result<Option<Gallery>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Gallery>, RepositoryError>;
    async fn create(&self, req: &CreateGalleryRequest) -> Result<Gallery, RepositoryError>;
    async fn create_many(&self, reqs: &[CreateGalleryRequest]) -> Result<u64, RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        req: &UpdateGalleryRequest,
    ) -> Result<Gallery, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
