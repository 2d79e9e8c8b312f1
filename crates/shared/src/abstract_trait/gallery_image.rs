use crate::{
    domain::requests::{CreateGalleryImageRequest, UpdateGalleryImageRequest},
    errors::RepositoryError,
    model::GalleryImage,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynGalleryImageRepository = Arc<dyn GalleryImageRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait GalleryImageRepositoryTrait {
    async fn find_all(&self, limit: Option<i64>) -> Result<Vec<GalleryImage>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<GalleryImage>, RepositoryError>;
    async fn create(&self, req: &CreateGalleryImageRequest)
    -> Result<GalleryImage, RepositoryError>;
    async fn create_many(
        &self,
        reqs: &[CreateGalleryImageRequest],
    ) -> Result<u64, RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        req: &UpdateGalleryImageRequest,
    ) -> Result<GalleryImage, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
