use crate::{
    abstract_trait::DynGalleryRepository,
    domain::requests::{CreateGalleryRequest, UpdateGalleryRequest},
    errors::{RepositoryError, ServiceError},
    model::Gallery,
};
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct GalleryService {
    galleries: DynGalleryRepository,
}

impl GalleryService {
    pub fn new(galleries: DynGalleryRepository) -> Self {
        Self { galleries }
    }

    pub async fn create(&self, req: &CreateGalleryRequest) -> Result<Gallery, ServiceError> {
        let gallery = self.galleries.create(req).await?;
        info!("✅ Gallery created with id {}", gallery.id);
        Ok(gallery)
    }

    pub async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Gallery>, ServiceError> {
        Ok(self.galleries.find_all(limit).await?)
    }

    pub async fn find_one(&self, id: Uuid) -> Result<Gallery, ServiceError> {
        self.galleries
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        req: &UpdateGalleryRequest,
    ) -> Result<Gallery, ServiceError> {
        if self.galleries.find_by_id(id).await?.is_none() {
            return Err(RepositoryError::NotFound.into());
        }

        Ok(self.galleries.update(id, req).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Gallery, ServiceError> {
        let gallery = self
            .galleries
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        self.galleries.delete(id).await?;

        Ok(gallery)
    }

    pub async fn bulk_create(&self, reqs: &[CreateGalleryRequest]) -> Result<u64, ServiceError> {
        Ok(self.galleries.create_many(reqs).await?)
    }
}
