use crate::{
    abstract_trait::DynImageRepository,
    domain::requests::{CreateImageRequest, UpdateImageRequest},
    errors::{RepositoryError, ServiceError},
    model::Image,
};
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct ImageService {
    images: DynImageRepository,
}

impl ImageService {
    pub fn new(images: DynImageRepository) -> Self {
        Self { images }
    }

    pub async fn create(&self, req: &CreateImageRequest) -> Result<Image, ServiceError> {
        let image = self.images.create(req).await?;
        info!("✅ Image record created with id {}", image.id);
        Ok(image)
    }

    pub async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Image>, ServiceError> {
        Ok(self.images.find_all(limit).await?)
    }

    pub async fn find_one(&self, id: Uuid) -> Result<Image, ServiceError> {
        self.images
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound.into())
    }

    pub async fn update(&self, id: Uuid, req: &UpdateImageRequest) -> Result<Image, ServiceError> {
        if self.images.find_by_id(id).await?.is_none() {
            return Err(RepositoryError::NotFound.into());
        }

        Ok(self.images.update(id, req).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Image, ServiceError> {
        let image = self
            .images
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        self.images.delete(id).await?;

        Ok(image)
    }

    pub async fn bulk_create(&self, reqs: &[CreateImageRequest]) -> Result<u64, ServiceError> {
        Ok(self.images.create_many(reqs).await?)
    }
}
