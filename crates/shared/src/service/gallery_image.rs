use crate::{
    abstract_trait::{DynGalleryImageRepository, DynGalleryRepository},
    domain::requests::{
        CreateGalleryImageRequest, CreateGalleryRequest, UpdateGalleryImageRequest,
    },
    errors::{RepositoryError, ServiceError},
    media::UploadedAsset,
    model::GalleryImage,
};
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct GalleryImageService {
    gallery_images: DynGalleryImageRepository,
    galleries: DynGalleryRepository,
}

impl GalleryImageService {
    pub fn new(
        gallery_images: DynGalleryImageRepository,
        galleries: DynGalleryRepository,
    ) -> Self {
        Self {
            gallery_images,
            galleries,
        }
    }

    pub async fn create(
        &self,
        req: &CreateGalleryImageRequest,
    ) -> Result<GalleryImage, ServiceError> {
        self.ensure_gallery_exists(req.gallery_id).await?;

        let image = self.gallery_images.create(req).await?;
        info!("✅ Gallery image created with id {}", image.id);
        Ok(image)
    }

    pub async fn find_all(&self, limit: Option<i64>) -> Result<Vec<GalleryImage>, ServiceError> {
        Ok(self.gallery_images.find_all(limit).await?)
    }

    pub async fn find_one(&self, id: Uuid) -> Result<GalleryImage, ServiceError> {
        self.gallery_images
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        req: &UpdateGalleryImageRequest,
    ) -> Result<GalleryImage, ServiceError> {
        if self.gallery_images.find_by_id(id).await?.is_none() {
            return Err(RepositoryError::NotFound.into());
        }

        if let Some(gallery_id) = req.gallery_id {
            self.ensure_gallery_exists(gallery_id).await?;
        }

        Ok(self.gallery_images.update(id, req).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<GalleryImage, ServiceError> {
        let image = self
            .gallery_images
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        self.gallery_images.delete(id).await?;

        Ok(image)
    }

    pub async fn bulk_create(
        &self,
        reqs: &[CreateGalleryImageRequest],
    ) -> Result<u64, ServiceError> {
        Ok(self.gallery_images.create_many(reqs).await?)
    }

    /// Attach already-uploaded assets to the first gallery, creating a
    /// default one when none exists yet.
    pub async fn attach_uploads(
        &self,
        assets: &[UploadedAsset],
    ) -> Result<Vec<CreateGalleryImageRequest>, ServiceError> {
        let gallery = match self.galleries.find_first().await? {
            Some(gallery) => gallery,
            None => {
                info!("no gallery yet; creating the default one");
                self.galleries
                    .create(&CreateGalleryRequest {
                        title: "Default Gallery".into(),
                        description: Some("Automatically created gallery for uploads.".into()),
                    })
                    .await?
            }
        };

        let records: Vec<CreateGalleryImageRequest> = assets
            .iter()
            .map(|asset| CreateGalleryImageRequest {
                gallery_id: gallery.id,
                image_url: asset.url.clone(),
                public_id: Some(asset.public_id.clone()),
            })
            .collect();

        self.gallery_images.create_many(&records).await?;

        info!(
            "✅ Stored {} uploaded images in gallery {}",
            records.len(),
            gallery.id
        );

        Ok(records)
    }

    async fn ensure_gallery_exists(&self, gallery_id: Uuid) -> Result<(), ServiceError> {
        if self.galleries.find_by_id(gallery_id).await?.is_none() {
            return Err(RepositoryError::ForeignKeyViolation(format!(
                "gallery {gallery_id} does not exist"
            ))
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::{GalleryImageRepositoryTrait, GalleryRepositoryTrait};
    use crate::domain::requests::UpdateGalleryRequest;
    use crate::model::Gallery;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryGalleryRepository {
        galleries: Mutex<Vec<Gallery>>,
    }

    #[async_trait]
    impl GalleryRepositoryTrait for InMemoryGalleryRepository {
        async fn find_all(&self, _limit: Option<i64>) -> Result<Vec<Gallery>, RepositoryError> {
            Ok(self.galleries.lock().unwrap().clone())
        }

        async fn find_first(&self) -> Result<Option<Gallery>, RepositoryError> {
            Ok(self.galleries.lock().unwrap().first().cloned())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Gallery>, RepositoryError> {
            Ok(self
                .galleries
                .lock()
                .unwrap()
                .iter()
                .find(|g| g.id == id)
                .cloned())
        }

        async fn create(&self, req: &CreateGalleryRequest) -> Result<Gallery, RepositoryError> {
            let gallery = Gallery {
                id: Uuid::new_v4(),
                title: req.title.clone(),
                description: req.description.clone(),
                created_at: None,
            };
            self.galleries.lock().unwrap().push(gallery.clone());
            Ok(gallery)
        }

        async fn create_many(
            &self,
            reqs: &[CreateGalleryRequest],
        ) -> Result<u64, RepositoryError> {
            for req in reqs {
                self.create(req).await?;
            }
            Ok(reqs.len() as u64)
        }

        async fn update(
            &self,
            _id: Uuid,
            _req: &UpdateGalleryRequest,
        ) -> Result<Gallery, RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
            self.galleries.lock().unwrap().retain(|g| g.id != id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct InMemoryGalleryImageRepository {
        images: Mutex<Vec<GalleryImage>>,
    }

    #[async_trait]
    impl GalleryImageRepositoryTrait for InMemoryGalleryImageRepository {
        async fn find_all(
            &self,
            _limit: Option<i64>,
        ) -> Result<Vec<GalleryImage>, RepositoryError> {
            Ok(self.images.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<GalleryImage>, RepositoryError> {
            Ok(self
                .images
                .lock()
                .unwrap()
                .iter()
                .find(|i| i.id == id)
                .cloned())
        }

        async fn create(
            &self,
            req: &CreateGalleryImageRequest,
        ) -> Result<GalleryImage, RepositoryError> {
            let image = GalleryImage {
                id: Uuid::new_v4(),
                gallery_id: req.gallery_id,
                image_url: req.image_url.clone(),
                public_id: req.public_id.clone(),
                created_at: None,
            };
            self.images.lock().unwrap().push(image.clone());
            Ok(image)
        }

        async fn create_many(
            &self,
            reqs: &[CreateGalleryImageRequest],
        ) -> Result<u64, RepositoryError> {
            for req in reqs {
                self.create(req).await?;
            }
            Ok(reqs.len() as u64)
        }

        async fn update(
            &self,
            _id: Uuid,
            _req: &UpdateGalleryImageRequest,
        ) -> Result<GalleryImage, RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
            self.images.lock().unwrap().retain(|i| i.id != id);
            Ok(())
        }
    }

    fn service() -> (
        GalleryImageService,
        Arc<InMemoryGalleryRepository>,
        Arc<InMemoryGalleryImageRepository>,
    ) {
        let galleries = Arc::new(InMemoryGalleryRepository::default());
        let images = Arc::new(InMemoryGalleryImageRepository::default());
        (
            GalleryImageService::new(images.clone(), galleries.clone()),
            galleries,
            images,
        )
    }

    #[tokio::test]
    async fn test_create_with_unknown_gallery_is_rejected() {
        let (service, _, images) = service();

        let err = service
            .create(&CreateGalleryImageRequest {
                gallery_id: Uuid::new_v4(),
                image_url: "https://media.example.com/a.jpg".into(),
                public_id: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::ForeignKeyViolation(_))
        ));
        assert!(images.images.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_attach_uploads_creates_default_gallery_when_empty() {
        let (service, galleries, images) = service();

        let assets = vec![
            UploadedAsset {
                url: "https://media.example.com/a.jpg".into(),
                public_id: "gallery/a".into(),
            },
            UploadedAsset {
                url: "https://media.example.com/b.jpg".into(),
                public_id: "gallery/b".into(),
            },
        ];

        let records = service.attach_uploads(&assets).await.unwrap();

        assert_eq!(records.len(), 2);
        let galleries = galleries.galleries.lock().unwrap();
        assert_eq!(galleries.len(), 1);
        assert_eq!(galleries[0].title, "Default Gallery");
        assert_eq!(images.images.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_attach_uploads_reuses_existing_gallery() {
        let (service, galleries, _) = service();
        let existing = galleries
            .create(&CreateGalleryRequest {
                title: "Spring".into(),
                description: None,
            })
            .await
            .unwrap();

        let records = service
            .attach_uploads(&[UploadedAsset {
                url: "https://media.example.com/c.jpg".into(),
                public_id: "gallery/c".into(),
            }])
            .await
            .unwrap();

        assert_eq!(records[0].gallery_id, existing.id);
        assert_eq!(galleries.galleries.lock().unwrap().len(), 1);
    }
}
