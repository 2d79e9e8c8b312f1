use crate::{
    abstract_trait::{
        DynCategoryRepository, DynImageRepository, DynMediaHost, DynPlantRepository,
    },
    domain::{
        requests::{CreateImageRequest, CreatePlantRequest, NewPlant, UpdatePlantRequest},
        responses::PlantDetailResponse,
    },
    errors::{RepositoryError, ServiceError},
    media::UploadedAsset,
    model::Plant,
    utils::slugify,
};
use std::collections::HashSet;
use tracing::{info, warn};
use uuid::Uuid;

/// Upper bound on the `-N` suffix probe; the original recursed without one.
const MAX_SLUG_ATTEMPTS: u32 = 100;

#[derive(Clone)]
pub struct PlantService {
    plants: DynPlantRepository,
    images: DynImageRepository,
    categories: DynCategoryRepository,
    media: DynMediaHost,
}

impl PlantService {
    pub fn new(
        plants: DynPlantRepository,
        images: DynImageRepository,
        categories: DynCategoryRepository,
        media: DynMediaHost,
    ) -> Self {
        Self {
            plants,
            images,
            categories,
            media,
        }
    }

    pub async fn create(
        &self,
        req: &CreatePlantRequest,
        uploads: &[UploadedAsset],
    ) -> Result<PlantDetailResponse, ServiceError> {
        info!("🌱 Creating plant: {}", req.name);

        let slug = self.unique_slug(&req.name, &HashSet::new()).await?;
        let plant = self.plants.create(&NewPlant::from_request(req, slug)).await?;

        if !uploads.is_empty() {
            let records: Vec<CreateImageRequest> = uploads
                .iter()
                .map(|asset| CreateImageRequest {
                    url: asset.url.clone(),
                    public_id: Some(asset.public_id.clone()),
                    plant_id: Some(plant.id),
                    post_id: None,
                    testimonial_id: None,
                })
                .collect();
            self.images.create_many(&records).await?;
        }

        info!("✅ Plant created with id {}", plant.id);

        self.detail(plant).await
    }

    pub async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Plant>, ServiceError> {
        Ok(self.plants.find_all(limit).await?)
    }

    pub async fn find_one(&self, id: Uuid) -> Result<PlantDetailResponse, ServiceError> {
        let plant = self
            .plants
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        self.detail(plant).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        req: &UpdatePlantRequest,
    ) -> Result<Plant, ServiceError> {
        if self.plants.find_by_id(id).await?.is_none() {
            return Err(RepositoryError::NotFound.into());
        }

        Ok(self.plants.update(id, req).await?)
    }

    /// Remove the plant row and best-effort delete its hosted images first.
    /// Media-host failures are logged and swallowed; the row goes regardless.
    pub async fn delete(&self, id: Uuid) -> Result<Plant, ServiceError> {
        let plant = self
            .plants
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let images = self.images.find_by_plant_id(id).await?;
        for image in &images {
            if let Some(public_id) = &image.public_id {
                if let Err(err) = self.media.destroy(public_id).await {
                    warn!("failed to delete media asset {public_id}: {err}");
                }
            }
        }

        self.plants.delete(id).await?;

        info!("🗑️ Plant {} deleted ({} images cleaned up)", id, images.len());

        Ok(plant)
    }

    pub async fn bulk_create(&self, reqs: &[CreatePlantRequest]) -> Result<u64, ServiceError> {
        let mut rows = Vec::with_capacity(reqs.len());
        let mut minted = HashSet::new();

        for req in reqs {
            let slug = self.unique_slug(&req.name, &minted).await?;
            minted.insert(slug.clone());
            rows.push(NewPlant::from_request(req, slug));
        }

        Ok(self.plants.create_many(&rows).await?)
    }

    async fn detail(&self, plant: Plant) -> Result<PlantDetailResponse, ServiceError> {
        let images = self.images.find_by_plant_id(plant.id).await?;

        let category = match plant.category_id {
            Some(category_id) => self.categories.find_by_id(category_id).await?,
            None => None,
        };

        Ok(PlantDetailResponse::new(plant, images, category))
    }

    /// Probe `slug`, `slug-1`, `slug-2`, ... against the table (and the
    /// in-batch `taken` set) until a free candidate turns up.
    async fn unique_slug(
        &self,
        name: &str,
        taken: &HashSet<String>,
    ) -> Result<String, ServiceError> {
        let base = slugify(name);
        let mut candidate = base.clone();

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            if !taken.contains(&candidate)
                && self.plants.find_by_slug(&candidate).await?.is_none()
            {
                return Ok(candidate);
            }
            candidate = format!("{base}-{attempt}");
        }

        Err(ServiceError::Internal(format!(
            "no free slug for '{name}' after {MAX_SLUG_ATTEMPTS} attempts"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::{
        CategoryRepositoryTrait, ImageRepositoryTrait, MediaHostTrait, PlantRepositoryTrait,
    };
    use crate::domain::requests::{
        CreateCategoryRequest, UpdateCategoryRequest, UpdateImageRequest,
    };
    use crate::model::{Category, Image};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryPlantRepository {
        plants: Mutex<Vec<Plant>>,
    }

    impl InMemoryPlantRepository {
        fn to_plant(new: &NewPlant) -> Plant {
            Plant {
                id: Uuid::new_v4(),
                name: new.name.clone(),
                slug: new.slug.clone(),
                description: new.description.clone(),
                price: new.price,
                stock: new.stock,
                category_id: new.category_id,
                image_url: new.image_url.clone(),
                created_at: None,
                updated_at: None,
            }
        }
    }

    #[async_trait]
    impl PlantRepositoryTrait for InMemoryPlantRepository {
        async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Plant>, RepositoryError> {
            let plants = self.plants.lock().unwrap();
            let take = limit.map(|l| l as usize).unwrap_or(plants.len());
            Ok(plants.iter().take(take).cloned().collect())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Plant>, RepositoryError> {
            Ok(self
                .plants
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned())
        }

        async fn find_by_slug(&self, slug: &str) -> Result<Option<Plant>, RepositoryError> {
            Ok(self
                .plants
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.slug == slug)
                .cloned())
        }

        async fn create(&self, plant: &NewPlant) -> Result<Plant, RepositoryError> {
            let created = Self::to_plant(plant);
            self.plants.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn create_many(&self, plants: &[NewPlant]) -> Result<u64, RepositoryError> {
            let mut store = self.plants.lock().unwrap();
            let mut inserted = 0;
            for plant in plants {
                if store.iter().any(|p| p.slug == plant.slug) {
                    continue;
                }
                store.push(Self::to_plant(plant));
                inserted += 1;
            }
            Ok(inserted)
        }

        async fn update(
            &self,
            id: Uuid,
            req: &UpdatePlantRequest,
        ) -> Result<Plant, RepositoryError> {
            let mut store = self.plants.lock().unwrap();
            let plant = store
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(RepositoryError::NotFound)?;
            if let Some(name) = &req.name {
                plant.name = name.clone();
            }
            if let Some(price) = req.price {
                plant.price = price;
            }
            Ok(plant.clone())
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
            self.plants.lock().unwrap().retain(|p| p.id != id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct InMemoryImageRepository {
        images: Mutex<Vec<Image>>,
    }

    #[async_trait]
    impl ImageRepositoryTrait for InMemoryImageRepository {
        async fn find_all(&self, _limit: Option<i64>) -> Result<Vec<Image>, RepositoryError> {
            Ok(self.images.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Image>, RepositoryError> {
            Ok(self
                .images
                .lock()
                .unwrap()
                .iter()
                .find(|i| i.id == id)
                .cloned())
        }

        async fn find_by_plant_id(&self, plant_id: Uuid) -> Result<Vec<Image>, RepositoryError> {
            Ok(self
                .images
                .lock()
                .unwrap()
                .iter()
                .filter(|i| i.plant_id == Some(plant_id))
                .cloned()
                .collect())
        }

        async fn find_by_post_id(&self, post_id: Uuid) -> Result<Vec<Image>, RepositoryError> {
            Ok(self
                .images
                .lock()
                .unwrap()
                .iter()
                .filter(|i| i.post_id == Some(post_id))
                .cloned()
                .collect())
        }

        async fn create(&self, req: &CreateImageRequest) -> Result<Image, RepositoryError> {
            let image = Image {
                id: Uuid::new_v4(),
                url: req.url.clone(),
                public_id: req.public_id.clone(),
                plant_id: req.plant_id,
                post_id: req.post_id,
                testimonial_id: req.testimonial_id,
                created_at: None,
            };
            self.images.lock().unwrap().push(image.clone());
            Ok(image)
        }

        async fn create_many(&self, reqs: &[CreateImageRequest]) -> Result<u64, RepositoryError> {
            for req in reqs {
                self.create(req).await?;
            }
            Ok(reqs.len() as u64)
        }

        async fn update(
            &self,
            _id: Uuid,
            _req: &UpdateImageRequest,
        ) -> Result<Image, RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
            self.images.lock().unwrap().retain(|i| i.id != id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct NoCategoryRepository;

    #[async_trait]
    impl CategoryRepositoryTrait for NoCategoryRepository {
        async fn find_all(&self, _limit: Option<i64>) -> Result<Vec<Category>, RepositoryError> {
            Ok(vec![])
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Category>, RepositoryError> {
            Ok(None)
        }

        async fn create(&self, _req: &CreateCategoryRequest) -> Result<Category, RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn create_many(
            &self,
            _reqs: &[CreateCategoryRequest],
        ) -> Result<u64, RepositoryError> {
            Ok(0)
        }

        async fn update(
            &self,
            _id: Uuid,
            _req: &UpdateCategoryRequest,
        ) -> Result<Category, RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn delete(&self, _id: Uuid) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    /// Media host double that records destroyed ids and can be set to fail.
    struct RecordingMediaHost {
        destroyed: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingMediaHost {
        fn new(fail: bool) -> Self {
            Self {
                destroyed: Mutex::new(vec![]),
                fail,
            }
        }
    }

    #[async_trait]
    impl MediaHostTrait for RecordingMediaHost {
        async fn upload(
            &self,
            _bytes: Vec<u8>,
            _folder: &str,
        ) -> Result<UploadedAsset, ServiceError> {
            Ok(UploadedAsset {
                url: "https://media.example.com/x.jpg".into(),
                public_id: "x".into(),
            })
        }

        async fn destroy(&self, public_id: &str) -> Result<(), ServiceError> {
            if self.fail {
                return Err(ServiceError::Upload("boom".into()));
            }
            self.destroyed.lock().unwrap().push(public_id.to_string());
            Ok(())
        }
    }

    fn plant_request(name: &str) -> CreatePlantRequest {
        CreatePlantRequest {
            name: name.into(),
            description: None,
            price: 1999,
            stock: 3,
            category_id: None,
            image_url: None,
        }
    }

    fn service_with(
        media_fails: bool,
    ) -> (
        PlantService,
        Arc<InMemoryPlantRepository>,
        Arc<RecordingMediaHost>,
    ) {
        let plants = Arc::new(InMemoryPlantRepository::default());
        let media = Arc::new(RecordingMediaHost::new(media_fails));
        let service = PlantService::new(
            plants.clone(),
            Arc::new(InMemoryImageRepository::default()),
            Arc::new(NoCategoryRepository),
            media.clone(),
        );
        (service, plants, media)
    }

    #[tokio::test]
    async fn test_slug_is_minted_from_name() {
        let (service, _, _) = service_with(false);

        let created = service.create(&plant_request("Aloe Vera"), &[]).await.unwrap();

        assert_eq!(created.slug, "aloe-vera");
    }

    #[tokio::test]
    async fn test_slug_collision_appends_numeric_suffix() {
        let (service, _, _) = service_with(false);

        service.create(&plant_request("Aloe Vera"), &[]).await.unwrap();
        let second = service.create(&plant_request("Aloe Vera"), &[]).await.unwrap();
        let third = service.create(&plant_request("Aloe Vera"), &[]).await.unwrap();

        assert_eq!(second.slug, "aloe-vera-1");
        assert_eq!(third.slug, "aloe-vera-2");
    }

    #[tokio::test]
    async fn test_find_one_missing_is_not_found() {
        let (service, _, _) = service_with(false);

        let err = service.find_one(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (service, _, _) = service_with(false);

        let err = service.delete(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_survives_media_host_failure() {
        let (service, plants, _) = service_with(true);

        let asset = UploadedAsset {
            url: "https://media.example.com/aloe.jpg".into(),
            public_id: "plants/aloe".into(),
        };
        let created = service
            .create(&plant_request("Aloe Vera"), &[asset])
            .await
            .unwrap();

        // destroy() errors are swallowed; the row still goes away
        service.delete(created.id).await.unwrap();
        assert!(plants.plants.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_hosted_assets() {
        let (service, _, media) = service_with(false);

        let asset = UploadedAsset {
            url: "https://media.example.com/aloe.jpg".into(),
            public_id: "plants/aloe".into(),
        };
        let created = service
            .create(&plant_request("Aloe Vera"), &[asset])
            .await
            .unwrap();

        service.delete(created.id).await.unwrap();

        let destroyed = media.destroyed.lock().unwrap();
        assert_eq!(destroyed.as_slice(), ["plants/aloe"]);
    }

    #[tokio::test]
    async fn test_bulk_create_skips_duplicate_slugs_within_batch() {
        let (service, plants, _) = service_with(false);

        let inserted = service
            .bulk_create(&[plant_request("Aloe Vera"), plant_request("Aloe Vera")])
            .await
            .unwrap();

        assert_eq!(inserted, 2);
        let slugs: Vec<String> = plants
            .plants
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.slug.clone())
            .collect();
        assert!(slugs.contains(&"aloe-vera".to_string()));
        assert!(slugs.contains(&"aloe-vera-1".to_string()));
    }
}
