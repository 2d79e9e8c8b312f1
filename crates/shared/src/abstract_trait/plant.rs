use crate::{
    domain::requests::{NewPlant, UpdatePlantRequest},
    errors::RepositoryError,
    model::Plant,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynPlantRepository = Arc<dyn PlantRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PlantRepositoryTrait {
    async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Plant>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Plant>, RepositoryError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Plant>, RepositoryError>;
    async fn create(&self, plant: &NewPlant) -> Result<Plant, RepositoryError>;
    async fn create_many(&self, plants: &[NewPlant]) -> Result<u64, RepositoryError>;
    async fn update(&self, id: Uuid, req: &UpdatePlantRequest) -> Result<Plant, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
