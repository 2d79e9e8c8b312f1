use crate::{
    domain::requests::{CreateCategoryRequest, UpdateCategoryRequest},
    errors::RepositoryError,
    model::Category,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCategoryRepository = Arc<dyn CategoryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CategoryRepositoryTrait {
    async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Category>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepositoryError>;
    async fn create(&self, req: &CreateCategoryRequest) -> Result<Category, RepositoryError>;
    async fn create_many(&self, reqs: &[CreateCategoryRequest]) -> Result<u64, RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        req: &UpdateCategoryRequest,
    ) -> Result<Category, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
