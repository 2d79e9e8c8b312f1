use crate::{domain::requests::NewUser, errors::RepositoryError, model::User};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserRepositoryTrait {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;
}
