use crate::{domain::requests::CreateToken, errors::RepositoryError, model::Token};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTokenRepository = Arc<dyn TokenRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TokenRepositoryTrait {
    async fn create(&self, token: &CreateToken) -> Result<Token, RepositoryError>;
    async fn find_by_refresh_token(&self, token: &str) -> Result<Option<Token>, RepositoryError>;
    /// Returns the number of rows removed (0 when the token was unknown).
    async fn delete_by_refresh_token(&self, token: &str) -> Result<u64, RepositoryError>;
}
