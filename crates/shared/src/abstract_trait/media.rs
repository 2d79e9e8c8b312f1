use crate::errors::ServiceError;
use crate::media::UploadedAsset;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMediaHost = Arc<dyn MediaHostTrait + Send + Sync>;

/// Outbound media hosting: push a buffer, get back a hosted url plus the
/// opaque handle needed to delete the asset later.
#[async_trait]
pub trait MediaHostTrait {
    async fn upload(&self, bytes: Vec<u8>, folder: &str) -> Result<UploadedAsset, ServiceError>;
    async fn destroy(&self, public_id: &str) -> Result<(), ServiceError>;
}
