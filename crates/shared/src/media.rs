use crate::{abstract_trait::MediaHostTrait, config::MediaConfig, errors::ServiceError};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

/// What the media host hands back for a stored file. `public_id` is the
/// opaque handle required to delete the asset again.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadedAsset {
    pub url: String,
    pub public_id: String,
}

pub struct MediaHostClient {
    http: ReqwestClient,
    api_url: String,
    api_key: String,
}

impl MediaHostClient {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            http: ReqwestClient::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl MediaHostTrait for MediaHostClient {
    async fn upload(&self, bytes: Vec<u8>, folder: &str) -> Result<UploadedAsset, ServiceError> {
        let part = Part::bytes(bytes).file_name("upload.bin");
        let form = Form::new()
            .text("folder", folder.to_string())
            .part("file", part);

        let response = self
            .http
            .post(format!("{}/upload", self.api_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|err| ServiceError::Upload(err.to_string()))?;

        if !response.status().is_success() {
            return Err(ServiceError::Upload(format!(
                "media host returned {}",
                response.status()
            )));
        }

        let asset = response
            .json::<UploadedAsset>()
            .await
            .map_err(|err| ServiceError::Upload(err.to_string()))?;

        info!("uploaded asset {} to folder {folder}", asset.public_id);

        Ok(asset)
    }

    async fn destroy(&self, public_id: &str) -> Result<(), ServiceError> {
        let response = self
            .http
            .delete(format!("{}/files/{public_id}", self.api_url))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|err| ServiceError::Upload(err.to_string()))?;

        if !response.status().is_success() {
            return Err(ServiceError::Upload(format!(
                "media host returned {} deleting {public_id}",
                response.status()
            )));
        }

        Ok(())
    }
}
