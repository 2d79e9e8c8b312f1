use axum::extract::Multipart;
use shared::{abstract_trait::DynMediaHost, errors::HttpError, media::UploadedAsset};
use std::collections::HashMap;
use tokio::task::JoinSet;
use tracing::info;
use uuid::Uuid;

pub const MAX_UPLOAD_FILES: usize = 10;

/// A multipart body split into its text fields and raw file parts.
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub files: Vec<Vec<u8>>,
}

/// Drain a multipart stream, treating every part named `file_field` as a
/// file and everything else as a text field.
pub async fn collect_multipart(
    mut multipart: Multipart,
    file_field: &str,
) -> Result<MultipartForm, HttpError> {
    let mut fields = HashMap::new();
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::BadRequest(format!("Malformed multipart body: {err}")))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == file_field {
            let data = field
                .bytes()
                .await
                .map_err(|err| HttpError::BadRequest(format!("Failed to read file part: {err}")))?;
            files.push(data.to_vec());
        } else {
            let text = field
                .text()
                .await
                .map_err(|err| HttpError::BadRequest(format!("Failed to read field {name}: {err}")))?;
            fields.insert(name, text);
        }
    }

    if files.len() > MAX_UPLOAD_FILES {
        return Err(HttpError::BadRequest(format!(
            "At most {MAX_UPLOAD_FILES} files per request"
        )));
    }

    Ok(MultipartForm { fields, files })
}

/// Push every buffer to the media host concurrently and wait for the whole
/// batch. One failed upload fails the request; nothing is persisted then.
pub async fn upload_all(
    media: &DynMediaHost,
    files: Vec<Vec<u8>>,
    folder: &str,
) -> Result<Vec<UploadedAsset>, HttpError> {
    if files.is_empty() {
        return Ok(Vec::new());
    }

    info!("uploading {} files to folder {folder}", files.len());

    let mut join_set = JoinSet::new();
    for (index, bytes) in files.into_iter().enumerate() {
        let media = media.clone();
        let folder = folder.to_string();
        join_set.spawn(async move { (index, media.upload(bytes, &folder).await) });
    }

    let mut assets: Vec<Option<UploadedAsset>> = Vec::new();
    assets.resize_with(join_set.len(), || None);

    while let Some(joined) = join_set.join_next().await {
        let (index, result) =
            joined.map_err(|err| HttpError::Internal(format!("Upload task failed: {err}")))?;
        assets[index] = Some(result.map_err(HttpError::from)?);
    }

    Ok(assets.into_iter().flatten().collect())
}

pub fn required_field(fields: &HashMap<String, String>, name: &str) -> Result<String, HttpError> {
    fields
        .get(name)
        .map(|v| v.to_string())
        .ok_or_else(|| HttpError::BadRequest(format!("Missing field: {name}")))
}

pub fn optional_field(fields: &HashMap<String, String>, name: &str) -> Option<String> {
    fields.get(name).filter(|v| !v.is_empty()).cloned()
}

pub fn parse_i64_field(fields: &HashMap<String, String>, name: &str) -> Result<i64, HttpError> {
    required_field(fields, name)?
        .parse::<i64>()
        .map_err(|_| HttpError::BadRequest(format!("Invalid value for {name}")))
}

pub fn parse_i32_field(fields: &HashMap<String, String>, name: &str) -> Result<i32, HttpError> {
    required_field(fields, name)?
        .parse::<i32>()
        .map_err(|_| HttpError::BadRequest(format!("Invalid value for {name}")))
}

pub fn parse_optional_uuid(
    fields: &HashMap<String, String>,
    name: &str,
) -> Result<Option<Uuid>, HttpError> {
    match optional_field(fields, name) {
        Some(raw) => raw
            .parse::<Uuid>()
            .map(Some)
            .map_err(|_| HttpError::BadRequest(format!("Invalid UUID for {name}"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared::{abstract_trait::MediaHostTrait, errors::ServiceError};
    use std::sync::Arc;

    struct FlakyMediaHost {
        fail_on: Option<usize>,
        counter: std::sync::atomic::AtomicUsize,
    }

    #[async_trait]
    impl MediaHostTrait for FlakyMediaHost {
        async fn upload(
            &self,
            _bytes: Vec<u8>,
            folder: &str,
        ) -> Result<UploadedAsset, ServiceError> {
            let seen = self
                .counter
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if self.fail_on == Some(seen) {
                return Err(ServiceError::Upload("connection reset".into()));
            }
            Ok(UploadedAsset {
                url: format!("https://media.example.com/{folder}/{seen}.jpg"),
                public_id: format!("{folder}/{seen}"),
            })
        }

        async fn destroy(&self, _public_id: &str) -> Result<(), ServiceError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_upload_all_returns_every_asset() {
        let media: DynMediaHost = Arc::new(FlakyMediaHost {
            fail_on: None,
            counter: Default::default(),
        });

        let assets = upload_all(&media, vec![vec![1], vec![2], vec![3]], "plants")
            .await
            .unwrap();

        assert_eq!(assets.len(), 3);
    }

    #[tokio::test]
    async fn test_upload_all_fails_the_batch_on_one_error() {
        let media: DynMediaHost = Arc::new(FlakyMediaHost {
            fail_on: Some(1),
            counter: Default::default(),
        });

        let err = upload_all(&media, vec![vec![1], vec![2], vec![3]], "plants")
            .await
            .unwrap_err();

        assert!(matches!(err, HttpError::Internal(_)));
    }

    #[test]
    fn test_field_parsers() {
        let mut fields = HashMap::new();
        fields.insert("price".to_string(), "1999".to_string());
        fields.insert("stock".to_string(), "abc".to_string());
        fields.insert("category_id".to_string(), String::new());

        assert_eq!(parse_i64_field(&fields, "price").unwrap(), 1999);
        assert!(parse_i32_field(&fields, "stock").is_err());
        assert!(required_field(&fields, "name").is_err());
        // empty strings read as absent
        assert_eq!(parse_optional_uuid(&fields, "category_id").unwrap(), None);
    }
}
