use crate::{
    abstract_trait::{DynImageRepository, DynMediaHost, DynPostRepository, DynUserRepository},
    domain::{
        requests::{CreateImageRequest, CreatePostRequest, NewPost, UpdatePostRequest},
        responses::{PostDetailResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    media::UploadedAsset,
    model::Post,
    utils::slugify,
};
use std::collections::HashSet;
use tracing::{info, warn};
use uuid::Uuid;

const MAX_SLUG_ATTEMPTS: u32 = 100;

#[derive(Clone)]
pub struct PostService {
    posts: DynPostRepository,
    users: DynUserRepository,
    images: DynImageRepository,
    media: DynMediaHost,
}

impl PostService {
    pub fn new(
        posts: DynPostRepository,
        users: DynUserRepository,
        images: DynImageRepository,
        media: DynMediaHost,
    ) -> Self {
        Self {
            posts,
            users,
            images,
            media,
        }
    }

    pub async fn create(
        &self,
        req: &CreatePostRequest,
        uploads: &[UploadedAsset],
    ) -> Result<PostDetailResponse, ServiceError> {
        info!("📝 Creating post: {}", req.title);

        // reject bad author ids up front instead of relying on the FK error
        if self.users.find_by_id(req.user_id).await?.is_none() {
            return Err(RepositoryError::ForeignKeyViolation(format!(
                "user {} does not exist",
                req.user_id
            ))
            .into());
        }

        let slug = self.unique_slug(&req.title, &HashSet::new()).await?;
        let post = self.posts.create(&NewPost::from_request(req, slug)).await?;

        if !uploads.is_empty() {
            let records: Vec<CreateImageRequest> = uploads
                .iter()
                .map(|asset| CreateImageRequest {
                    url: asset.url.clone(),
                    public_id: Some(asset.public_id.clone()),
                    plant_id: None,
                    post_id: Some(post.id),
                    testimonial_id: None,
                })
                .collect();
            self.images.create_many(&records).await?;
        }

        info!("✅ Post created with id {}", post.id);

        self.detail(post).await
    }

    pub async fn find_all(
        &self,
        limit: Option<i64>,
        rating: Option<&str>,
    ) -> Result<Vec<Post>, ServiceError> {
        Ok(self.posts.find_all(limit, rating).await?)
    }

    pub async fn find_one(&self, id: Uuid) -> Result<PostDetailResponse, ServiceError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        self.detail(post).await
    }

    pub async fn update(&self, id: Uuid, req: &UpdatePostRequest) -> Result<Post, ServiceError> {
        if self.posts.find_by_id(id).await?.is_none() {
            return Err(RepositoryError::NotFound.into());
        }

        Ok(self.posts.update(id, req).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Post, ServiceError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let images = self.images.find_by_post_id(id).await?;
        for image in &images {
            if let Some(public_id) = &image.public_id {
                if let Err(err) = self.media.destroy(public_id).await {
                    warn!("failed to delete media asset {public_id}: {err}");
                }
            }
        }

        self.posts.delete(id).await?;

        info!("🗑️ Post {} deleted ({} images cleaned up)", id, images.len());

        Ok(post)
    }

    pub async fn bulk_create(&self, reqs: &[CreatePostRequest]) -> Result<u64, ServiceError> {
        let mut rows = Vec::with_capacity(reqs.len());
        let mut minted = HashSet::new();

        for req in reqs {
            let slug = self.unique_slug(&req.title, &minted).await?;
            minted.insert(slug.clone());
            rows.push(NewPost::from_request(req, slug));
        }

        Ok(self.posts.create_many(&rows).await?)
    }

    async fn detail(&self, post: Post) -> Result<PostDetailResponse, ServiceError> {
        let images = self.images.find_by_post_id(post.id).await?;
        let author = self
            .users
            .find_by_id(post.user_id)
            .await?
            .map(UserResponse::from);

        Ok(PostDetailResponse::new(post, images, author))
    }

    async fn unique_slug(
        &self,
        title: &str,
        taken: &HashSet<String>,
    ) -> Result<String, ServiceError> {
        let base = slugify(title);
        let mut candidate = base.clone();

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            if !taken.contains(&candidate) && self.posts.find_by_slug(&candidate).await?.is_none()
            {
                return Ok(candidate);
            }
            candidate = format!("{base}-{attempt}");
        }

        Err(ServiceError::Internal(format!(
            "no free slug for '{title}' after {MAX_SLUG_ATTEMPTS} attempts"
        )))
    }
}
