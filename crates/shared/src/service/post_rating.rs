use crate::{
    abstract_trait::DynPostRatingRepository,
    domain::requests::{CreatePostRatingRequest, UpdatePostRatingRequest},
    errors::{RepositoryError, ServiceError},
    model::PostRating,
};
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct PostRatingService {
    post_ratings: DynPostRatingRepository,
}

impl PostRatingService {
    pub fn new(post_ratings: DynPostRatingRepository) -> Self {
        Self { post_ratings }
    }

    pub async fn create(&self, req: &CreatePostRatingRequest) -> Result<PostRating, ServiceError> {
        let rating = self.post_ratings.create(req).await?;
        info!("✅ Post rating created with id {}", rating.id);
        Ok(rating)
    }

    pub async fn find_all(&self, limit: Option<i64>) -> Result<Vec<PostRating>, ServiceError> {
        Ok(self.post_ratings.find_all(limit).await?)
    }

    pub async fn find_one(&self, id: Uuid) -> Result<PostRating, ServiceError> {
        self.post_ratings
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        req: &UpdatePostRatingRequest,
    ) -> Result<PostRating, ServiceError> {
        if self.post_ratings.find_by_id(id).await?.is_none() {
            return Err(RepositoryError::NotFound.into());
        }

        Ok(self.post_ratings.update(id, req).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<PostRating, ServiceError> {
        let rating = self
            .post_ratings
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        self.post_ratings.delete(id).await?;

        Ok(rating)
    }

    pub async fn bulk_create(
        &self,
        reqs: &[CreatePostRatingRequest],
    ) -> Result<u64, ServiceError> {
        Ok(self.post_ratings.create_many(reqs).await?)
    }
}
