use crate::{
    domain::requests::{CreateTestimonialRequest, UpdateTestimonialRequest},
    errors::RepositoryError,
    model::Testimonial,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynTestimonialRepository = Arc<dyn TestimonialRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TestimonialRepositoryTrait {
    async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Testimonial>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Testimonial>, RepositoryError>;
    async fn create(&self, req: &CreateTestimonialRequest)
    -> Result<Testimonial, RepositoryError>;
    async fn create_many(
        &self,
        reqs: &[CreateTestimonialRequest],
    ) -> Result<u64, RepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        req: &UpdateTestimonialRequest,
    ) -> Result<Testimonial, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
