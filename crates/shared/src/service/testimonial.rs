use crate::{
    abstract_trait::DynTestimonialRepository,
    domain::requests::{CreateTestimonialRequest, UpdateTestimonialRequest},
    errors::{RepositoryError, ServiceError},
    model::Testimonial,
};
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct TestimonialService {
    testimonials: DynTestimonialRepository,
}

impl TestimonialService {
    pub fn new(testimonials: DynTestimonialRepository) -> Self {
        Self { testimonials }
    }

    pub async fn create(
        &self,
        req: &CreateTestimonialRequest,
    ) -> Result<Testimonial, ServiceError> {
        let testimonial = self.testimonials.create(req).await?;
        info!("✅ Testimonial created with id {}", testimonial.id);
        Ok(testimonial)
    }

    pub async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Testimonial>, ServiceError> {
        Ok(self.testimonials.find_all(limit).await?)
    }

    pub async fn find_one(&self, id: Uuid) -> Result<Testimonial, ServiceError> {
        self.testimonials
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        req: &UpdateTestimonialRequest,
    ) -> Result<Testimonial, ServiceError> {
        if self.testimonials.find_by_id(id).await?.is_none() {
            return Err(RepositoryError::NotFound.into());
        }

        Ok(self.testimonials.update(id, req).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Testimonial, ServiceError> {
        let testimonial = self
            .testimonials
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        self.testimonials.delete(id).await?;

        Ok(testimonial)
    }

    pub async fn bulk_create(
        &self,
        reqs: &[CreateTestimonialRequest],
    ) -> Result<u64, ServiceError> {
        Ok(self.testimonials.create_many(reqs).await?)
    }
}
