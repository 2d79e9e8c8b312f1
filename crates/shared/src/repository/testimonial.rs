use crate::{
    abstract_trait::TestimonialRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateTestimonialRequest, UpdateTestimonialRequest},
    errors::RepositoryError,
    model::Testimonial,
};
use async_trait::async_trait;
use sqlx::QueryBuilder;
use uuid::Uuid;

pub struct TestimonialRepository {
    db: ConnectionPool,
}

impl TestimonialRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TestimonialRepositoryTrait for TestimonialRepository {
    async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Testimonial>, RepositoryError> {
        let testimonials = sqlx::query_as::<_, Testimonial>(
            r#"
            SELECT * FROM testimonials ORDER BY created_at DESC LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(testimonials)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Testimonial>, RepositoryError> {
        let testimonial = sqlx::query_as::<_, Testimonial>(
            r#"
            SELECT * FROM testimonials WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(testimonial)
    }

    async fn create(
        &self,
        req: &CreateTestimonialRequest,
    ) -> Result<Testimonial, RepositoryError> {
        let testimonial = sqlx::query_as::<_, Testimonial>(
            r#"
            INSERT INTO testimonials (customer_name, customer_title, content)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&req.customer_name)
        .bind(&req.customer_title)
        .bind(&req.content)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(testimonial)
    }

    async fn create_many(
        &self,
        reqs: &[CreateTestimonialRequest],
    ) -> Result<u64, RepositoryError> {
        if reqs.is_empty() {
            return Ok(0);
        }

        let mut builder =
            QueryBuilder::new("INSERT INTO testimonials (customer_name, customer_title, content) ");
        builder.push_values(reqs, |mut row, req| {
            row.push_bind(&req.customer_name)
                .push_bind(&req.customer_title)
                .push_bind(&req.content);
        });
        builder.push(" ON CONFLICT DO NOTHING");

        let result = builder
            .build()
            .execute(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        Ok(result.rows_affected())
    }

    async fn update(
        &self,
        id: Uuid,
        req: &UpdateTestimonialRequest,
    ) -> Result<Testimonial, RepositoryError> {
        let testimonial = sqlx::query_as::<_, Testimonial>(
            r#"
            UPDATE testimonials
            SET customer_name = COALESCE($2, customer_name),
                customer_title = COALESCE($3, customer_title),
                content = COALESCE($4, content),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.customer_name)
        .bind(&req.customer_title)
        .bind(&req.content)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(testimonial)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            DELETE FROM testimonials WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(())
    }
}
