use crate::{
    abstract_trait::ImageRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateImageRequest, UpdateImageRequest},
    errors::RepositoryError,
    model::Image,
};
use async_trait::async_trait;
use sqlx::QueryBuilder;
use uuid::Uuid;

pub struct ImageRepository {
    db: ConnectionPool,
}

impl ImageRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ImageRepositoryTrait for ImageRepository {
    async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Image>, RepositoryError> {
        let images = sqlx::query_as::<_, Image>(
            r#"
            SELECT * FROM images ORDER BY created_at DESC LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(images)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Image>, RepositoryError> {
        let image = sqlx::query_as::<_, Image>(
            r#"
            SELECT * FROM images WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(image)
    }

    async fn find_by_plant_id(&self, plant_id: Uuid) -> Result<Vec<Image>, RepositoryError> {
        let images = sqlx::query_as::<_, Image>(
            r#"
            SELECT * FROM images WHERE plant_id = $1
            "#,
        )
        .bind(plant_id)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(images)
    }

    async fn find_by_post_id(&self, post_id: Uuid) -> Result<Vec<Image>, RepositoryError> {
        let images = sqlx::query_as::<_, Image>(
            r#"
            SELECT * FROM images WHERE post_id = $1
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(images)
    }

    async fn create(&self, req: &CreateImageRequest) -> Result<Image, RepositoryError> {
        let image = sqlx::query_as::<_, Image>(
            r#"
            INSERT INTO images (url, public_id, plant_id, post_id, testimonial_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&req.url)
        .bind(&req.public_id)
        .bind(req.plant_id)
        .bind(req.post_id)
        .bind(req.testimonial_id)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(image)
    }

    async fn create_many(&self, reqs: &[CreateImageRequest]) -> Result<u64, RepositoryError> {
        if reqs.is_empty() {
            return Ok(0);
        }

        let mut builder = QueryBuilder::new(
            "INSERT INTO images (url, public_id, plant_id, post_id, testimonial_id) ",
        );
        builder.push_values(reqs, |mut row, req| {
            row.push_bind(&req.url)
                .push_bind(&req.public_id)
                .push_bind(req.plant_id)
                .push_bind(req.post_id)
                .push_bind(req.testimonial_id);
        });
        builder.push(" ON CONFLICT DO NOTHING");

        let result = builder
            .build()
            .execute(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        Ok(result.rows_affected())
    }

    async fn update(&self, id: Uuid, req: &UpdateImageRequest) -> Result<Image, RepositoryError> {
        let image = sqlx::query_as::<_, Image>(
            r#"
            UPDATE images
            SET url = COALESCE($2, url),
                public_id = COALESCE($3, public_id),
                plant_id = COALESCE($4, plant_id),
                post_id = COALESCE($5, post_id),
                testimonial_id = COALESCE($6, testimonial_id)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.url)
        .bind(&req.public_id)
        .bind(req.plant_id)
        .bind(req.post_id)
        .bind(req.testimonial_id)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(image)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            DELETE FROM images WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(())
    }
}
