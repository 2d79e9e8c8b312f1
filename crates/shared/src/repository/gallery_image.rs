use crate::{
    abstract_trait::GalleryImageRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateGalleryImageRequest, UpdateGalleryImageRequest},
    errors::RepositoryError,
    model::GalleryImage,
};
use async_trait::async_trait;
use sqlx::QueryBuilder;
use uuid::Uuid;

pub struct GalleryImageRepository {
    db: ConnectionPool,
}

impl GalleryImageRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GalleryImageRepositoryTrait for GalleryImageRepository {
    async fn find_all(&self, limit: Option<i64>) -> Result<Vec<GalleryImage>, RepositoryError> {
        let images = sqlx::query_as::<_, GalleryImage>(
            r#"
            SELECT * FROM gallery_images ORDER BY created_at DESC LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(images)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<GalleryImage>, RepositoryError> {
        let image = sqlx::query_as::<_, GalleryImage>(
            r#"
            SELECT * FROM gallery_images WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(image)
    }

    async fn create(
        &self,
        req: &CreateGalleryImageRequest,
    ) -> Result<GalleryImage, RepositoryError> {
        let image = sqlx::query_as::<_, GalleryImage>(
            r#"
            INSERT INTO gallery_images (gallery_id, image_url, public_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(req.gallery_id)
        .bind(&req.image_url)
        .bind(&req.public_id)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(image)
    }

    async fn create_many(
        &self,
        reqs: &[CreateGalleryImageRequest],
    ) -> Result<u64, RepositoryError> {
        if reqs.is_empty() {
            return Ok(0);
        }

        let mut builder =
            QueryBuilder::new("INSERT INTO gallery_images (gallery_id, image_url, public_id) ");
        builder.push_values(reqs, |mut row, req| {
            row.push_bind(req.gallery_id)
                .push_bind(&req.image_url)
                .push_bind(&req.public_id);
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
        req: &UpdateGalleryImageRequest,
    ) -> Result<GalleryImage, RepositoryError> {
        let image = sqlx::query_as::<_, GalleryImage>(
            r#"
            UPDATE gallery_images
            SET gallery_id = COALESCE($2, gallery_id),
                image_url = COALESCE($3, image_url),
                public_id = COALESCE($4, public_id)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(req.gallery_id)
        .bind(&req.image_url)
        .bind(&req.public_id)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(image)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            DELETE FROM gallery_images WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(())
    }
}
