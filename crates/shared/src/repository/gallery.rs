use crate::{
    abstract_trait::GalleryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateGalleryRequest, UpdateGalleryRequest},
    errors::RepositoryError,
    model::Gallery,
};
use async_trait::async_trait;
use sqlx::QueryBuilder;
use uuid::Uuid;

pub struct GalleryRepository {
    db: ConnectionPool,
}

impl GalleryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GalleryRepositoryTrait for GalleryRepository {
    async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Gallery>, RepositoryError> {
        let galleries = sqlx::query_as::<_, Gallery>(
            r#"
            SELECT * FROM galleries ORDER BY created_at DESC LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(galleries)
    }

    async fn find_first(&self) -> Result<Option<Gallery>, RepositoryError> {
        let gallery = sqlx::query_as::<_, Gallery>(
            r#"
            SELECT * FROM galleries ORDER BY created_at ASC LIMIT 1
            "#,
        )
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(gallery)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Gallery>, RepositoryError> {
        let gallery = sqlx::query_as::<_, Gallery>(
            r#"
            SELECT * FROM galleries WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(gallery)
    }

    async fn create(&self, req: &CreateGalleryRequest) -> Result<Gallery, RepositoryError> {
        let gallery = sqlx::query_as::<_, Gallery>(
            r#"
            INSERT INTO galleries (title, description)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(gallery)
    }

    async fn create_many(&self, reqs: &[CreateGalleryRequest]) -> Result<u64, RepositoryError> {
        if reqs.is_empty() {
            return Ok(0);
        }

        let mut builder = QueryBuilder::new("INSERT INTO galleries (title, description) ");
        builder.push_values(reqs, |mut row, req| {
            row.push_bind(&req.title).push_bind(&req.description);
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
        req: &UpdateGalleryRequest,
    ) -> Result<Gallery, RepositoryError> {
        let gallery = sqlx::query_as::<_, Gallery>(
            r#"
            UPDATE galleries
            SET title = COALESCE($2, title),
                description = COALESCE($3, description)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.title)
        .bind(&req.description)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(gallery)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            DELETE FROM galleries WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(())
    }
}
