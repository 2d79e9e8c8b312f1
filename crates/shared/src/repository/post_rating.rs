use crate::{
    abstract_trait::PostRatingRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreatePostRatingRequest, UpdatePostRatingRequest},
    errors::RepositoryError,
    model::PostRating,
};
use async_trait::async_trait;
use sqlx::QueryBuilder;
use uuid::Uuid;

pub struct PostRatingRepository {
    db: ConnectionPool,
}

impl PostRatingRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRatingRepositoryTrait for PostRatingRepository {
    async fn find_all(&self, limit: Option<i64>) -> Result<Vec<PostRating>, RepositoryError> {
        let ratings = sqlx::query_as::<_, PostRating>(
            r#"
            SELECT * FROM post_ratings ORDER BY created_at DESC LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(ratings)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PostRating>, RepositoryError> {
        let rating = sqlx::query_as::<_, PostRating>(
            r#"
            SELECT * FROM post_ratings WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(rating)
    }

    async fn create(&self, req: &CreatePostRatingRequest) -> Result<PostRating, RepositoryError> {
        let rating = sqlx::query_as::<_, PostRating>(
            r#"
            INSERT INTO post_ratings (post_id, user_id, rating)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(req.post_id)
        .bind(req.user_id)
        .bind(req.rating)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(rating)
    }

    async fn create_many(
        &self,
        reqs: &[CreatePostRatingRequest],
    ) -> Result<u64, RepositoryError> {
        if reqs.is_empty() {
            return Ok(0);
        }

        let mut builder =
            QueryBuilder::new("INSERT INTO post_ratings (post_id, user_id, rating) ");
        builder.push_values(reqs, |mut row, req| {
            row.push_bind(req.post_id)
                .push_bind(req.user_id)
                .push_bind(req.rating);
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
        req: &UpdatePostRatingRequest,
    ) -> Result<PostRating, RepositoryError> {
        let rating = sqlx::query_as::<_, PostRating>(
            r#"
            UPDATE post_ratings
            SET rating = COALESCE($2, rating)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(req.rating)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(rating)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            DELETE FROM post_ratings WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(())
    }
}
