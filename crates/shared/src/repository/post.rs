use crate::{
    abstract_trait::PostRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{NewPost, UpdatePostRequest},
    errors::RepositoryError,
    model::Post,
};
use async_trait::async_trait;
use sqlx::QueryBuilder;
use uuid::Uuid;

pub struct PostRepository {
    db: ConnectionPool,
}

impl PostRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepositoryTrait for PostRepository {
    async fn find_all(
        &self,
        limit: Option<i64>,
        rating: Option<&str>,
    ) -> Result<Vec<Post>, RepositoryError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT * FROM posts
            WHERE ($2::TEXT IS NULL OR rating = $2)
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .bind(rating)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(posts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepositoryError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT * FROM posts WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(post)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepositoryError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT * FROM posts WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(post)
    }

    async fn create(&self, post: &NewPost) -> Result<Post, RepositoryError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, slug, content, rating, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(&post.rating)
        .bind(post.user_id)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(post)
    }

    async fn create_many(&self, posts: &[NewPost]) -> Result<u64, RepositoryError> {
        if posts.is_empty() {
            return Ok(0);
        }

        let mut builder =
            QueryBuilder::new("INSERT INTO posts (title, slug, content, rating, user_id) ");
        builder.push_values(posts, |mut row, post| {
            row.push_bind(&post.title)
                .push_bind(&post.slug)
                .push_bind(&post.content)
                .push_bind(&post.rating)
                .push_bind(post.user_id);
        });
        builder.push(" ON CONFLICT DO NOTHING");

        let result = builder
            .build()
            .execute(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        Ok(result.rows_affected())
    }

    async fn update(&self, id: Uuid, req: &UpdatePostRequest) -> Result<Post, RepositoryError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                rating = COALESCE($4, rating),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.title)
        .bind(&req.content)
        .bind(&req.rating)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            DELETE FROM posts WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(())
    }
}
