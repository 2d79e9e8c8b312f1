use crate::{
    abstract_trait::CategoryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateCategoryRequest, UpdateCategoryRequest},
    errors::RepositoryError,
    model::Category,
};
use async_trait::async_trait;
use sqlx::QueryBuilder;
use uuid::Uuid;

pub struct CategoryRepository {
    db: ConnectionPool,
}

impl CategoryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn find_all(&self, limit: Option<i64>) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT * FROM categories ORDER BY created_at DESC LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(categories)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT * FROM categories WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(category)
    }

    async fn create(&self, req: &CreateCategoryRequest) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, description)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(category)
    }

    async fn create_many(&self, reqs: &[CreateCategoryRequest]) -> Result<u64, RepositoryError> {
        if reqs.is_empty() {
            return Ok(0);
        }

        let mut builder = QueryBuilder::new("INSERT INTO categories (name, description) ");
        builder.push_values(reqs, |mut row, req| {
            row.push_bind(&req.name).push_bind(&req.description);
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
        req: &UpdateCategoryRequest,
    ) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.description)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(category)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            DELETE FROM categories WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(())
    }
}
