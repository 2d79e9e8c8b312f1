use crate::{
    abstract_trait::TokenRepositoryTrait, config::ConnectionPool, domain::requests::CreateToken,
    errors::RepositoryError, model::Token,
};
use async_trait::async_trait;

pub struct TokenRepository {
    db: ConnectionPool,
}

impl TokenRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TokenRepositoryTrait for TokenRepository {
    async fn create(&self, token: &CreateToken) -> Result<Token, RepositoryError> {
        let token = sqlx::query_as::<_, Token>(
            r#"
            INSERT INTO tokens (refresh_token, user_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&token.refresh_token)
        .bind(token.user_id)
        .bind(token.expires_at)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(token)
    }

    async fn find_by_refresh_token(&self, token: &str) -> Result<Option<Token>, RepositoryError> {
        let token = sqlx::query_as::<_, Token>(
            r#"
            SELECT * FROM tokens WHERE refresh_token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(token)
    }

    async fn delete_by_refresh_token(&self, token: &str) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM tokens WHERE refresh_token = $1
            "#,
        )
        .bind(token)
        .execute(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result.rows_affected())
    }
}
