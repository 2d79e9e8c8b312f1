use sqlx::Error as SqlxError;
use thiserror::Error;

const PG_UNIQUE_VIOLATION: &str = "23505";
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Unique violation: {0}")]
    UniqueViolation(String),

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),
}

/// Driver error codes are translated here and nowhere else; callers match on
/// the tagged variants instead of Postgres SQLSTATEs.
impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        if let SqlxError::Database(db_err) = &err {
            match db_err.code().as_deref() {
                Some(PG_UNIQUE_VIOLATION) => {
                    return RepositoryError::UniqueViolation(db_err.message().to_string());
                }
                Some(PG_FOREIGN_KEY_VIOLATION) => {
                    return RepositoryError::ForeignKeyViolation(db_err.message().to_string());
                }
                _ => {}
            }
        }

        RepositoryError::Sqlx(err)
    }
}
