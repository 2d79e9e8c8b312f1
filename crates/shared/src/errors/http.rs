use crate::errors::{ErrorResponse, RepositoryError, ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::UniqueViolation(msg) => {
                    HttpError::BadRequest(format!("Duplicate value: {msg}"))
                }
                RepositoryError::ForeignKeyViolation(msg) => {
                    HttpError::BadRequest(format!("Invalid reference: {msg}"))
                }
                RepositoryError::Sqlx(_) => HttpError::Internal("Repository error".into()),
            },

            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized("Invalid credentials".into())
            }

            ServiceError::Conflict(msg) => HttpError::Conflict(msg),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::InvalidToken => {
                HttpError::Unauthorized("Invalid or expired token".into())
            }

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),

            ServiceError::Bcrypt(_) => HttpError::Internal("Internal authentication error".into()),

            ServiceError::Upload(msg) => HttpError::Internal(format!("Upload failed: {msg}")),

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::NotFound));
        assert!(matches!(err, HttpError::NotFound(_)));
    }

    #[test]
    fn test_foreign_key_violation_maps_to_400() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::ForeignKeyViolation(
            "plants_category_id_fkey".into(),
        )));
        assert!(matches!(err, HttpError::BadRequest(_)));
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let err = HttpError::from(ServiceError::Conflict("email already registered".into()));
        assert!(matches!(err, HttpError::Conflict(_)));
    }

    #[test]
    fn test_expired_token_maps_to_401() {
        let err = HttpError::from(ServiceError::TokenExpired);
        assert!(matches!(err, HttpError::Unauthorized(_)));
    }
}
