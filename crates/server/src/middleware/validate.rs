use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;
use validator::{Validate, ValidationErrors};

/// Json extractor that runs the DTO's validator rules before the handler
/// sees the value.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                HttpError::BadRequest(format!("Invalid JSON: {}", rejection.body_text()))
            })?;

        value
            .validate()
            .map_err(|errors| HttpError::BadRequest(format_validation_errors(&errors)))?;

        Ok(Self(value))
    }
}

/// Validate every element of a bulk payload.
pub fn validate_all<T: Validate>(items: &[T]) -> Result<(), HttpError> {
    for item in items {
        item.validate()
            .map_err(|errors| HttpError::BadRequest(format_validation_errors(&errors)))?;
    }
    Ok(())
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match error.code.as_ref() {
                    "email" => "Invalid email format".to_string(),
                    "url" => "Invalid URL format".to_string(),
                    "length" => "Invalid length".to_string(),
                    "range" => "Value out of range".to_string(),
                    _ => format!("Invalid {field}"),
                });
            messages.push(format!("{field}: {message}"));
        }
    }

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}
