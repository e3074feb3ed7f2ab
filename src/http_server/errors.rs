//! # HTTP API Errors
//!
//! Error types for the HTTP handlers. Every variant renders as a JSON
//! `{"message": ...}` body with the status from [`RestError::status_code`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::model::ValidationError;
use crate::store::StoreError;

/// Result type for HTTP handlers
pub type RestResult<T> = Result<T, RestError>;

/// Which entity a uniqueness conflict concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Article,
    Category,
}

impl Entity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Article => "article",
            Entity::Category => "category",
        }
    }
}

/// HTTP API errors
#[derive(Debug, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Payload failed field validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Body is not valid JSON or has the wrong types
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Missing required query parameter
    #[error("Missing required parameter: {0}")]
    MissingParam(&'static str),

    /// `categoryId` does not reference an existing category
    #[error("Unknown category: categoryId does not reference an existing category")]
    UnknownCategory,

    /// Article id does not exist
    #[error("Article not found.")]
    NotFound,

    /// Search matched nothing
    #[error("No article found.")]
    NoResults,

    /// Name already taken
    #[error("Error: this {} already exists.", .0.as_str())]
    Duplicate(Entity),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Storage failure. Detail is logged, never returned.
    #[error("Internal error")]
    Internal(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            RestError::Validation(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::MissingParam(_) => StatusCode::BAD_REQUEST,
            RestError::UnknownCategory => StatusCode::BAD_REQUEST,

            // 404 Not Found
            RestError::NotFound => StatusCode::NOT_FOUND,
            RestError::NoResults => StatusCode::NOT_FOUND,

            // 409 Conflict
            RestError::Duplicate(_) => StatusCode::CONFLICT,

            // 500 Internal Server Error
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::DuplicateKey(_) => {
                let entity = match err.duplicate_table() {
                    Some("categorie") => Entity::Category,
                    _ => Entity::Article,
                };
                RestError::Duplicate(entity)
            }
            StoreError::ForeignKeyViolation => RestError::UnknownCategory,
            StoreError::Database(_) => RestError::Internal(err.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl From<&RestError> for ErrorResponse {
    fn from(err: &RestError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            RestError::Internal(detail) => tracing::error!(%detail, "request failed"),
            RestError::Duplicate(entity) => {
                tracing::warn!(entity = entity.as_str(), "duplicate name rejected")
            }
            other => tracing::debug!(status = status.as_u16(), error = %other, "request rejected"),
        }
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RestError::InvalidBody("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(RestError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(RestError::NoResults.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            RestError::Duplicate(Entity::Article).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            RestError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_mapping() {
        let dup = RestError::from(StoreError::DuplicateKey("categorie.name".to_string()));
        assert!(matches!(dup, RestError::Duplicate(Entity::Category)));
        assert_eq!(dup.to_string(), "Error: this category already exists.");

        let fk = RestError::from(StoreError::ForeignKeyViolation);
        assert_eq!(fk.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_detail_is_not_exposed() {
        let err = RestError::Internal("disk I/O error".to_string());
        let body = ErrorResponse::from(&err);
        assert_eq!(body.message, "Internal error");
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = RestError::from(ValidationError::MissingField("price"));
        assert_eq!(err.to_string(), "Missing required field: price");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
