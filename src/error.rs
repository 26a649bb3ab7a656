//! Error types shared by the storage, service, and HTTP layers.
//!
//! - [`StoreError`] is raised by repository backends.
//! - [`AppError`] is what services return and handlers turn into responses.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

/// Errors that can occur while talking to the key-value store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),
    #[error("store command failed: {0}")]
    Command(String),
    #[error("store value is invalid: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Application error surfaced to HTTP handlers.
///
/// `NotFound` covers both "alias never existed" and "alias expired"; the
/// store gives no way to tell them apart.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Validation { message: String },
    #[error("{message}")]
    StoreUnavailable { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        error!("Store error: {}", e);
        AppError::store_unavailable(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(e.to_string())
    }
}

/// The "oops" page rendered for every not-found outcome.
///
/// Renders `templates/oops.html`.
#[derive(Template, WebTemplate)]
#[template(path = "oops.html")]
pub struct OopsTemplate {}

/// Renders the oops page with a 404 status.
///
/// Also installed as the router fallback so unmatched routes look the same
/// as unknown aliases.
pub async fn not_found_page() -> Response {
    (StatusCode::NOT_FOUND, OopsTemplate {}).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound { message } => {
                warn!("Not found: {}", message);
                (StatusCode::NOT_FOUND, OopsTemplate {}).into_response()
            }
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message).into_response(),
            AppError::StoreUnavailable { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Storage backend unavailable",
            )
                .into_response(),
            AppError::Internal { message } => {
                error!("Internal error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_maps_to_store_unavailable() {
        let err: AppError = StoreError::Connection("refused".to_string()).into();
        assert!(matches!(err, AppError::StoreUnavailable { .. }));
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::not_found("x").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::bad_request("x").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::store_unavailable("x").into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::internal("x").into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
