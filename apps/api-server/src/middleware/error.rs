//! Error handling - every failure becomes a bare 500.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use quill_core::error::RepoError;

/// Application-level error type.
///
/// The variants only exist for the log line. Clients always get
/// `500 Internal Server Error` with an empty body, so "not found",
/// "bad input" and "database unreachable" look identical from outside.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepoError),

    #[error("No post matched the filter")]
    NoMatch,

    #[error("Unreadable request payload: {0}")]
    Payload(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(error = %self, "Request failed");
        HttpResponse::build(self.status_code()).finish()
    }
}

/// JSON body settings routing extraction failures through [`AppError`].
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::Payload(err.to_string()).into())
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
