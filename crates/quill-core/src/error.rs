//! Repository-level error types.

use thiserror::Error;

/// Repository errors.
///
/// Callers over HTTP never see these variants; they exist so the failure can
/// be logged with some context before it collapses into a generic 500.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("No matching post")]
    NotFound,
}

impl RepoError {
    pub(crate) fn required(field: &str) -> Self {
        RepoError::Validation(format!("`{}` is required", field))
    }
}
