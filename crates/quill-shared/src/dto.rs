//! Data Transfer Objects - response types for the API.

use serde::{Deserialize, Serialize};

/// Placeholder returned as `content` by the find endpoint.
pub const PLACEHOLDER_CONTENT: &str = "Random content";

/// Placeholder returned as `author` by the find endpoint.
pub const PLACEHOLDER_AUTHOR: &str = "stswenguser";

/// Body of `GET /posts/find`.
///
/// Only `title` comes from the stored post; `content` and `author` are fixed
/// placeholders whatever the document holds. Unlike every other endpoint this
/// is not a pass-through, and clients already depend on the shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummaryResponse {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl PostSummaryResponse {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: PLACEHOLDER_CONTENT.to_string(),
            author: PLACEHOLDER_AUTHOR.to_string(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// `up`, `down` or `disabled` (in-memory store).
    pub database: String,
    pub timestamp: String,
}
