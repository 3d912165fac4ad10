use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RepoError;

/// Post entity - a single document in the `posts` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
    /// Reference to a `users` document, kept as the client sent it.
    /// Existence is not checked.
    pub author: String,
}

/// Post attributes exactly as a client sent them.
///
/// The same shape is used as the source of a new document (create, update)
/// and as an exact-match filter (find, list). Every attribute is optional and
/// `_id`/`author` are opaque text here; the schema rules in
/// [`Post::from_fields`] decide what is required and what a valid id is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostFields {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Post {
    /// Build a document from client fields, applying the schema.
    ///
    /// `title`, `content` and `author` are required; an empty string counts as
    /// missing. `id` and `date` are defaulted when absent, and a supplied `_id`
    /// must be a valid id.
    pub fn from_fields(fields: PostFields) -> Result<Self, RepoError> {
        let id = fields.parsed_id()?;
        let title = required_text(fields.title, "title")?;
        let content = required_text(fields.content, "content")?;
        let author = required_text(fields.author, "author")?;

        Ok(Self {
            id: id.unwrap_or_else(Uuid::new_v4),
            title,
            content,
            date: fields.date.unwrap_or_else(Utc::now),
            author,
        })
    }
}

fn required_text(value: Option<String>, field: &str) -> Result<String, RepoError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(RepoError::required(field)),
    }
}

impl PostFields {
    /// True when no attribute is set, i.e. the filter matches every post.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// The supplied `_id`, parsed. Text that is not an id is a validation
    /// error, whether the fields build a document or filter them.
    pub fn parsed_id(&self) -> Result<Option<Uuid>, RepoError> {
        self.id
            .as_deref()
            .map(|id| {
                Uuid::parse_str(id)
                    .map_err(|_| RepoError::Validation(format!("`_id` is not a valid id: {id}")))
            })
            .transpose()
    }

    /// Exact-match test of every supplied attribute against `post`.
    pub fn matches(&self, post: &Post) -> bool {
        self.id
            .as_deref()
            .is_none_or(|id| Uuid::parse_str(id).is_ok_and(|id| id == post.id))
            && self.title.as_ref().is_none_or(|t| *t == post.title)
            && self.content.as_ref().is_none_or(|c| *c == post.content)
            && self.date.is_none_or(|d| d == post.date)
            && self.author.as_ref().is_none_or(|a| *a == post.author)
    }
}

impl From<Post> for PostFields {
    fn from(post: Post) -> Self {
        Self {
            id: Some(post.id.to_string()),
            title: Some(post.title),
            content: Some(post.content),
            date: Some(post.date),
            author: Some(post.author),
        }
    }
}
