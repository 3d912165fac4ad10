use async_trait::async_trait;

use crate::domain::{Post, PostFields};
use crate::error::RepoError;

/// Post repository - the four datastore operations behind the HTTP API.
///
/// Every operation takes the client's fields verbatim. Only `create_post` and
/// `update_post` write.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Build a document from `fields`, persist it and return what was stored.
    async fn create_post(&self, fields: PostFields) -> Result<Post, RepoError>;

    /// Build a document from `fields` and overwrite the stored post with the
    /// same id. `date` is never rewritten.
    ///
    /// The target is taken from `fields` itself, so a body without `_id`
    /// matches nothing and fails with [`RepoError::NotFound`].
    async fn update_post(&self, fields: PostFields) -> Result<Post, RepoError>;

    /// First post matching every supplied field exactly.
    async fn find_post(&self, fields: PostFields) -> Result<Option<Post>, RepoError>;

    /// All posts matching every supplied field, oldest first.
    async fn get_all_posts(&self, fields: PostFields) -> Result<Vec<Post>, RepoError>;
}
