//! In-memory post repository - used as fallback when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{Post, PostFields};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

/// In-memory post store behind an async RwLock.
///
/// Applies the same schema and matching rules as the PostgreSQL repository.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }

    fn matching(store: &[Post], fields: &PostFields) -> Result<Vec<Post>, RepoError> {
        fields.parsed_id()?;

        let mut posts: Vec<Post> = store
            .iter()
            .filter(|post| fields.matches(post))
            .cloned()
            .collect();
        posts.sort_by_key(|post| (post.date, post.id));
        Ok(posts)
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create_post(&self, fields: PostFields) -> Result<Post, RepoError> {
        let post = Post::from_fields(fields)?;
        let mut store = self.store.write().await;

        if store.iter().any(|existing| existing.id == post.id) {
            return Err(RepoError::Query(format!("duplicate key: {}", post.id)));
        }

        tracing::debug!(post_id = %post.id, "Creating post (in-memory)");
        store.push(post.clone());
        Ok(post)
    }

    async fn update_post(&self, fields: PostFields) -> Result<Post, RepoError> {
        let post = Post::from_fields(fields)?;
        let mut store = self.store.write().await;

        let existing = store
            .iter_mut()
            .find(|existing| existing.id == post.id)
            .ok_or(RepoError::NotFound)?;

        tracing::debug!(post_id = %post.id, "Updating post (in-memory)");
        existing.title = post.title;
        existing.content = post.content;
        existing.author = post.author;
        Ok(existing.clone())
    }

    async fn find_post(&self, fields: PostFields) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(Self::matching(&store, &fields)?.into_iter().next())
    }

    async fn get_all_posts(&self, fields: PostFields) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Self::matching(&store, &fields)
    }
}
