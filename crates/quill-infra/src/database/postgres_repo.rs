//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DbConn, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Select,
};

use quill_core::domain::{Post, PostFields};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository over an injected connection pool.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Exact-match condition over every supplied field; empty matches all rows.
pub(crate) fn filter_condition(fields: &PostFields) -> Result<Condition, RepoError> {
    let mut condition = Condition::all();

    if let Some(id) = fields.parsed_id()? {
        condition = condition.add(post::Column::Id.eq(id));
    }
    if let Some(title) = &fields.title {
        condition = condition.add(post::Column::Title.eq(title.as_str()));
    }
    if let Some(content) = &fields.content {
        condition = condition.add(post::Column::Content.eq(content.as_str()));
    }
    if let Some(date) = fields.date {
        condition = condition.add(post::Column::Date.eq(DateTimeWithTimeZone::from(date)));
    }
    if let Some(author) = &fields.author {
        condition = condition.add(post::Column::Author.eq(author.as_str()));
    }

    Ok(condition)
}

pub(crate) fn filtered(fields: &PostFields) -> Result<Select<PostEntity>, RepoError> {
    Ok(PostEntity::find()
        .filter(filter_condition(fields)?)
        .order_by_asc(post::Column::Date)
        .order_by_asc(post::Column::Id))
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::RecordNotUpdated => RepoError::NotFound,
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create_post(&self, fields: PostFields) -> Result<Post, RepoError> {
        let post = Post::from_fields(fields)?;
        tracing::debug!(post_id = %post.id, "Creating post");

        let active_model: post::ActiveModel = post.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update_post(&self, fields: PostFields) -> Result<Post, RepoError> {
        let post = Post::from_fields(fields)?;
        tracing::debug!(post_id = %post.id, "Updating post");

        let mut active_model: post::ActiveModel = post.into();
        // The creation date is written once, on insert.
        active_model.date = ActiveValue::NotSet;

        let model = active_model.update(&self.db).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn find_post(&self, fields: PostFields) -> Result<Option<Post>, RepoError> {
        tracing::debug!(filter = ?fields, "Finding post");

        let result = filtered(&fields)?
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn get_all_posts(&self, fields: PostFields) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(filter = ?fields, "Listing posts");

        let result = filtered(&fields)?
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
