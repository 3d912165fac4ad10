#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres_repo::{PostgresPostRepository, filtered};
    use quill_core::domain::{Post, PostFields};
    use quill_core::error::RepoError;
    use quill_core::ports::PostRepository;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, QueryTrait};

    fn model(title: &str) -> post::Model {
        post::Model {
            id: uuid::Uuid::new_v4(),
            title: title.to_owned(),
            content: "Random content".to_owned(),
            date: chrono::Utc::now().into(),
            author: "stswenguser".to_owned(),
        }
    }

    fn fields_of(model: &post::Model) -> PostFields {
        PostFields {
            id: Some(model.id.to_string()),
            title: Some(model.title.clone()),
            content: Some(model.content.clone()),
            date: None,
            author: Some(model.author.clone()),
        }
    }

    #[tokio::test]
    async fn test_create_post_returns_stored_row() {
        let stored = model("My first test post");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored.clone()]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let post: Post = repo.create_post(fields_of(&stored)).await.unwrap();

        assert_eq!(post.id, stored.id);
        assert_eq!(post.title, "My first test post");
        assert_eq!(post.author, stored.author);
    }

    #[tokio::test]
    async fn test_create_post_validates_before_querying() {
        // No results queued: reaching the database would fail differently.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = PostgresPostRepository::new(db);

        let result = repo
            .create_post(PostFields {
                title: Some("t1".to_owned()),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(RepoError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_post_without_match_is_not_found() {
        let target = model("t1");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let result = repo.update_post(fields_of(&target)).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_post_returns_updated_row() {
        let updated = model("Updated My first test post");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![updated.clone()]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let post = repo.update_post(fields_of(&updated)).await.unwrap();

        assert_eq!(post.title, updated.title);
        assert_eq!(post.date, chrono::DateTime::<chrono::Utc>::from(updated.date));
    }

    #[tokio::test]
    async fn test_find_post_by_title() {
        let stored = model("Test Post");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored.clone()]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let filter = PostFields {
            title: Some("Test Post".to_owned()),
            ..Default::default()
        };

        let result = repo.find_post(filter).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, stored.id);
    }

    #[tokio::test]
    async fn test_get_all_posts_keeps_order() {
        let rows = vec![model("first"), model("second"), model("third")];
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![rows.clone()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let posts = repo.get_all_posts(PostFields::default()).await.unwrap();

        let ids: Vec<_> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, rows.iter().map(|r| r.id).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_query_error_is_reported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("boom".to_owned())])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let result = repo.get_all_posts(PostFields::default()).await;

        assert!(matches!(result, Err(RepoError::Query(_))));
    }

    #[test]
    fn test_filter_uses_only_supplied_fields() {
        let everything = filtered(&PostFields::default())
            .unwrap()
            .build(DatabaseBackend::Postgres)
            .to_string();
        assert!(everything.contains("WHERE TRUE"));
        assert!(!everything.contains(r#""posts"."title" ="#));
        assert!(everything.contains(r#"ORDER BY "posts"."date" ASC"#));

        let by_title = filtered(&PostFields {
            title: Some("t1".to_owned()),
            ..Default::default()
        })
        .unwrap()
        .build(DatabaseBackend::Postgres)
        .to_string();
        assert!(by_title.contains(r#""posts"."title" = 't1'"#));
        assert!(!by_title.contains(r#""posts"."content" ="#));

        let by_author = filtered(&PostFields {
            author: Some("u".to_owned()),
            ..Default::default()
        })
        .unwrap()
        .build(DatabaseBackend::Postgres)
        .to_string();
        assert!(by_author.contains(r#""posts"."author" = 'u'"#));
    }

    #[tokio::test]
    async fn test_malformed_id_is_rejected_before_querying() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = PostgresPostRepository::new(db);

        let filter = PostFields {
            id: Some("not-an-id".to_owned()),
            ..Default::default()
        };
        assert!(matches!(
            repo.find_post(filter).await,
            Err(RepoError::Validation(_))
        ));
    }
}
