#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use blog_core::StoreError;
    use blog_core::domain::{PostChanges, PostDraft, PostId};
    use blog_core::ports::{Clock, ManualClock, PostStore};
    use chrono::{Duration, NaiveDate};

    use crate::database::{DatabaseConfig, connect, init_schema};
    use crate::posts::SqlPostStore;

    fn clock() -> Arc<ManualClock> {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_micro_opt(9, 15, 0, 654_321)
            .unwrap();
        Arc::new(ManualClock::new(start))
    }

    async fn store_with(clock: Arc<ManualClock>) -> SqlPostStore {
        let db = connect(&DatabaseConfig::new("sqlite::memory:"))
            .await
            .expect("in-memory sqlite");
        SqlPostStore::with_clock(db, clock)
    }

    #[tokio::test]
    async fn test_create_round_trips_through_sqlite() {
        let clock = clock();
        let store = store_with(clock.clone()).await;

        let created = store
            .create(PostDraft::new(
                "My First Post",
                "This is the content of my first post.",
            ))
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.created_at, clock.now());
        assert_eq!(created.created_at, created.updated_at);

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_list_returns_all_posts_by_id() {
        let store = store_with(clock()).await;
        assert!(store.list_all().await.unwrap().is_empty());

        for i in 0..3 {
            store
                .create(PostDraft::new(format!("Post {i}"), "body"))
                .await
                .unwrap();
        }

        let posts = store.list_all().await.unwrap();
        let ids: Vec<PostId> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(posts[2].title, "Post 2");
    }

    #[tokio::test]
    async fn test_update_keeps_created_at() {
        let clock = clock();
        let store = store_with(clock.clone()).await;
        let created = store.create(PostDraft::new("Title", "Body")).await.unwrap();

        clock.advance(Duration::minutes(5));
        let updated = store
            .update(created.id, PostChanges::default().content("Updated content."))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Title");
        assert_eq!(updated.content, "Updated content.");
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.updated_at, clock.now());
        assert_eq!(store.get(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = store_with(clock()).await;
        let result = store.update(7, PostChanges::default().title("x")).await;
        assert!(matches!(result, Err(StoreError::NotFound { id: 7 })));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let store = store_with(clock()).await;
        let post = store.create(PostDraft::new("a", "b")).await.unwrap();

        store.delete(post.id).await.unwrap();
        assert!(matches!(
            store.get(post.id).await,
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(
            store.delete(post.id).await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = store_with(clock()).await;
        store.create(PostDraft::new("first", "a")).await.unwrap();
        let second = store.create(PostDraft::new("second", "b")).await.unwrap();
        assert_eq!(second.id, 2);

        store.delete(second.id).await.unwrap();

        let third = store.create(PostDraft::new("third", "c")).await.unwrap();
        assert_eq!(third.id, 3);
        let ids: Vec<PostId> = store.list_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_rejected_create_persists_nothing() {
        let store = store_with(clock()).await;
        let draft = PostDraft {
            title: None,
            content: Some("body".to_string()),
        };

        assert!(matches!(
            store.create(draft).await,
            Err(StoreError::Validation(_))
        ));
        assert!(store.list_all().await.unwrap().is_empty());

        let post = store.create(PostDraft::new("", "")).await.unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(post.title, "");
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let db = connect(&DatabaseConfig::new("sqlite::memory:"))
            .await
            .unwrap();
        init_schema(&db).await.unwrap();
    }
}
