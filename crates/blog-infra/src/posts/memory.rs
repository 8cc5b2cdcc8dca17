//! In-memory post store - used when no database is configured.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::StoreError;
use blog_core::domain::{Post, PostChanges, PostDraft, PostId};
use blog_core::ports::{Clock, PostStore, SystemClock};

struct Table {
    next_id: PostId,
    rows: BTreeMap<PostId, Post>,
}

/// Post table held in a `BTreeMap` behind an async RwLock.
///
/// Ids start at 1 and are never reused, even after a delete.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    table: RwLock<Table>,
    clock: Arc<dyn Clock>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
            clock,
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: PostId) -> Result<Post, StoreError> {
        let table = self.table.read().await;
        table
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, StoreError> {
        let new_post = draft.validate()?;

        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let post = Post::create(id, new_post, self.clock.now());
        table.rows.insert(id, post.clone());

        tracing::debug!(post_id = id, "Post created");
        Ok(post)
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Post, StoreError> {
        let mut table = self.table.write().await;
        let post = table
            .rows
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;

        changes.apply(post, self.clock.now());

        tracing::debug!(post_id = id, "Post updated");
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&id)
            .ok_or(StoreError::NotFound { id })?;

        tracing::debug!(post_id = id, "Post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::ports::ManualClock;
    use chrono::{Duration, NaiveDate};

    fn clock() -> Arc<ManualClock> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_micro_opt(10, 0, 0, 123_456)
            .unwrap();
        Arc::new(ManualClock::new(start))
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = InMemoryPostStore::new();
        let created = store
            .create(PostDraft::new("My First Post", "Hello"))
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.created_at, created.updated_at);

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let store = InMemoryPostStore::new();
        assert!(matches!(
            store.get(42).await,
            Err(StoreError::NotFound { id: 42 })
        ));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let store = InMemoryPostStore::new();
        assert!(store.list_all().await.unwrap().is_empty());

        for i in 0..5 {
            store
                .create(PostDraft::new(format!("Post {i}"), "body"))
                .await
                .unwrap();
        }

        let ids: Vec<PostId> = store.list_all().await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_update_is_partial_and_refreshes_updated_at() {
        let clock = clock();
        let store = InMemoryPostStore::with_clock(clock.clone());
        let created = store.create(PostDraft::new("Title", "Body")).await.unwrap();

        clock.advance(Duration::seconds(3));
        let updated = store
            .update(created.id, PostChanges::default().title("Updated Title"))
            .await
            .unwrap();

        assert_eq!(updated.title, "Updated Title");
        assert_eq!(updated.content, "Body");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(store.get(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = InMemoryPostStore::new();
        let result = store.update(9, PostChanges::default().title("x")).await;
        assert!(matches!(result, Err(StoreError::NotFound { id: 9 })));
    }

    #[tokio::test]
    async fn test_delete_removes_post() {
        let store = InMemoryPostStore::new();
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
        let store = InMemoryPostStore::new();
        let first = store.create(PostDraft::new("a", "b")).await.unwrap();
        store.delete(first.id).await.unwrap();

        let second = store.create(PostDraft::new("c", "d")).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_rejected_create_does_not_consume_id() {
        let store = InMemoryPostStore::new();
        let draft = PostDraft {
            title: Some("only a title".to_string()),
            content: None,
        };
        assert!(matches!(
            store.create(draft).await,
            Err(StoreError::Validation(_))
        ));
        assert!(store.list_all().await.unwrap().is_empty());

        let post = store.create(PostDraft::new("a", "b")).await.unwrap();
        assert_eq!(post.id, 1);
    }
}
