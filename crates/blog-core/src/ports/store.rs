use async_trait::async_trait;

use crate::domain::{Post, PostChanges, PostDraft, PostId};
use crate::error::StoreError;

/// Post store - the single owner of post rows, id assignment and timestamps.
///
/// Every read hands back an owned snapshot; callers never share mutable state
/// with the store.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, ordered by ascending id.
    async fn list_all(&self) -> Result<Vec<Post>, StoreError>;

    /// Fetch one post, or `NotFound`.
    async fn get(&self, id: PostId) -> Result<Post, StoreError>;

    /// Validate the draft, allocate the next id and persist the post with
    /// `created_at == updated_at == now`. A rejected draft does not consume an id.
    async fn create(&self, draft: PostDraft) -> Result<Post, StoreError>;

    /// Apply a partial update and refresh `updated_at`, or `NotFound`.
    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Post, StoreError>;

    /// Remove the post permanently, or `NotFound`.
    async fn delete(&self, id: PostId) -> Result<(), StoreError>;
}
