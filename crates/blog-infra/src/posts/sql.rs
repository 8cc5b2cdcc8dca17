//! SQL post store backed by SeaORM.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, QueryOrder, TransactionTrait,
};

use blog_core::StoreError;
use blog_core::domain::{Post, PostChanges, PostDraft, PostId};
use blog_core::ports::{Clock, PostStore, SystemClock};

use crate::database::entity::post::{self, Entity as PostEntity};

/// Post store over a single `posts` table.
///
/// Atomicity and concurrent-writer serialization come from the database itself.
pub struct SqlPostStore {
    db: DbConn,
    clock: Arc<dyn Clock>,
}

impl SqlPostStore {
    pub fn new(db: DbConn) -> Self {
        Self::with_clock(db, Arc::new(SystemClock))
    }

    pub fn with_clock(db: DbConn, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }
}

fn map_db_err(err: DbErr) -> StoreError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StoreError::Connection(err.to_string()),
        _ => StoreError::Query(err.to_string()),
    }
}

#[async_trait]
impl PostStore for SqlPostStore {
    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let rows = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: PostId) -> Result<Post, StoreError> {
        PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .map(Into::into)
            .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, StoreError> {
        let new_post = draft.validate()?;

        let model = post::ActiveModel::for_insert(new_post, self.clock.now())
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "Post created");
        Ok(model.into())
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Post, StoreError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let mut post: Post = PostEntity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(StoreError::NotFound { id })?
            .into();

        changes.apply(&mut post, self.clock.now());

        let model = post::ActiveModel::from(post)
            .update(&txn)
            .await
            .map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(post_id = id, "Post updated");
        Ok(model.into())
    }

    async fn delete(&self, id: PostId) -> Result<(), StoreError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound { id });
        }

        tracing::debug!(post_id = id, "Post deleted");
        Ok(())
    }
}
