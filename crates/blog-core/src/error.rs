//! Store-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Errors surfaced by a [`PostStore`](crate::ports::PostStore).
///
/// `NotFound` and `Validation` are expected outcomes of a request. The remaining
/// variants come from the storage engine and are not recoverable by the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Post with id {id} not found")]
    NotFound { id: PostId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}

impl StoreError {
    /// Whether this error is an expected request outcome rather than a storage fault.
    pub fn is_expected(&self) -> bool {
        matches!(self, StoreError::NotFound { .. } | StoreError::Validation(_))
    }
}
