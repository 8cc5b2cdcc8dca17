use chrono::NaiveDateTime;

use crate::error::StoreError;

/// Post identifier, assigned by the store.
pub type PostId = i32;

/// Server-assigned timestamp. Always UTC, microsecond resolution, no offset.
pub type Timestamp = NaiveDateTime;

/// Post entity - a blog post as persisted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Post {
    /// Materialize a freshly created post. Both timestamps are `now`.
    pub fn create(id: PostId, new_post: NewPost, now: Timestamp) -> Self {
        Self {
            id,
            title: new_post.title,
            content: new_post.content,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A create request as received, before the required fields are checked.
///
/// `None` means the field was not supplied at all. An empty string is a
/// supplied value and passes validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Check that both required fields are present.
    pub fn validate(self) -> Result<NewPost, StoreError> {
        match (self.title, self.content) {
            (Some(title), Some(content)) => Ok(NewPost { title, content }),
            _ => Err(StoreError::Validation(
                "Title and content are required.".to_string(),
            )),
        }
    }
}

/// A validated create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

/// Partial update. `None` leaves the corresponding field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Apply the changes and stamp `updated_at`.
    ///
    /// `updated_at` is refreshed even when no field changes, and never moves
    /// backwards. `id` and `created_at` are left alone.
    pub fn apply(self, post: &mut Post, now: Timestamp) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        post.updated_at = now.max(post.updated_at);
    }
}
