//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::StoreError;
use blog_core::ports::PostStore;
use blog_infra::{DatabaseConfig, InMemoryPostStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }

    /// Build the state from configuration. A configured database that cannot be
    /// reached or initialized is an error; no database at all means in-memory mode.
    pub async fn from_config(db_config: Option<&DatabaseConfig>) -> Result<Self, StoreError> {
        let posts: Arc<dyn PostStore> = match db_config {
            Some(config) => Self::database_store(config).await?,
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostStore::new())
            }
        };

        tracing::info!("Application state initialized");
        Ok(Self::new(posts))
    }

    #[cfg(feature = "database")]
    async fn database_store(config: &DatabaseConfig) -> Result<Arc<dyn PostStore>, StoreError> {
        let db = blog_infra::database::connect(config).await?;
        Ok(Arc::new(blog_infra::SqlPostStore::new(db)))
    }

    #[cfg(not(feature = "database"))]
    async fn database_store(_config: &DatabaseConfig) -> Result<Arc<dyn PostStore>, StoreError> {
        tracing::warn!("Built without database feature - ignoring DATABASE_URL (in-memory mode).");
        Ok(Arc::new(InMemoryPostStore::new()))
    }
}
