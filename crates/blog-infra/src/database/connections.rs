use std::time::Duration;

#[cfg(feature = "database")]
use blog_core::StoreError;
#[cfg(feature = "database")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

#[cfg(feature = "database")]
use super::entity::post;

/// Idle timeout and lifetime for the single in-memory SQLite connection.
/// Closing that connection drops the database, so it must outlive the process.
const IN_MEMORY_KEEPALIVE: Duration = Duration::from_secs(u32::MAX as u64);

/// Pool sizing and connection recycling derived from a [`DatabaseConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

/// Configuration for the post database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
        }
    }

    /// Every pooled connection to `sqlite::memory:` would see its own empty
    /// database, so such URLs get exactly one connection.
    pub fn is_in_memory_sqlite(&self) -> bool {
        self.url.starts_with("sqlite:") && self.url.contains(":memory:")
    }

    /// In-memory SQLite gets one connection that is never reaped; a
    /// replacement connection would open a fresh, empty database.
    pub fn pool_settings(&self) -> PoolSettings {
        if self.is_in_memory_sqlite() {
            PoolSettings {
                max_connections: 1,
                min_connections: 1,
                idle_timeout: IN_MEMORY_KEEPALIVE,
                max_lifetime: IN_MEMORY_KEEPALIVE,
            }
        } else {
            PoolSettings {
                max_connections: self.max_connections,
                min_connections: self.min_connections,
                idle_timeout: Duration::from_secs(300),
                max_lifetime: Duration::from_secs(30 * 60),
            }
        }
    }

    #[cfg(feature = "database")]
    fn connect_options(&self) -> ConnectOptions {
        let pool = self.pool_settings();

        ConnectOptions::new(&self.url)
            .max_connections(pool.max_connections)
            .min_connections(pool.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(pool.idle_timeout)
            .max_lifetime(pool.max_lifetime)
            .sqlx_logging(false)
            .to_owned()
    }
}

/// Connect to the configured database and make sure the posts table exists.
#[cfg(feature = "database")]
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, StoreError> {
    tracing::info!("Initializing database connection...");

    let db = Database::connect(config.connect_options())
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;
    tracing::info!(
        backend = ?db.get_database_backend(),
        pool = config.max_connections,
        "Database connected"
    );

    init_schema(&db).await?;
    Ok(db)
}

/// Create the posts table if it is not there yet.
#[cfg(feature = "database")]
pub async fn init_schema(db: &DbConn) -> Result<(), StoreError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(post::Entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt))
        .await
        .map_err(|e: DbErr| StoreError::Query(e.to_string()))?;

    tracing::debug!("Posts table ready");
    Ok(())
}
