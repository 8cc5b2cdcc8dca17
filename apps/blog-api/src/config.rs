//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server on the in-memory store.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| {
            let defaults = DatabaseConfig::new(url);
            DatabaseConfig {
                max_connections: parse_var("DB_MAX_CONNECTIONS")
                    .unwrap_or(defaults.max_connections),
                min_connections: parse_var("DB_MIN_CONNECTIONS")
                    .unwrap_or(defaults.min_connections),
                ..defaults
            }
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
