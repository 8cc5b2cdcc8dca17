//! # Blog Infrastructure
//!
//! Concrete implementations of the `PostStore` port defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `database` (default) - SQLite and PostgreSQL store via SeaORM
//! - `minimal` - No external dependencies, in-memory store only

pub mod database;
pub mod posts;

pub use database::DatabaseConfig;
pub use posts::InMemoryPostStore;

#[cfg(feature = "database")]
pub use posts::SqlPostStore;
