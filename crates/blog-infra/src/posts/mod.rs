//! Post store implementations - SQL database and in-memory fallback.

mod memory;

#[cfg(feature = "database")]
mod sql;

pub use memory::InMemoryPostStore;

#[cfg(feature = "database")]
pub use sql::SqlPostStore;
