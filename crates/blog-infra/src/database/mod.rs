//! Database connection management and schema setup.

mod connections;

#[cfg(feature = "database")]
pub mod entity;

pub use connections::{DatabaseConfig, PoolSettings};

#[cfg(feature = "database")]
pub use connections::{connect, init_schema};

#[cfg(feature = "database")]
#[cfg(test)]
mod tests;
