//! # Blog Core
//!
//! The domain layer of the blog service: the `Post` entity, the rules for
//! creating and partially updating it, and the ports a post store must implement.
//! This crate has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::StoreError;
