//! # Blog Shared
//!
//! Wire types for the blog API: request and response bodies and the
//! RFC 7807 error document.

pub mod dto;
pub mod field;
pub mod response;

pub use field::Field;
pub use response::{ErrorResponse, MessageResponse};
