//! Data models
//!
//! Shared between the client stores and the mock persistence API.
//! All IDs are `i64` (server-assigned, autoincrement).

pub mod employee;
pub mod service;

// Re-exports
pub use employee::*;
pub use service::*;
