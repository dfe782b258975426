//! Shared types for staffly
//!
//! Wire-level data models and error types used by both the client
//! synchronization layer and the mock persistence API.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult};
pub use serde::{Deserialize, Serialize};
