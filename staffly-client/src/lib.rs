//! staffly client - resource synchronization over the persistence API
//!
//! Keeps a normalized in-memory cache of employee records (with their
//! nested service collections) live across partial-field edits, nested
//! creates, and cascading deletes, without re-fetching the graph after
//! a mutation.

pub mod api;
pub mod config;
pub mod editor;
pub mod error;
pub mod http;
pub mod store;

pub use api::EmployeeApi;
pub use config::ClientConfig;
pub use editor::{EditorState, EmployeeField, FieldEditor};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use store::{EmployeeCache, EmployeeDetailStore, EmployeeListStore, ServiceManager};
