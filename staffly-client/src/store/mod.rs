//! In-memory stores over the persistence API
//!
//! One normalized [`EmployeeCache`] keyed by employee id, with the
//! list and detail stores as views over it: a mutation reconciled by
//! either view is observed by both.

mod cache;
mod detail;
mod list;
mod services;

pub use cache::EmployeeCache;
pub use detail::EmployeeDetailStore;
pub use list::EmployeeListStore;
pub use services::ServiceManager;
