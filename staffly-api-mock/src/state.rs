//! Mock server state

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use shared::models::Employee;

/// Shared in-memory store behind the mock API
///
/// Employees are kept fully materialized (services inline) in a map
/// keyed by id. The lock is never held across an await point.
#[derive(Clone)]
pub struct MockState {
    inner: Arc<Inner>,
}

struct Inner {
    employees: RwLock<HashMap<i64, Employee>>,
    next_employee_id: AtomicI64,
    next_service_id: AtomicI64,
    token: String,
    /// Artificial per-request delay, used by cancellation tests
    latency: RwLock<Option<Duration>>,
}

impl MockState {
    /// Create a state that accepts the given bearer token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                employees: RwLock::new(HashMap::new()),
                next_employee_id: AtomicI64::new(1),
                next_service_id: AtomicI64::new(1),
                token: token.into(),
                latency: RwLock::new(None),
            }),
        }
    }

    /// The bearer token every request must present
    pub fn token(&self) -> &str {
        &self.inner.token
    }

    /// Delay every subsequent request by `delay`
    pub fn set_latency(&self, delay: Duration) {
        *self.inner.latency.write().unwrap() = Some(delay);
    }

    /// Remove any configured request delay
    pub fn clear_latency(&self) {
        *self.inner.latency.write().unwrap() = None;
    }

    pub(crate) fn latency(&self) -> Option<Duration> {
        *self.inner.latency.read().unwrap()
    }

    pub(crate) fn next_employee_id(&self) -> i64 {
        self.inner.next_employee_id.fetch_add(1, Ordering::Relaxed)
    }

    pub(crate) fn next_service_id(&self) -> i64 {
        self.inner.next_service_id.fetch_add(1, Ordering::Relaxed)
    }

    pub(crate) fn with_employees<R>(&self, f: impl FnOnce(&HashMap<i64, Employee>) -> R) -> R {
        f(&self.inner.employees.read().unwrap())
    }

    pub(crate) fn with_employees_mut<R>(
        &self,
        f: impl FnOnce(&mut HashMap<i64, Employee>) -> R,
    ) -> R {
        f(&mut self.inner.employees.write().unwrap())
    }
}
