//! Employee list store (roster view)

use shared::models::{Employee, EmployeeCreate};

use crate::{ClientResult, EmployeeApi};

use super::EmployeeCache;

/// Roster view over the shared cache
///
/// Loads the roster once; searching is client-side, no round trip per
/// keystroke.
#[derive(Debug, Clone)]
pub struct EmployeeListStore {
    api: EmployeeApi,
    cache: EmployeeCache,
}

impl EmployeeListStore {
    pub fn new(api: EmployeeApi, cache: EmployeeCache) -> Self {
        Self { api, cache }
    }

    /// Fetch the roster and reconcile it into the cache
    pub async fn load(&self) -> ClientResult<Vec<Employee>> {
        let employees = self.api.list().await?;
        tracing::debug!(count = employees.len(), "Loaded employee roster");
        self.cache.set_roster(employees);
        Ok(self.cache.roster())
    }

    /// Current roster snapshot
    pub fn employees(&self) -> Vec<Employee> {
        self.cache.roster()
    }

    /// Case-insensitive substring filter on name
    pub fn search(&self, query: &str) -> Vec<Employee> {
        let needle = query.to_lowercase();
        self.cache
            .roster()
            .into_iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Create an employee (optionally with nested service drafts) and
    /// append the canonical record to the roster
    pub async fn create(&self, payload: &EmployeeCreate) -> ClientResult<Employee> {
        let employee = self.api.create(payload).await?;
        tracing::debug!(employee_id = employee.id, "Created employee");
        self.cache.insert(employee.clone());
        Ok(employee)
    }

    /// Append a record created elsewhere
    pub fn insert(&self, employee: Employee) {
        self.cache.insert(employee);
    }
}
