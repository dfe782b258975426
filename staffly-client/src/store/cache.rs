//! Normalized employee cache
//!
//! Canonical records keyed by id, shared between the list and detail
//! views. Execution is single-logical-thread (UI loop); the lock only
//! guards against overlapping borrows and is never held across an
//! await point.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use shared::models::{Employee, Service};

/// Shared, id-keyed employee cache
#[derive(Debug, Clone, Default)]
pub struct EmployeeCache {
    inner: Arc<RwLock<CacheInner>>,
}

#[derive(Debug, Default)]
struct CacheInner {
    employees: HashMap<i64, Employee>,
    /// Roster order as the server returned it, creations appended
    roster: Vec<i64>,
}

impl EmployeeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the roster with freshly listed records.
    ///
    /// List records carry no services; an already-cached detail record
    /// keeps its service collection instead of having it blanked.
    pub fn set_roster(&self, employees: Vec<Employee>) {
        let mut inner = self.inner.write().unwrap();
        inner.roster = employees.iter().map(|e| e.id).collect();
        for mut employee in employees {
            if employee.services.is_empty() {
                if let Some(existing) = inner.employees.get(&employee.id) {
                    employee.services = existing.services.clone();
                }
            }
            inner.employees.insert(employee.id, employee);
        }
    }

    /// Insert or replace a canonical record and make sure it is on the
    /// roster (append order)
    pub fn insert(&self, employee: Employee) {
        let mut inner = self.inner.write().unwrap();
        let id = employee.id;
        inner.employees.insert(id, employee);
        if !inner.roster.contains(&id) {
            inner.roster.push(id);
        }
    }

    /// Insert or replace a canonical record without touching the roster
    pub fn upsert(&self, employee: Employee) {
        let mut inner = self.inner.write().unwrap();
        inner.employees.insert(employee.id, employee);
    }

    /// Snapshot of one record
    pub fn get(&self, id: i64) -> Option<Employee> {
        self.inner.read().unwrap().employees.get(&id).cloned()
    }

    /// Roster snapshot in roster order
    pub fn roster(&self) -> Vec<Employee> {
        let inner = self.inner.read().unwrap();
        inner
            .roster
            .iter()
            .filter_map(|id| inner.employees.get(id).cloned())
            .collect()
    }

    /// Shallow-merge into one record; returns false if it is not cached
    pub fn update_with(&self, id: i64, f: impl FnOnce(&mut Employee)) -> bool {
        let mut inner = self.inner.write().unwrap();
        match inner.employees.get_mut(&id) {
            Some(employee) => {
                f(employee);
                true
            }
            None => false,
        }
    }

    /// Append a canonical service to its owner's collection.
    ///
    /// A duplicate id replaces the existing entry instead of producing
    /// a second one.
    pub fn push_service(&self, service: Service) {
        let mut inner = self.inner.write().unwrap();
        let Some(employee) = inner.employees.get_mut(&service.employee_id) else {
            tracing::warn!(
                employee_id = service.employee_id,
                service_id = service.id,
                "Dropping service for uncached employee"
            );
            return;
        };
        if let Some(existing) = employee.services.iter_mut().find(|s| s.id == service.id) {
            tracing::warn!(service_id = service.id, "Duplicate service id, replacing");
            *existing = service;
        } else {
            employee.services.push(service);
        }
    }

    /// Replace the matching service in place, order preserved.
    /// A service the cache has never seen is ignored.
    pub fn replace_service(&self, service: Service) {
        let mut inner = self.inner.write().unwrap();
        let Some(employee) = inner.employees.get_mut(&service.employee_id) else {
            return;
        };
        match employee.services.iter_mut().find(|s| s.id == service.id) {
            Some(existing) => *existing = service,
            None => {
                tracing::warn!(service_id = service.id, "Edited service not in cache");
            }
        }
    }

    /// Drop a service from its owner's collection
    pub fn remove_service(&self, employee_id: i64, service_id: i64) -> bool {
        let mut inner = self.inner.write().unwrap();
        let Some(employee) = inner.employees.get_mut(&employee_id) else {
            return false;
        };
        let before = employee.services.len();
        employee.services.retain(|s| s.id != service_id);
        employee.services.len() != before
    }

    /// Drop an employee record and its roster entry
    pub fn remove(&self, id: i64) -> Option<Employee> {
        let mut inner = self.inner.write().unwrap();
        inner.roster.retain(|&r| r != id);
        inner.employees.remove(&id)
    }
}
