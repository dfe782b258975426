//! Employee detail store (single open record)

use std::sync::{Arc, Mutex};

use tokio_util::sync::CancellationToken;

use shared::models::{Employee, Service, ServiceDraft, ServiceUpdate};

use crate::editor::EmployeeField;
use crate::{ClientError, ClientResult, EmployeeApi};

use super::{EmployeeCache, ServiceManager};

const NO_OPEN: &str = "No employee is open";

/// Detail view over the shared cache, holding at most one open id
///
/// The fetch behind [`open`](Self::open) is cancellable: opening a
/// different id or calling [`close`](Self::close) aborts the in-flight
/// request, and a response arriving after cancellation is never
/// applied.
#[derive(Debug, Clone)]
pub struct EmployeeDetailStore {
    api: EmployeeApi,
    cache: EmployeeCache,
    slot: Arc<Mutex<OpenSlot>>,
}

#[derive(Debug)]
struct OpenSlot {
    id: Option<i64>,
    token: CancellationToken,
}

impl EmployeeDetailStore {
    pub fn new(api: EmployeeApi, cache: EmployeeCache) -> Self {
        Self {
            api,
            cache,
            slot: Arc::new(Mutex::new(OpenSlot {
                id: None,
                token: CancellationToken::new(),
            })),
        }
    }

    /// Open an employee: cancellable fetch of the full record.
    ///
    /// `Ok(None)` means the server answered with an empty detail
    /// (nonexistent id); the caller renders a placeholder, not stale
    /// data. `Err(Cancelled)` means navigation moved on first.
    pub async fn open(&self, id: i64) -> ClientResult<Option<Employee>> {
        let token = {
            let mut slot = self.slot.lock().unwrap();
            slot.token.cancel();
            slot.token = CancellationToken::new();
            slot.id = Some(id);
            slot.token.clone()
        };

        let fetched = tokio::select! {
            _ = token.cancelled() => {
                tracing::debug!(employee_id = id, "Detail fetch cancelled");
                return Err(ClientError::Cancelled);
            }
            res = self.api.fetch(id) => res,
        };

        // The slot may have moved on while the response was in flight
        {
            let mut slot = self.slot.lock().unwrap();
            if token.is_cancelled() || slot.id != Some(id) {
                tracing::debug!(employee_id = id, "Discarding stale detail response");
                return Err(ClientError::Cancelled);
            }
            // A failed open leaves nothing open rather than stale data
            if fetched.is_err() {
                slot.id = None;
            }
        }

        match fetched? {
            Some(employee) => {
                self.cache.upsert(employee.clone());
                Ok(Some(employee))
            }
            None => {
                // The server says the record does not exist; evict any
                // cached copy so the view is an empty placeholder
                tracing::debug!(employee_id = id, "Empty detail, evicting cached record");
                self.cache.remove(id);
                Ok(None)
            }
        }
    }

    /// Cancel any in-flight fetch and clear the open id
    pub fn close(&self) {
        let mut slot = self.slot.lock().unwrap();
        slot.token.cancel();
        slot.id = None;
    }

    /// Id of the currently open employee, if any
    pub fn open_id(&self) -> Option<i64> {
        self.slot.lock().unwrap().id
    }

    /// Snapshot of the open employee
    pub fn current(&self) -> Option<Employee> {
        let id = self.open_id()?;
        self.cache.get(id)
    }

    /// Shallow-merge one already-confirmed field value into the open
    /// record. No network call happens here; the field editor performs
    /// the PATCH and reports the result through this method.
    pub fn update_field(&self, field: EmployeeField, value: impl Into<String>) {
        let Some(id) = self.open_id() else {
            tracing::warn!("update_field with no open employee");
            return;
        };
        let value = value.into();
        self.cache.update_with(id, |employee| field.apply(employee, value));
    }

    /// Service collection manager scoped to the open employee
    pub fn services(&self) -> Option<ServiceManager> {
        let id = self.open_id()?;
        Some(ServiceManager::new(
            self.api.clone(),
            self.cache.clone(),
            id,
        ))
    }

    /// Create a service under the open employee
    pub async fn add_service(&self, draft: ServiceDraft) -> ClientResult<Service> {
        let manager = self
            .services()
            .ok_or_else(|| ClientError::NotFound(NO_OPEN.into()))?;
        manager.add(draft).await
    }

    /// Update a service of the open employee
    pub async fn edit_service(
        &self,
        service_id: i64,
        update: ServiceUpdate,
    ) -> ClientResult<Service> {
        let manager = self
            .services()
            .ok_or_else(|| ClientError::NotFound(NO_OPEN.into()))?;
        manager.edit(service_id, update).await
    }

    /// Delete a service of the open employee (optimistic, see
    /// [`ServiceManager::remove`])
    pub async fn delete_service(&self, service_id: i64) -> ClientResult<()> {
        let manager = self
            .services()
            .ok_or_else(|| ClientError::NotFound(NO_OPEN.into()))?;
        manager.remove(service_id).await;
        Ok(())
    }

    /// Delete the open employee; the server cascades its services.
    /// On success the record leaves the cache (roster included) and
    /// the store closes; the caller navigates away.
    pub async fn delete(&self) -> ClientResult<Employee> {
        let id = self
            .open_id()
            .ok_or_else(|| ClientError::NotFound(NO_OPEN.into()))?;
        let employee = self.api.remove(id).await?;
        tracing::debug!(employee_id = id, "Deleted employee");
        self.cache.remove(id);
        self.close();
        Ok(employee)
    }
}
