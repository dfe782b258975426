//! Service collection manager
//!
//! Create/update/delete of services scoped to one employee, with the
//! reconciliation rules the collection invariants require: add and
//! edit apply the canonical server response on success only; delete
//! removes the local entry before the request and does not roll back
//! on failure.

use shared::models::{Service, ServiceCreate, ServiceDraft, ServiceUpdate};

use crate::{ClientError, ClientResult, EmployeeApi};

use super::EmployeeCache;

/// Mutation operations for one employee's service collection
#[derive(Debug, Clone)]
pub struct ServiceManager {
    api: EmployeeApi,
    cache: EmployeeCache,
    employee_id: i64,
}

impl ServiceManager {
    pub fn new(api: EmployeeApi, cache: EmployeeCache, employee_id: i64) -> Self {
        Self {
            api,
            cache,
            employee_id,
        }
    }

    pub fn employee_id(&self) -> i64 {
        self.employee_id
    }

    /// Create a service; the canonical record (server-assigned id) is
    /// appended to the collection on success, nothing changes on
    /// failure.
    ///
    /// Validation here is presence-only; the server is the authority
    /// on required fields.
    pub async fn add(&self, draft: ServiceDraft) -> ClientResult<Service> {
        if draft.name.is_empty() || draft.description.is_none() {
            return Err(ClientError::Validation("Missing required fields".into()));
        }

        let payload = ServiceCreate {
            name: draft.name,
            description: draft.description,
            duration: draft.duration,
            time_offset: draft.time_offset,
            price: draft.price,
            employee_id: self.employee_id,
        };

        let service = self.api.create_service(&payload).await?;
        tracing::debug!(
            service_id = service.id,
            employee_id = self.employee_id,
            "Created service"
        );
        self.cache.push_service(service.clone());
        Ok(service)
    }

    /// Update a service; the matching entry is replaced in place on
    /// success (order preserved), nothing changes on failure.
    pub async fn edit(&self, service_id: i64, update: ServiceUpdate) -> ClientResult<Service> {
        let service = self
            .api
            .update_service(self.employee_id, service_id, &update)
            .await?;
        self.cache.replace_service(service.clone());
        Ok(service)
    }

    /// Delete a service, optimistically: the entry leaves the local
    /// collection before the request goes out, and a failed request is
    /// logged but not compensated.
    pub async fn remove(&self, service_id: i64) {
        self.cache.remove_service(self.employee_id, service_id);

        if let Err(err) = self.api.remove_service(self.employee_id, service_id).await {
            tracing::warn!(
                service_id,
                employee_id = self.employee_id,
                error = %err,
                "Service delete failed after optimistic removal"
            );
        }
    }
}
