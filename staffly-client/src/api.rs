//! Typed endpoint wrappers over the persistence API
//!
//! One method per HTTP operation; no local state here. Reconciliation
//! of responses into the cache is the stores' job.

use shared::models::{
    DeleteOutcome, Employee, EmployeeCreate, EmployeeUpdate, Service, ServiceCreate, ServiceUpdate,
};

use crate::{ClientResult, HttpClient};

/// Typed client for the employee/service API surface
#[derive(Debug, Clone)]
pub struct EmployeeApi {
    http: HttpClient,
}

impl EmployeeApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// GET /employees — roster for the caller's company
    pub async fn list(&self) -> ClientResult<Vec<Employee>> {
        self.http.get("employees").await
    }

    /// POST /employees — create an employee, nested services included
    pub async fn create(&self, payload: &EmployeeCreate) -> ClientResult<Employee> {
        self.http.post("employees", payload).await
    }

    /// GET /employees/{id} — one employee with services
    ///
    /// Answers `None` when the server returns a `null` body for a
    /// nonexistent id.
    pub async fn fetch(&self, id: i64) -> ClientResult<Option<Employee>> {
        self.http.get_optional(&format!("employees/{}", id)).await
    }

    /// PATCH /employees/{id} — partial field update
    pub async fn update(&self, id: i64, payload: &EmployeeUpdate) -> ClientResult<Employee> {
        self.http.patch(&format!("employees/{}", id), payload).await
    }

    /// DELETE /employees/{id} — delete employee, cascade services
    pub async fn remove(&self, id: i64) -> ClientResult<Employee> {
        self.http.delete(&format!("employees/{}", id)).await
    }

    /// POST /employees/{id} — create a service under an employee
    pub async fn create_service(&self, payload: &ServiceCreate) -> ClientResult<Service> {
        self.http
            .post(&format!("employees/{}", payload.employee_id), payload)
            .await
    }

    /// GET /employees/{id}/services/{sid} — ownership-checked fetch
    pub async fn fetch_service(&self, employee_id: i64, service_id: i64) -> ClientResult<Service> {
        self.http
            .get(&format!("employees/{}/services/{}", employee_id, service_id))
            .await
    }

    /// PATCH /employees/{id}/services/{sid} — partial service update
    pub async fn update_service(
        &self,
        employee_id: i64,
        service_id: i64,
        payload: &ServiceUpdate,
    ) -> ClientResult<Service> {
        self.http
            .patch(
                &format!("employees/{}/services/{}", employee_id, service_id),
                payload,
            )
            .await
    }

    /// DELETE /employees/{id}/services/{sid} — ownership-checked delete
    pub async fn remove_service(
        &self,
        employee_id: i64,
        service_id: i64,
    ) -> ClientResult<DeleteOutcome> {
        self.http
            .delete(&format!("employees/{}/services/{}", employee_id, service_id))
            .await
    }
}
