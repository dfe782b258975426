//! Service handlers
//!
//! Update and delete are ownership-checked: the addressed service must
//! belong to the employee in the path, otherwise 404.

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use serde::Deserialize;

use shared::error::{AppError, AppResult};
use shared::models::{DeleteOutcome, Service, ServiceUpdate};

use crate::state::MockState;

const OWNERSHIP_ERROR: &str = "Service not found for this employee";

/// Raw create payload, deserialized leniently so presence of every
/// required field can be checked before anything else.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCreateBody {
    name: Option<String>,
    description: Option<String>,
    duration: Option<i64>,
    time_offset: Option<i64>,
    price: Option<f64>,
    employee_id: Option<i64>,
}

/// Create a service under an existing employee
pub async fn create(
    State(state): State<MockState>,
    Path(_id): Path<i64>,
    Json(body): Json<ServiceCreateBody>,
) -> AppResult<(StatusCode, Json<Service>)> {
    let (Some(name), Some(description), Some(duration), Some(employee_id)) =
        (body.name, body.description, body.duration, body.employee_id)
    else {
        return Err(AppError::validation("Missing required fields"));
    };
    if body.time_offset.is_none() || body.price.is_none() {
        return Err(AppError::validation("Missing required fields"));
    }

    let service = Service {
        id: state.next_service_id(),
        name,
        description: Some(description),
        duration,
        time_offset: body.time_offset.unwrap_or(0),
        price: body.price.unwrap_or(0.0),
        employee_id,
    };

    let inserted = state.with_employees_mut(|m| match m.get_mut(&employee_id) {
        Some(employee) => {
            employee.services.push(service.clone());
            true
        }
        None => false,
    });
    if !inserted {
        return Err(AppError::validation("Employee not found"));
    }

    tracing::debug!(service_id = service.id, employee_id, "Created service");
    Ok((StatusCode::CREATED, Json(service)))
}

/// Fetch one service, ownership-checked
pub async fn get_by_id(
    State(state): State<MockState>,
    Path((id, service_id)): Path<(i64, i64)>,
) -> AppResult<Json<Service>> {
    let service = state.with_employees(|m| {
        m.get(&id)
            .and_then(|e| e.services.iter().find(|s| s.id == service_id).cloned())
    });
    service
        .map(Json)
        .ok_or_else(|| AppError::not_found(OWNERSHIP_ERROR))
}

/// Partial service update, ownership-checked
pub async fn update(
    State(state): State<MockState>,
    Path((id, service_id)): Path<(i64, i64)>,
    Json(payload): Json<ServiceUpdate>,
) -> AppResult<Json<Service>> {
    let updated = state.with_employees_mut(|m| {
        let employee = m.get_mut(&id)?;
        let service = employee.services.iter_mut().find(|s| s.id == service_id)?;
        if let Some(name) = payload.name {
            service.name = name;
        }
        if let Some(description) = payload.description {
            service.description = Some(description);
        }
        if let Some(duration) = payload.duration {
            service.duration = duration;
        }
        if let Some(time_offset) = payload.time_offset {
            service.time_offset = time_offset;
        }
        if let Some(price) = payload.price {
            service.price = price;
        }
        Some(service.clone())
    });

    updated
        .map(Json)
        .ok_or_else(|| AppError::not_found(OWNERSHIP_ERROR))
}

/// Delete a service, ownership-checked
pub async fn delete(
    State(state): State<MockState>,
    Path((id, service_id)): Path<(i64, i64)>,
) -> AppResult<Json<DeleteOutcome>> {
    let removed = state.with_employees_mut(|m| {
        let employee = m.get_mut(&id)?;
        let index = employee.services.iter().position(|s| s.id == service_id)?;
        Some(employee.services.remove(index))
    });

    match removed {
        Some(service) => {
            tracing::debug!(service_id = service.id, employee_id = id, "Deleted service");
            Ok(Json(DeleteOutcome { success: true }))
        }
        None => Err(AppError::not_found(OWNERSHIP_ERROR)),
    }
}
