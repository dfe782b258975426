//! Employee handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;

use shared::error::{AppError, AppResult};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, Service};

use crate::state::MockState;

/// List employees (summary records, services not included)
pub async fn list(State(state): State<MockState>) -> AppResult<Json<Vec<Employee>>> {
    let mut employees: Vec<Employee> = state.with_employees(|m| m.values().cloned().collect());
    for employee in &mut employees {
        employee.services.clear();
    }
    employees.sort_by_key(|e| e.id);
    Ok(Json(employees))
}

/// Create an employee, with nested service drafts created atomically
pub async fn create(
    State(state): State<MockState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let has_phone = payload.phone.as_deref().is_some_and(|p| !p.is_empty());
    if payload.name.is_empty() || !has_phone {
        return Err(AppError::validation("Name and phone are required"));
    }

    let id = state.next_employee_id();
    let services = payload
        .services
        .into_iter()
        .map(|draft| Service {
            id: state.next_service_id(),
            name: draft.name,
            description: draft.description,
            duration: draft.duration,
            time_offset: draft.time_offset,
            price: draft.price,
            employee_id: id,
        })
        .collect();

    let employee = Employee {
        id,
        name: payload.name,
        phone: payload.phone,
        instagram: payload.instagram,
        telegram: payload.telegram,
        whatsapp: payload.whatsapp,
        viber: payload.viber,
        photo: payload.photo,
        services,
    };

    state.with_employees_mut(|m| m.insert(id, employee.clone()));
    tracing::debug!(employee_id = id, "Created employee");

    Ok((StatusCode::CREATED, Json(employee)))
}

/// Fetch one employee with services
///
/// A nonexistent id answers 200 with a `null` body, matching the
/// upstream API.
pub async fn get_by_id(
    State(state): State<MockState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Option<Employee>>> {
    Ok(Json(state.with_employees(|m| m.get(&id).cloned())))
}

/// Partial field update; returns the scalar record (no services).
/// String values are stored trimmed, the canonical form.
pub async fn update(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    let canon = |v: String| v.trim().to_string();
    let updated = state.with_employees_mut(|m| {
        let employee = m.get_mut(&id)?;
        if let Some(name) = payload.name {
            employee.name = canon(name);
        }
        if let Some(phone) = payload.phone {
            employee.phone = Some(canon(phone));
        }
        if let Some(instagram) = payload.instagram {
            employee.instagram = Some(canon(instagram));
        }
        if let Some(telegram) = payload.telegram {
            employee.telegram = Some(canon(telegram));
        }
        if let Some(whatsapp) = payload.whatsapp {
            employee.whatsapp = Some(canon(whatsapp));
        }
        if let Some(viber) = payload.viber {
            employee.viber = Some(canon(viber));
        }
        if let Some(photo) = payload.photo {
            employee.photo = Some(canon(photo));
        }
        Some(employee.clone())
    });

    let mut employee = updated.ok_or_else(|| AppError::internal("Failed to update employee"))?;
    employee.services.clear();
    Ok(Json(employee))
}

/// Delete an employee; services go with it (cascade)
pub async fn delete(
    State(state): State<MockState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let removed = state.with_employees_mut(|m| m.remove(&id));
    let employee = removed.ok_or_else(|| AppError::internal("Failed to delete employee"))?;
    tracing::debug!(employee_id = id, "Deleted employee");
    Ok(Json(employee))
}
