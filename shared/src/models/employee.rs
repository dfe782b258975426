//! Employee Model

use serde::{Deserialize, Serialize};

use super::service::{Service, ServiceDraft};

/// Employee entity
///
/// The `services` collection is populated on the detail endpoint
/// (`GET /employees/{id}`); the list endpoint returns it empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub telegram: Option<String>,
    pub whatsapp: Option<String>,
    pub viber: Option<String>,
    pub photo: Option<String>,
    #[serde(default)]
    pub services: Vec<Service>,
}

/// Create employee payload
///
/// `services` drafts are created atomically with the employee
/// (nested create) and come back with server-assigned ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub phone: Option<String>,
    pub instagram: Option<String>,
    pub telegram: Option<String>,
    pub whatsapp: Option<String>,
    pub viber: Option<String>,
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<ServiceDraft>,
}

/// Partial employee update payload
///
/// Only fields present in the JSON body are changed; a single-field
/// patch therefore serializes to a single-key object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viber: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}
