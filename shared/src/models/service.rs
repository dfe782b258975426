//! Service Model

use serde::{Deserialize, Serialize};

/// Service entity
///
/// Belongs to exactly one employee for its lifetime; `employee_id`
/// is set at creation and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Duration in minutes (> 0)
    pub duration: i64,
    /// Prep time in minutes, not shown to end customers
    #[serde(default)]
    pub time_offset: i64,
    /// Non-negative, currency-agnostic
    #[serde(default)]
    pub price: f64,
    pub employee_id: i64,
}

/// Create service payload (standalone create under an employee)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCreate {
    pub name: String,
    pub description: Option<String>,
    pub duration: i64,
    pub time_offset: i64,
    pub price: f64,
    pub employee_id: i64,
}

/// Service draft bundled into an employee nested create
///
/// Same shape as [`ServiceCreate`] minus the owning id, which the
/// server takes from the enclosing employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    pub name: String,
    pub description: Option<String>,
    pub duration: i64,
    #[serde(default)]
    pub time_offset: i64,
    #[serde(default)]
    pub price: f64,
}

/// Partial service update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Response body of a service delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub success: bool,
}
