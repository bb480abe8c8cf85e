//! Employee domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classification::EmployeeClassification;
use crate::constants::DISPLAY_DATE_FORMAT;

/// Employee creation data transfer object.
///
/// Missing text fields deserialize as empty strings so they are reported by
/// validation rather than rejected by the decoder.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSaveRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Plain text; replaced by a hash before anything is stored
    #[serde(default)]
    pub password: String,
    /// Bootstrap account flag
    #[serde(default)]
    pub is_initial_employee: bool,
    /// Ignored when `is_initial_employee` is set
    #[serde(default)]
    pub classification: Option<EmployeeClassification>,
}

impl std::fmt::Debug for EmployeeSaveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeSaveRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &"[REDACTED]")
            .field("is_initial_employee", &self.is_initial_employee)
            .field("classification", &self.classification)
            .finish()
    }
}

/// Fields written by a single employee insert.
#[derive(Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    /// Encoded password hash
    pub password: Vec<u8>,
    pub classification: EmployeeClassification,
}

impl std::fmt::Debug for NewEmployee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewEmployee")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &"[REDACTED]")
            .field("classification", &self.classification)
            .finish()
    }
}

/// Employee row as stored, including store-assigned values.
#[derive(Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub id: Uuid,
    /// Sequential number assigned by the store
    pub employee_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub password: Vec<u8>,
    pub classification: EmployeeClassification,
    pub active: bool,
    pub created_on: DateTime<Utc>,
    pub manager_id: Option<Uuid>,
}

impl std::fmt::Debug for EmployeeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeRecord")
            .field("id", &self.id)
            .field("employee_id", &self.employee_id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &"[REDACTED]")
            .field("classification", &self.classification)
            .field("active", &self.active)
            .field("created_on", &self.created_on)
            .field("manager_id", &self.manager_id)
            .finish()
    }
}

/// Employee response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub active: bool,
    /// Creation date rendered with [`DISPLAY_DATE_FORMAT`]
    pub created_on: String,
    pub manager_id: Option<Uuid>,
    pub employee_id: i32,
    pub classification: EmployeeClassification,
}

/// Render a timestamp the way employee dates are shown to clients.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format(DISPLAY_DATE_FORMAT).to_string()
}

impl From<&EmployeeRecord> for Employee {
    fn from(record: &EmployeeRecord) -> Self {
        Self {
            id: record.id,
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            active: record.active,
            created_on: format_date(&record.created_on),
            manager_id: record.manager_id,
            employee_id: record.employee_id,
            classification: record.classification,
        }
    }
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            id: record.id,
            created_on: format_date(&record.created_on),
            first_name: record.first_name,
            last_name: record.last_name,
            active: record.active,
            manager_id: record.manager_id,
            employee_id: record.employee_id,
            classification: record.classification,
        }
    }
}
