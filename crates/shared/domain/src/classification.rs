//! Employee classification enumeration.

use serde::{Deserialize, Serialize};

/// Role an employee record is filed under.
///
/// The discriminants are the values persisted in the `classification` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeClassification {
    NotDefined = 0,
    Cashier = 101,
    ShiftManager = 501,
    GeneralManager = 701,
}

impl EmployeeClassification {
    /// Stored representation
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Whether this is an assignable role (anything but `NotDefined`)
    pub fn is_defined(self) -> bool {
        !matches!(self, EmployeeClassification::NotDefined)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeClassification::NotDefined => "not_defined",
            EmployeeClassification::Cashier => "cashier",
            EmployeeClassification::ShiftManager => "shift_manager",
            EmployeeClassification::GeneralManager => "general_manager",
        }
    }
}

impl From<i32> for EmployeeClassification {
    fn from(code: i32) -> Self {
        match code {
            101 => EmployeeClassification::Cashier,
            501 => EmployeeClassification::ShiftManager,
            701 => EmployeeClassification::GeneralManager,
            _ => EmployeeClassification::NotDefined,
        }
    }
}

impl From<EmployeeClassification> for i32 {
    fn from(classification: EmployeeClassification) -> Self {
        classification.code()
    }
}

impl std::str::FromStr for EmployeeClassification {
    type Err = crate::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_defined" => Ok(EmployeeClassification::NotDefined),
            "cashier" => Ok(EmployeeClassification::Cashier),
            "shift_manager" => Ok(EmployeeClassification::ShiftManager),
            "general_manager" => Ok(EmployeeClassification::GeneralManager),
            other => Err(crate::DomainError::validation(format!(
                "Unknown classification: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for EmployeeClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
