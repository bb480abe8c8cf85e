//! Localized message lookup.
//!
//! Commands receive a [`MessageSource`] instead of reading a global table,
//! so tests can pin exact strings.

use std::collections::HashMap;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Keys of user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    EmployeeFirstNameInvalid,
    EmployeeLastNameInvalid,
    EmployeePasswordInvalid,
    EmployeeClassificationInvalid,
    EmployeeUnableToSave,
}

impl ResourceKey {
    /// English text used when no override is registered
    pub fn default_text(self) -> &'static str {
        match self {
            ResourceKey::EmployeeFirstNameInvalid => "Please provide a valid employee first name.",
            ResourceKey::EmployeeLastNameInvalid => "Please provide a valid employee last name.",
            ResourceKey::EmployeePasswordInvalid => "Please provide a valid employee password.",
            ResourceKey::EmployeeClassificationInvalid => {
                "Please provide a valid employee classification."
            }
            ResourceKey::EmployeeUnableToSave => "Unable to save the employee.",
        }
    }
}

/// Message lookup used by commands.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait MessageSource: Send + Sync {
    fn get_string(&self, key: ResourceKey) -> String;
}

/// Message table with English defaults and per-key overrides.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    overrides: HashMap<ResourceKey, String>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text of one key.
    pub fn with_override(mut self, key: ResourceKey, text: impl Into<String>) -> Self {
        self.overrides.insert(key, text.into());
        self
    }
}

impl MessageSource for Resources {
    fn get_string(&self, key: ResourceKey) -> String {
        self.overrides
            .get(&key)
            .cloned()
            .unwrap_or_else(|| key.default_text().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_text() {
        let resources = Resources::new();
        assert_eq!(
            resources.get_string(ResourceKey::EmployeeUnableToSave),
            "Unable to save the employee."
        );
    }

    #[test]
    fn test_override_only_affects_its_key() {
        let resources =
            Resources::new().with_override(ResourceKey::EmployeeFirstNameInvalid, "Vorname fehlt");

        assert_eq!(resources.get_string(ResourceKey::EmployeeFirstNameInvalid), "Vorname fehlt");
        assert_eq!(
            resources.get_string(ResourceKey::EmployeeLastNameInvalid),
            ResourceKey::EmployeeLastNameInvalid.default_text()
        );
    }
}
