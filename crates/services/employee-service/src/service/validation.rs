//! Save request validation.
//!
//! Checks run in a fixed order and stop at the first failure, so the first
//! name error always wins over the last name error, which wins over the
//! password error.

use common::{CommandError, CommandResponse, CommandResult, MessageSource, ResourceKey};
use domain::EmployeeSaveRequest;

/// Empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate an employee save request.
///
/// Returns a 200 verdict with no payload when every check passes, or a 422
/// error carrying the localized message of the first failing check.
pub fn validate_save_request(
    request: &EmployeeSaveRequest,
    messages: &dyn MessageSource,
) -> CommandResult<()> {
    let failure = if is_blank(&request.first_name) {
        Some(ResourceKey::EmployeeFirstNameInvalid)
    } else if is_blank(&request.last_name) {
        Some(ResourceKey::EmployeeLastNameInvalid)
    } else if is_blank(&request.password) {
        Some(ResourceKey::EmployeePasswordInvalid)
    } else if !request.is_initial_employee
        && request.classification.is_some_and(|c| !c.is_defined())
    {
        Some(ResourceKey::EmployeeClassificationInvalid)
    } else {
        None
    };

    match failure {
        Some(key) => Err(CommandError::unprocessable(messages.get_string(key))),
        None => Ok(CommandResponse::ok(())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{MockMessageSource, Resources};
    use domain::EmployeeClassification;
    use mockall::predicate::eq;

    fn request(first: &str, last: &str, password: &str) -> EmployeeSaveRequest {
        EmployeeSaveRequest {
            first_name: first.to_string(),
            last_name: last.to_string(),
            password: password.to_string(),
            is_initial_employee: false,
            classification: None,
        }
    }

    fn message_of(key: ResourceKey) -> String {
        key.default_text().to_string()
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_valid_request_passes_with_200() {
        let verdict = validate_save_request(&request("Ada", "Lovelace", "secret123"), &Resources::new());
        assert_eq!(verdict, Ok(CommandResponse::ok(())));
    }

    #[test]
    fn test_blank_first_name_wins_over_everything() {
        let err = validate_save_request(&request(" ", "", ""), &Resources::new()).unwrap_err();
        assert_eq!(err.status, 422);
        assert_eq!(err.message, message_of(ResourceKey::EmployeeFirstNameInvalid));
    }

    #[test]
    fn test_blank_last_name_wins_over_password() {
        let err = validate_save_request(&request("Ada", "\t", ""), &Resources::new()).unwrap_err();
        assert_eq!(err.status, 422);
        assert_eq!(err.message, message_of(ResourceKey::EmployeeLastNameInvalid));
    }

    #[test]
    fn test_blank_password() {
        let err = validate_save_request(&request("Ada", "Lovelace", "  "), &Resources::new())
            .unwrap_err();
        assert_eq!(err.status, 422);
        assert_eq!(err.message, message_of(ResourceKey::EmployeePasswordInvalid));
    }

    #[test]
    fn test_not_defined_classification_rejected() {
        let mut req = request("Ada", "Lovelace", "secret123");
        req.classification = Some(EmployeeClassification::NotDefined);

        let err = validate_save_request(&req, &Resources::new()).unwrap_err();
        assert_eq!(err.message, message_of(ResourceKey::EmployeeClassificationInvalid));
    }

    #[test]
    fn test_initial_employee_ignores_classification() {
        let mut req = request("Ada", "Lovelace", "secret123");
        req.is_initial_employee = true;
        req.classification = Some(EmployeeClassification::NotDefined);

        assert!(validate_save_request(&req, &Resources::new()).is_ok());
    }

    #[test]
    fn test_message_comes_from_injected_source() {
        let mut messages = MockMessageSource::new();
        messages
            .expect_get_string()
            .with(eq(ResourceKey::EmployeeLastNameInvalid))
            .times(1)
            .returning(|_| "last name required".to_string());

        let err = validate_save_request(&request("Ada", "", "x"), &messages).unwrap_err();
        assert_eq!(err.message, "last name required");
    }

    #[test]
    fn test_success_does_not_touch_messages() {
        let mut messages = MockMessageSource::new();
        messages.expect_get_string().never();

        assert!(validate_save_request(&request("Ada", "Lovelace", "pw"), &messages).is_ok());
    }
}
