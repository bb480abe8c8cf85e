//! Turns a validated save request into the fields that get stored.

use common::AppResult;
use domain::{
    EmployeeClassification, EmployeeSaveRequest, NewEmployee, Password, PasswordCost,
    DEFAULT_EMPLOYEE_CLASSIFICATION, INITIAL_EMPLOYEE_CLASSIFICATION,
};

/// Derives persisted values from a save request.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldTransformer {
    cost: PasswordCost,
}

impl FieldTransformer {
    pub fn new(cost: PasswordCost) -> Self {
        Self { cost }
    }

    /// Hash the password and resolve the classification.
    ///
    /// The request is consumed so its plain text password does not outlive
    /// this step. Expects a request that already passed validation.
    pub fn transform(&self, request: EmployeeSaveRequest) -> AppResult<NewEmployee> {
        let classification = resolve_classification(&request);
        let password = Password::hash_with(&request.password, self.cost)?;

        Ok(NewEmployee {
            first_name: request.first_name,
            last_name: request.last_name,
            password: password.into_bytes(),
            classification,
        })
    }
}

/// Initial employees are always general managers; everyone else gets the
/// requested classification or the default.
pub fn resolve_classification(request: &EmployeeSaveRequest) -> EmployeeClassification {
    if request.is_initial_employee {
        INITIAL_EMPLOYEE_CLASSIFICATION
    } else {
        request
            .classification
            .unwrap_or(DEFAULT_EMPLOYEE_CLASSIFICATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> FieldTransformer {
        FieldTransformer::new(PasswordCost {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
    }

    fn request(initial: bool, classification: Option<EmployeeClassification>) -> EmployeeSaveRequest {
        EmployeeSaveRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password: "secret123".to_string(),
            is_initial_employee: initial,
            classification,
        }
    }

    #[test]
    fn test_initial_employee_is_general_manager() {
        assert_eq!(
            resolve_classification(&request(true, Some(EmployeeClassification::Cashier))),
            EmployeeClassification::GeneralManager
        );
    }

    #[test]
    fn test_requested_classification_is_kept() {
        assert_eq!(
            resolve_classification(&request(false, Some(EmployeeClassification::ShiftManager))),
            EmployeeClassification::ShiftManager
        );
    }

    #[test]
    fn test_missing_classification_uses_default() {
        assert_eq!(
            resolve_classification(&request(false, None)),
            DEFAULT_EMPLOYEE_CLASSIFICATION
        );
    }

    #[test]
    fn test_password_is_hashed() {
        let fields = cheap().transform(request(false, None)).unwrap();

        assert_ne!(fields.password, b"secret123".to_vec());
        assert!(Password::from_hash(fields.password.clone()).verify("secret123"));
        assert_eq!(fields.first_name, "Ada");
        assert_eq!(fields.last_name, "Lovelace");
    }

    #[test]
    fn test_bad_cost_is_internal_error() {
        let transformer = FieldTransformer::new(PasswordCost {
            memory_kib: 1024,
            iterations: 0,
            parallelism: 1,
        });

        let err = transformer.transform(request(false, None)).unwrap_err();
        assert!(matches!(err, common::AppError::Internal(_)));
    }
}
