//! Domain-level constants.
//!
//! These constants define business rules and presentation conventions.

use crate::classification::EmployeeClassification;

// =============================================================================
// Classification
// =============================================================================

/// Classification given to a non-initial employee whose request names none
pub const DEFAULT_EMPLOYEE_CLASSIFICATION: EmployeeClassification = EmployeeClassification::Cashier;

/// Classification forced onto the bootstrap account
pub const INITIAL_EMPLOYEE_CLASSIFICATION: EmployeeClassification =
    EmployeeClassification::GeneralManager;

// =============================================================================
// Presentation
// =============================================================================

/// Date format used when an employee's creation timestamp leaves the service
pub const DISPLAY_DATE_FORMAT: &str = "%m/%d/%Y";

// =============================================================================
// Password hashing (Argon2id work factor)
// =============================================================================

/// Memory cost in KiB
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 19 * 1024;

/// Number of passes over memory
pub const DEFAULT_HASH_ITERATIONS: u32 = 2;

/// Degree of parallelism
pub const DEFAULT_HASH_PARALLELISM: u32 = 1;
