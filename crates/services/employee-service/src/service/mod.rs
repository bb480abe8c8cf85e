//! Application services layer - the employee commands and their steps.

mod employee_service;
pub mod transform;
pub mod validation;

pub use employee_service::{EmployeeCommands, EmployeeService};
pub use transform::FieldTransformer;
pub use validation::{is_blank, validate_save_request};
