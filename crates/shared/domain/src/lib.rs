//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Employee requests, stored records and response shapes are shared by the
//! service crate and its tests.

pub mod classification;
pub mod constants;
pub mod employee;
pub mod error;
pub mod password;

pub use classification::EmployeeClassification;
pub use constants::*;
pub use employee::{Employee, EmployeeRecord, EmployeeSaveRequest, NewEmployee};
pub use error::{DomainError, DomainResult};
pub use password::{Password, PasswordCost};
