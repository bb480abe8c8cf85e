//! Repository layer for data access.

pub mod entities;
mod employee_store;

pub use employee_store::{EmployeeStore, EmployeeTransaction, SeaEmployeeStore, SeaTransaction};
