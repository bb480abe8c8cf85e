//! Employee Service Library
//!
//! This crate implements the create employee command: validation, field
//! transformation, transactional persistence and response shaping. It can
//! be embedded by an HTTP layer through [`EmployeeService`] or driven from
//! the `employee-service` binary.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::{CommandResult, Resources};
use domain::{Employee, EmployeeSaveRequest};

use crate::config::EmployeeServiceConfig;
use crate::infra::Database;
use crate::repository::SeaEmployeeStore;
use crate::service::{EmployeeCommands, EmployeeService, FieldTransformer};

/// Build the service over an open database with default English messages.
pub fn build_service(
    db: Database,
    config: &EmployeeServiceConfig,
) -> EmployeeCommands<SeaEmployeeStore> {
    let store = Arc::new(SeaEmployeeStore::new(db.into_connection()));
    let transformer = FieldTransformer::new(config.password_hash.into());

    EmployeeCommands::new(store, Arc::new(Resources::new()), transformer)
}

/// Connect, migrate and run one create command (for CLI commands).
pub async fn create_employee(
    config: &EmployeeServiceConfig,
    request: EmployeeSaveRequest,
) -> Result<CommandResult<Employee>, Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    let service = build_service(db, config);

    Ok(service.create_employee(request).await)
}

/// Apply the `employees` schema (for CLI commands).
pub async fn run_migrations(config: &EmployeeServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    Database::connect(&config.database).await?;
    info!("Migrations applied successfully");

    Ok(())
}
