//! Employee service - the create employee command.
//!
//! A request moves through `Validating → Transforming → Persisting →
//! Mapping → Done`; any step may divert it to `Failed`. The store
//! transaction only exists inside `Persisting` and is committed or rolled
//! back before that stage is left.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, CommandError, CommandResponse, CommandResult, MessageSource, ResourceKey};
use domain::{Employee, EmployeeRecord, EmployeeSaveRequest, NewEmployee};

use crate::infra::TransactionGateway;
use crate::repository::{EmployeeStore, EmployeeTransaction};
use crate::service::transform::FieldTransformer;
use crate::service::validation::validate_save_request;

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Validate, hash and store a new employee.
    ///
    /// Fulfils with status 201 and the stored employee, or rejects with the
    /// status and message of the first failure.
    async fn create_employee(&self, request: EmployeeSaveRequest) -> CommandResult<Employee>;
}

/// Progress of a single create command.
enum CreateStage {
    Validating(EmployeeSaveRequest),
    Transforming(EmployeeSaveRequest),
    Persisting(NewEmployee),
    Mapping(EmployeeRecord),
    Done(Employee),
    Failed(CommandError),
}

impl CreateStage {
    fn name(&self) -> &'static str {
        match self {
            CreateStage::Validating(_) => "validating",
            CreateStage::Transforming(_) => "transforming",
            CreateStage::Persisting(_) => "persisting",
            CreateStage::Mapping(_) => "mapping",
            CreateStage::Done(_) => "done",
            CreateStage::Failed(_) => "failed",
        }
    }
}

/// Concrete implementation of EmployeeService over a transactional store.
pub struct EmployeeCommands<S: EmployeeStore> {
    gateway: TransactionGateway<S>,
    messages: Arc<dyn MessageSource>,
    transformer: FieldTransformer,
}

impl<S: EmployeeStore> EmployeeCommands<S> {
    pub fn new(
        store: Arc<S>,
        messages: Arc<dyn MessageSource>,
        transformer: FieldTransformer,
    ) -> Self {
        Self {
            gateway: TransactionGateway::new(store),
            messages,
            transformer,
        }
    }

    /// Advance one stage. `Done` and `Failed` are never passed in.
    async fn step(&self, stage: CreateStage) -> CreateStage {
        match stage {
            CreateStage::Validating(request) => {
                match validate_save_request(&request, self.messages.as_ref()) {
                    Ok(_) => CreateStage::Transforming(request),
                    Err(rejection) => CreateStage::Failed(rejection),
                }
            }
            CreateStage::Transforming(request) => match self.transformer.transform(request) {
                Ok(fields) => CreateStage::Persisting(fields),
                Err(e) => CreateStage::Failed(self.unable_to_save(&e)),
            },
            CreateStage::Persisting(fields) => {
                let persisted = self
                    .gateway
                    .execute(move |txn| Box::pin(async move { txn.insert(fields).await }))
                    .await;

                match persisted {
                    Ok(record) => CreateStage::Mapping(record),
                    Err(e) => CreateStage::Failed(self.unable_to_save(&e)),
                }
            }
            CreateStage::Mapping(record) => CreateStage::Done(Employee::from(record)),
            terminal @ (CreateStage::Done(_) | CreateStage::Failed(_)) => terminal,
        }
    }

    /// Keep the error's own status and message when it has one a client may
    /// see, otherwise report a generic 500.
    fn unable_to_save(&self, err: &AppError) -> CommandError {
        CommandError::from_app_error(err, || {
            self.messages.get_string(ResourceKey::EmployeeUnableToSave)
        })
    }
}

#[async_trait]
impl<S: EmployeeStore> EmployeeService for EmployeeCommands<S> {
    async fn create_employee(&self, request: EmployeeSaveRequest) -> CommandResult<Employee> {
        let mut stage = CreateStage::Validating(request);

        loop {
            stage = match stage {
                CreateStage::Done(employee) => {
                    tracing::info!(
                        id = %employee.id,
                        employee_id = employee.employee_id,
                        classification = %employee.classification,
                        "Employee created"
                    );
                    return Ok(CommandResponse::created(employee));
                }
                CreateStage::Failed(err) => {
                    if err.is_client_error() {
                        tracing::warn!(status = err.status, "Employee create rejected: {}", err.message);
                    } else {
                        tracing::error!(status = err.status, "Employee create failed: {}", err.message);
                    }
                    return Err(err);
                }
                active => {
                    tracing::debug!(stage = active.name(), "Create employee step");
                    self.step(active).await
                }
            };
        }
    }
}
