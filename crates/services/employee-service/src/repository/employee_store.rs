//! Transactional employee store.
//!
//! The store hands out transaction handles; a handle performs the insert
//! and is then consumed by exactly one of `commit` or `rollback`.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DatabaseTransaction,
    DbErr, IsolationLevel, Set, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use super::entities::employee::ActiveModel;
use common::{AppError, AppResult};
use domain::{EmployeeRecord, NewEmployee};

/// Source of employee write transactions.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    type Transaction: EmployeeTransaction;

    /// Open a read-write transaction
    async fn begin(&self) -> AppResult<Self::Transaction>;
}

/// An open transaction against the employee store.
#[async_trait]
pub trait EmployeeTransaction: Send + Sync + Sized {
    /// Insert one employee row; store-assigned columns come back populated
    async fn insert(&self, employee: NewEmployee) -> AppResult<EmployeeRecord>;

    async fn commit(self) -> AppResult<()>;

    async fn rollback(self) -> AppResult<()>;
}

/// Concrete implementation of EmployeeStore over SeaORM
pub struct SeaEmployeeStore {
    db: DatabaseConnection,
}

impl SeaEmployeeStore {
    /// Create new store instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeStore for SeaEmployeeStore {
    type Transaction = SeaTransaction;

    async fn begin(&self) -> AppResult<SeaTransaction> {
        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::ReadCommitted), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        Ok(SeaTransaction { txn })
    }
}

/// SeaORM transaction handle.
pub struct SeaTransaction {
    txn: DatabaseTransaction,
}

#[async_trait]
impl EmployeeTransaction for SeaTransaction {
    async fn insert(&self, employee: NewEmployee) -> AppResult<EmployeeRecord> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            employee_id: NotSet,
            first_name: Set(employee.first_name),
            last_name: Set(employee.last_name),
            password: Set(employee.password),
            classification: Set(employee.classification.code()),
            active: NotSet,
            created_on: NotSet,
            manager_id: NotSet,
        };

        let model = active_model.insert(&self.txn).await.map_err(insert_error)?;
        Ok(EmployeeRecord::from(model))
    }

    async fn commit(self) -> AppResult<()> {
        self.txn.commit().await.map_err(AppError::from)
    }

    async fn rollback(self) -> AppResult<()> {
        self.txn.rollback().await.map_err(AppError::from)
    }
}

fn insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Employee"),
        _ => AppError::from(err),
    }
}
