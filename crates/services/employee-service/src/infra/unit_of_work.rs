//! Transaction gateway.
//!
//! Runs one unit of work inside a store transaction:
//! - begin a transaction
//! - run the closure against the open handle
//! - commit on success, roll back on failure
//!
//! The handle is moved into `commit` or `rollback`, so it is resolved once
//! and cannot be touched afterwards.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::repository::{EmployeeStore, EmployeeTransaction};
use common::AppResult;

/// Commit-or-rollback wrapper around an [`EmployeeStore`].
pub struct TransactionGateway<S: EmployeeStore> {
    store: Arc<S>,
}

impl<S: EmployeeStore> Clone for TransactionGateway<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: EmployeeStore> TransactionGateway<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Execute a closure within a transaction.
    ///
    /// A failure from `begin` is returned as is; nothing was opened. When the
    /// closure fails the transaction is rolled back before its error is
    /// returned; a rollback failure is logged and the closure's error wins.
    /// A failed commit is returned without a further rollback attempt.
    pub async fn execute<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'t> FnOnce(&'t S::Transaction) -> BoxFuture<'t, AppResult<T>> + Send,
        T: Send,
    {
        let txn = self.store.begin().await?;
        tracing::debug!("Transaction opened");

        let outcome = f(&txn).await;

        match outcome {
            Ok(value) => {
                txn.commit().await?;
                tracing::debug!("Transaction committed");
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                } else {
                    tracing::debug!("Transaction rolled back");
                }
                Err(e)
            }
        }
    }
}
