//! In-memory employee store for tests.
//!
//! Inserted rows stay staged on the transaction until commit, so a rolled
//! back transaction leaves nothing visible.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{EmployeeRecord, EmployeeSaveRequest, NewEmployee, PasswordCost};
use employee_service_lib::repository::{EmployeeStore, EmployeeTransaction};
use employee_service_lib::service::FieldTransformer;

/// Builds the error an operation fails with.
pub type Fault = fn() -> AppError;

#[derive(Default)]
struct StoreState {
    rows: Vec<EmployeeRecord>,
    next_employee_id: i32,
    begins: usize,
    inserts: usize,
    commits: usize,
    rollbacks: usize,
}

/// Test store with per-operation fault injection.
#[derive(Default)]
pub struct MemoryStore {
    state: Arc<Mutex<StoreState>>,
    fail_begin: Option<Fault>,
    fail_insert: Option<Fault>,
    fail_commit: Option<Fault>,
    fail_rollback: Option<Fault>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_begin(mut self, fault: Fault) -> Self {
        self.fail_begin = Some(fault);
        self
    }

    pub fn failing_insert(mut self, fault: Fault) -> Self {
        self.fail_insert = Some(fault);
        self
    }

    pub fn failing_commit(mut self, fault: Fault) -> Self {
        self.fail_commit = Some(fault);
        self
    }

    pub fn failing_rollback(mut self, fault: Fault) -> Self {
        self.fail_rollback = Some(fault);
        self
    }

    /// Committed rows
    pub fn rows(&self) -> Vec<EmployeeRecord> {
        self.state.lock().unwrap().rows.clone()
    }

    pub fn begins(&self) -> usize {
        self.state.lock().unwrap().begins
    }

    pub fn inserts(&self) -> usize {
        self.state.lock().unwrap().inserts
    }

    pub fn commits(&self) -> usize {
        self.state.lock().unwrap().commits
    }

    pub fn rollbacks(&self) -> usize {
        self.state.lock().unwrap().rollbacks
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    type Transaction = MemoryTransaction;

    async fn begin(&self) -> AppResult<MemoryTransaction> {
        if let Some(fault) = self.fail_begin {
            return Err(fault());
        }
        self.state.lock().unwrap().begins += 1;

        Ok(MemoryTransaction {
            state: Arc::clone(&self.state),
            staged: Mutex::new(Vec::new()),
            fail_insert: self.fail_insert,
            fail_commit: self.fail_commit,
            fail_rollback: self.fail_rollback,
        })
    }
}

pub struct MemoryTransaction {
    state: Arc<Mutex<StoreState>>,
    staged: Mutex<Vec<EmployeeRecord>>,
    fail_insert: Option<Fault>,
    fail_commit: Option<Fault>,
    fail_rollback: Option<Fault>,
}

#[async_trait]
impl EmployeeTransaction for MemoryTransaction {
    async fn insert(&self, employee: NewEmployee) -> AppResult<EmployeeRecord> {
        let employee_id = {
            let mut state = self.state.lock().unwrap();
            state.inserts += 1;
            state.next_employee_id += 1;
            state.next_employee_id
        };

        if let Some(fault) = self.fail_insert {
            return Err(fault());
        }

        let record = EmployeeRecord {
            id: Uuid::new_v4(),
            employee_id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            password: employee.password,
            classification: employee.classification,
            active: true,
            created_on: Utc::now(),
            manager_id: None,
        };
        self.staged.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn commit(self) -> AppResult<()> {
        if let Some(fault) = self.fail_commit {
            return Err(fault());
        }

        let staged = std::mem::take(&mut *self.staged.lock().unwrap());
        let mut state = self.state.lock().unwrap();
        state.rows.extend(staged);
        state.commits += 1;
        Ok(())
    }

    async fn rollback(self) -> AppResult<()> {
        self.staged.lock().unwrap().clear();
        self.state.lock().unwrap().rollbacks += 1;

        match self.fail_rollback {
            Some(fault) => Err(fault()),
            None => Ok(()),
        }
    }
}

/// Transformer with a cheap work factor so tests stay fast.
pub fn fast_transformer() -> FieldTransformer {
    FieldTransformer::new(PasswordCost {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
}

pub fn save_request(first: &str, last: &str, password: &str) -> EmployeeSaveRequest {
    EmployeeSaveRequest {
        first_name: first.to_string(),
        last_name: last.to_string(),
        password: password.to_string(),
        is_initial_employee: false,
        classification: None,
    }
}
