//! Infrastructure layer - database and transaction management.

mod db;
pub mod migrations;
mod unit_of_work;

pub use db::Database;
pub use unit_of_work::TransactionGateway;
