//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{EmployeeClassification, EmployeeRecord};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Serial, assigned by the database
    #[sea_orm(unique)]
    pub employee_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub password: Vec<u8>,
    pub classification: i32,
    /// Defaults to true in the database
    pub active: bool,
    /// Defaults to now() in the database
    pub created_on: DateTimeUtc,
    pub manager_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain record
impl From<Model> for EmployeeRecord {
    fn from(model: Model) -> Self {
        EmployeeRecord {
            id: model.id,
            employee_id: model.employee_id,
            first_name: model.first_name,
            last_name: model.last_name,
            password: model.password,
            classification: EmployeeClassification::from(model.classification),
            active: model.active,
            created_on: model.created_on,
            manager_id: model.manager_id,
        }
    }
}
