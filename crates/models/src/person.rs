//! `phonebook` table.
//!
//! Column names are lowercase (`phonenr`) so rows written by other clients
//! that created the table with unquoted identifiers stay readable.
use sea_orm::entity::prelude::*;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "phonebook")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_name = "phonenr")]
    pub phone_nr: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    Ok(())
}

pub fn validate_phone_nr(phone_nr: &str) -> Result<(), ModelError> {
    if phone_nr.trim().is_empty() {
        return Err(ModelError::Validation("phoneNr required".into()));
    }
    Ok(())
}
