use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

pub type PersonId = i32;

/// Stored phonebook record. Serializes as `{"id":..,"name":..,"phoneNr":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[serde(rename = "phoneNr")]
    pub phone_nr: String,
}

/// Create/update payload. The id comes from storage (create) or the path (update).
///
/// Absent fields deserialize as empty strings so validation, not parsing,
/// reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInput {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "phoneNr")]
    pub phone_nr: String,
}

impl PersonInput {
    pub fn new(name: impl Into<String>, phone_nr: impl Into<String>) -> Self {
        Self { name: name.into(), phone_nr: phone_nr.into() }
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        models::person::validate_name(&self.name)?;
        models::person::validate_phone_nr(&self.phone_nr)?;
        Ok(())
    }

    pub fn with_id(self, id: PersonId) -> Person {
        Person { id, name: self.name, phone_nr: self.phone_nr }
    }
}

impl From<models::person::Model> for Person {
    fn from(m: models::person::Model) -> Self {
        Person { id: m.id, name: m.name, phone_nr: m.phone_nr }
    }
}
