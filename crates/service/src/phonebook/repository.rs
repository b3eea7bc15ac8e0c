use async_trait::async_trait;

use super::domain::{Person, PersonId, PersonInput};
use crate::errors::ServiceError;

/// Storage contract for phonebook records.
///
/// - `get` on an unknown id is `ServiceError::NotFound`.
/// - `update` on an unknown id is a silent no-op.
/// - `delete` on an unknown id is a silent no-op.
/// - Any failure of the medium is `ServiceError::Storage`.
#[async_trait]
pub trait PersonStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Person>, ServiceError>;
    async fn get(&self, id: PersonId) -> Result<Person, ServiceError>;
    /// Persist a new record and return the id storage assigned to it.
    async fn create(&self, input: PersonInput) -> Result<PersonId, ServiceError>;
    /// Full replace of the record at `person.id`.
    async fn update(&self, person: Person) -> Result<(), ServiceError>;
    async fn delete(&self, id: PersonId) -> Result<(), ServiceError>;
}
