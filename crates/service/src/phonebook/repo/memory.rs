use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ServiceError;
use crate::phonebook::domain::{Person, PersonId, PersonInput};
use crate::phonebook::repository::PersonStore;

#[derive(Default)]
struct Book {
    next_id: PersonId,
    people: BTreeMap<PersonId, Person>,
}

/// In-process store. Ids start at 0 and are never reused, even after delete.
///
/// Map and counter share one lock so concurrent creates cannot hand out the same id.
#[derive(Default)]
pub struct MemoryPersonStore {
    inner: RwLock<Book>,
}

impl MemoryPersonStore {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl PersonStore for MemoryPersonStore {
    async fn list(&self) -> Result<Vec<Person>, ServiceError> {
        let book = self.inner.read().await;
        Ok(book.people.values().cloned().collect())
    }

    async fn get(&self, id: PersonId) -> Result<Person, ServiceError> {
        let book = self.inner.read().await;
        book.people.get(&id).cloned().ok_or_else(|| ServiceError::not_found("person"))
    }

    async fn create(&self, input: PersonInput) -> Result<PersonId, ServiceError> {
        let mut book = self.inner.write().await;
        let id = book.next_id;
        book.next_id = id
            .checked_add(1)
            .ok_or_else(|| ServiceError::Storage("person id space exhausted".into()))?;
        book.people.insert(id, input.with_id(id));
        Ok(id)
    }

    async fn update(&self, person: Person) -> Result<(), ServiceError> {
        let mut book = self.inner.write().await;
        match book.people.get_mut(&person.id) {
            Some(slot) => *slot = person,
            None => debug!(id = person.id, "update of unknown person ignored"),
        }
        Ok(())
    }

    async fn delete(&self, id: PersonId) -> Result<(), ServiceError> {
        let mut book = self.inner.write().await;
        book.people.remove(&id);
        Ok(())
    }
}
