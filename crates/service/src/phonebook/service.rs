use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::domain::{Person, PersonId, PersonInput};
use super::repository::PersonStore;
use crate::errors::ServiceError;

/// Phonebook business service, independent of the web framework and of which
/// store is plugged in.
pub struct PhonebookService {
    store: Arc<dyn PersonStore>,
}

impl PhonebookService {
    pub fn new(store: Arc<dyn PersonStore>) -> Self { Self { store } }

    pub async fn list(&self) -> Result<Vec<Person>, ServiceError> {
        self.store.list().await
    }

    pub async fn get(&self, id: PersonId) -> Result<Person, ServiceError> {
        self.store.get(id).await
    }

    /// Validate and persist a new person, returning the assigned id.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::phonebook::{MemoryPersonStore, PersonInput, PhonebookService};
    /// let svc = PhonebookService::new(Arc::new(MemoryPersonStore::new()));
    /// let id = tokio_test::block_on(svc.create(PersonInput::new("Charlie", "8734265034"))).unwrap();
    /// let person = tokio_test::block_on(svc.get(id)).unwrap();
    /// assert_eq!(person.name, "Charlie");
    /// assert!(tokio_test::block_on(svc.create(PersonInput::new("Charlie", ""))).is_err());
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: PersonInput) -> Result<PersonId, ServiceError> {
        if let Err(e) = input.validate() {
            warn!(error = %e, "person_create_rejected");
            return Err(e);
        }
        let id = self.store.create(input).await?;
        info!(id, "person_created");
        Ok(id)
    }

    /// Full replace of the person at `id`. Unknown ids are not an error.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: PersonId, input: PersonInput) -> Result<(), ServiceError> {
        if let Err(e) = input.validate() {
            warn!(error = %e, "person_update_rejected");
            return Err(e);
        }
        self.store.update(input.with_id(id)).await?;
        info!("person_updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: PersonId) -> Result<(), ServiceError> {
        self.store.delete(id).await?;
        info!("person_deleted");
        Ok(())
    }
}
