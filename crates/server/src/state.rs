use std::sync::Arc;

use service::phonebook::{PersonStore, PhonebookService};

/// Shared handler state; the store is chosen once at startup and injected here.
#[derive(Clone)]
pub struct ServerState {
    pub phonebook: Arc<PhonebookService>,
}

impl ServerState {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { phonebook: Arc::new(PhonebookService::new(store)) }
    }
}
