//! Phonebook module: domain types, the `PersonStore` contract with its two
//! implementations, and the service the HTTP layer talks to.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

use std::sync::Arc;

use configs::{AppConfig, StorageBackend};
use tracing::info;

pub use domain::{Person, PersonId, PersonInput};
pub use repo::{memory::MemoryPersonStore, seaorm::SeaOrmPersonStore};
pub use repository::PersonStore;
pub use service::PhonebookService;

/// Pick the store implementation named by `storage.backend`.
///
/// The postgres backend connects, pings and (unless disabled) creates the
/// table before returning.
pub async fn build_store(cfg: &AppConfig) -> anyhow::Result<Arc<dyn PersonStore>> {
    match cfg.storage.backend {
        StorageBackend::Memory => {
            info!(backend = "memory", "person store ready");
            Ok(Arc::new(MemoryPersonStore::new()))
        }
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            if cfg.database.create_schema {
                models::db::ensure_schema(&db).await?;
            }
            info!(backend = "postgres", "person store ready");
            Ok(Arc::new(SeaOrmPersonStore::new(db)))
        }
    }
}
