#![cfg(test)]
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Ensure the table is created only once across the entire test process
static SCHEMA_READY: OnceCell<()> = OnceCell::const_new();

/// Live PostgreSQL for tests, configured from `DB_*`.
///
/// Returns `None` (and the caller skips) when `SKIP_DB_TESTS` is set or the
/// database is unreachable.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let mut cfg = match DatabaseConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("skip: bad database env: {}", e);
            return None;
        }
    };
    cfg.connect_timeout_secs = 3;
    cfg.acquire_timeout_secs = 3;
    let db = match models::db::connect_with_config(&cfg).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    let conn = &db;
    let ready = SCHEMA_READY
        .get_or_try_init(|| async move { models::db::ensure_schema(conn).await })
        .await;
    if let Err(e) = ready {
        eprintln!("skip: cannot create phonebook table: {}", e);
        return None;
    }
    Some(db)
}
