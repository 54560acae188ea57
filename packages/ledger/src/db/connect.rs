//! Store connection bootstrap.
//!
//! Opens the SQLite database file when a path is configured. When the file
//! cannot be opened the store degrades to a transient in-memory database and
//! keeps working; the degradation is logged and surfaced through
//! `StoreHandle::persistent` so callers can warn that data will not survive
//! a restart.

use std::path::Path;
use std::time::Duration;

use migration::migrate;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection};
use thiserror::Error;
use tracing::{info, warn};

const MEMORY_URL: &str = "sqlite::memory:";

#[derive(Debug, Error)]
pub enum StoreInitError {
    #[error("configuration error: {message}")]
    Config { message: String },
    #[error("storage unavailable: {message}")]
    Storage { message: String },
}

/// An opened, migrated connection plus whether it is backed by a file.
#[derive(Debug)]
pub struct StoreHandle {
    pub db: DatabaseConnection,
    pub persistent: bool,
}

/// Open the store connection and bring the schema up to date.
///
/// `path = None` requests a transient in-memory store outright; in that case
/// no fallback warning is emitted.
pub async fn connect_store(path: Option<&Path>) -> Result<StoreHandle, StoreInitError> {
    if let Some(path) = path {
        let url = format!("sqlite://{}?mode=rwc", path.display());
        match connect(&url, false).await {
            Ok(db) => {
                apply_file_pragmas(&db).await?;
                run_migrations(&db).await?;
                info!(path = %path.display(), "using persistent sqlite storage");
                return Ok(StoreHandle {
                    db,
                    persistent: true,
                });
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "storage unavailable, falling back to in-memory store; data will not survive a restart"
                );
            }
        }
    }

    let db = connect(MEMORY_URL, true)
        .await
        .map_err(|e| StoreInitError::Storage {
            message: format!("failed to open in-memory store: {e}"),
        })?;
    run_migrations(&db).await?;
    info!("using in-memory sqlite storage");
    Ok(StoreHandle {
        db,
        persistent: false,
    })
}

async fn connect(url: &str, memory: bool) -> Result<DatabaseConnection, sea_orm::DbErr> {
    let mut opt = ConnectOptions::new(url);
    if memory {
        // Every pooled connection to sqlite::memory: would get its own
        // database; pin the pool to a single connection.
        opt.min_connections(1).max_connections(1);
    } else {
        opt.max_connections(4);
    }
    opt.acquire_timeout(Duration::from_secs(2)).sqlx_logging(false);

    let db = Database::connect(opt).await?;
    db.ping().await?;
    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), StoreInitError> {
    migrate(db)
        .await
        .map_err(|e| StoreInitError::Storage {
            message: format!("migration execution failed: {e}"),
        })
}

async fn apply_file_pragmas(db: &DatabaseConnection) -> Result<(), StoreInitError> {
    use sea_orm::Statement;

    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        "PRAGMA journal_mode = WAL;",
    ))
    .await
    .map_err(|e| StoreInitError::Storage {
        message: format!("failed to set journal_mode: {e}"),
    })?;

    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        "PRAGMA synchronous = NORMAL;",
    ))
    .await
    .map_err(|e| StoreInitError::Storage {
        message: format!("failed to set synchronous: {e}"),
    })?;

    Ok(())
}
