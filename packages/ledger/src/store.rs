//! The store handle.
//!
//! One `Store` is constructed at startup and handed to whoever needs the
//! command/query surface; every component receives the connection through
//! it rather than through shared global state, so tests can run an isolated
//! in-memory instance per case.

use sea_orm::DatabaseConnection;

use crate::config::StoreConfig;
use crate::db::connect::{connect_store, StoreInitError};
use crate::errors::domain::DomainError;
use crate::export;
use crate::seed;
use crate::services::catalog::TemplateCatalog;
use crate::services::ledger::ScoreLedger;
use crate::services::roster::RosterManager;
use crate::services::scoring::ScoreAggregator;
use crate::services::sessions::SessionStore;

pub struct Store {
    db: DatabaseConnection,
    config: StoreConfig,
    persistent: bool,
}

impl Store {
    /// Connect, migrate and seed.
    ///
    /// When the configured database file cannot be opened the store degrades
    /// to a transient in-memory database and keeps serving; check
    /// [`Store::is_persistent`] to surface the degradation.
    pub async fn open(config: StoreConfig) -> Result<Self, StoreInitError> {
        let handle = connect_store(config.database_path.as_deref()).await?;

        seed::seed_templates(&handle.db, &config.templates)
            .await
            .map_err(|e| match e {
                DomainError::Config(message) => StoreInitError::Config { message },
                other => StoreInitError::Storage {
                    message: other.to_string(),
                },
            })?;

        Ok(Self {
            db: handle.db,
            config,
            persistent: handle.persistent,
        })
    }

    /// Whether writes survive a restart. False on the in-memory fallback;
    /// degradation must be visible but must not block gameplay.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn catalog(&self) -> TemplateCatalog {
        TemplateCatalog::new(self.db.clone())
    }

    pub fn sessions(&self) -> SessionStore {
        SessionStore::new(self.db.clone())
    }

    pub fn roster(&self) -> RosterManager {
        RosterManager::new(self.db.clone())
    }

    pub fn ledger(&self) -> ScoreLedger {
        ScoreLedger::new(self.db.clone(), self.config.ledger.clone())
    }

    pub fn aggregator(&self) -> ScoreAggregator {
        ScoreAggregator::new(self.db.clone())
    }

    /// Whole-store serialization for backup.
    pub async fn export_snapshot(&self) -> Result<Vec<u8>, DomainError> {
        export::export_snapshot(&self.db).await
    }

    /// Raw connection, for tests and embedders that need direct queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}
