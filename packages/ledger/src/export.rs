//! Whole-store snapshot export for backups.
//!
//! The snapshot is a JSON serialization of all four relations read in one
//! transaction. There is no incremental/delta format.

use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::adapters::{players_sea, scores_sea, sessions_sea, templates_sea};
use crate::db::txn::with_txn;
use crate::entities::{scores, session_players, sessions, templates};
use crate::errors::domain::{DomainError, InfraErrorKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub templates: Vec<templates::Model>,
    pub sessions: Vec<sessions::Model>,
    pub players: Vec<session_players::Model>,
    pub scores: Vec<scores::Model>,
}

pub async fn export_snapshot(db: &DatabaseConnection) -> Result<Vec<u8>, DomainError> {
    let snapshot = with_txn(db, |txn| {
        Box::pin(async move {
            Ok(StoreSnapshot {
                templates: templates_sea::list_all(txn).await?,
                sessions: sessions_sea::list_all(txn).await?,
                players: players_sea::list_all(txn).await?,
                scores: scores_sea::list_all(txn).await?,
            })
        })
    })
    .await?;

    serde_json::to_vec(&snapshot)
        .map_err(|e| DomainError::infra(InfraErrorKind::DataCorruption, e.to_string()))
}
