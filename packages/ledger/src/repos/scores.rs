//! Score entry repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::scores_sea as scores_adapter;
use crate::entities::scores;
use crate::errors::domain::DomainError;

/// One (round, player) value within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEntry {
    pub session_id: i64,
    pub round_index: u32,
    pub player_id: i64,
    pub value: i64,
}

/// Conflict-resolved upsert on `(session_id, round_index, player_id)`.
pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
    round_index: u32,
    player_id: i64,
    value: i64,
) -> Result<(), DomainError> {
    // The column is a signed 32-bit integer; a wrapping cast would store a
    // corrupt key.
    let round_index = i32::try_from(round_index).map_err(|_| {
        DomainError::validation(format!("round index {round_index} exceeds the storable range"))
    })?;
    let dto = scores_adapter::ScoreUpsert {
        session_id,
        round_index,
        player_id,
        value,
    };
    scores_adapter::upsert_score(conn, dto).await?;
    Ok(())
}

pub async fn list_by_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Vec<ScoreEntry>, DomainError> {
    let entries = scores_adapter::find_by_session(conn, session_id).await?;
    Ok(entries.into_iter().map(ScoreEntry::from).collect())
}

/// Highest written round index, None when the session has no entries.
pub async fn max_round_index<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Option<u32>, DomainError> {
    let max = scores_adapter::max_round_index(conn, session_id).await?;
    Ok(max.map(|v| v.max(0) as u32))
}

// Conversions between SeaORM models and domain models

impl From<scores::Model> for ScoreEntry {
    fn from(model: scores::Model) -> Self {
        Self {
            session_id: model.session_id,
            round_index: model.round_index.max(0) as u32,
            player_id: model.player_id,
            value: model.value,
        }
    }
}
