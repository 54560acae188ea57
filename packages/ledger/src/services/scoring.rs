//! Score aggregation: per-player totals and winner determination.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::entities::templates::WinCondition;
use crate::errors::domain::DomainError;
use crate::repos::{players, scores, sessions, templates};

/// A player's running total, in seat order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTotal {
    pub player_id: i64,
    pub name: String,
    pub seat_index: u32,
    pub total: i64,
}

/// Derives totals and winner(s) from ledger contents and template policy.
pub struct ScoreAggregator {
    db: DatabaseConnection,
}

impl ScoreAggregator {
    pub(crate) fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sum of score values per seated player, in seat order. Players with no
    /// entries total 0.
    pub async fn totals(&self, session_id: i64) -> Result<Vec<PlayerTotal>, DomainError> {
        sessions::require_session(&self.db, session_id).await?;

        let roster = players::list_by_session(&self.db, session_id).await?;
        let entries = scores::list_by_session(&self.db, session_id).await?;

        let mut by_player: HashMap<i64, i64> = HashMap::new();
        for entry in &entries {
            *by_player.entry(entry.player_id).or_insert(0) += entry.value;
        }

        Ok(roster
            .into_iter()
            .map(|p| PlayerTotal {
                total: by_player.get(&p.id).copied().unwrap_or(0),
                player_id: p.id,
                name: p.name,
                seat_index: p.seat_index,
            })
            .collect())
    }

    /// Every player whose total equals the best total under the template's
    /// win condition, in seat order. Ties are permitted and yield multiple
    /// winners.
    pub async fn winners(&self, session_id: i64) -> Result<Vec<PlayerTotal>, DomainError> {
        let session = sessions::require_session(&self.db, session_id).await?;
        let template = templates::require_template(&self.db, session.template_id).await?;
        let totals = self.totals(session_id).await?;

        let best = match template.win_condition {
            WinCondition::HighestScore => totals.iter().map(|t| t.total).max(),
            WinCondition::LowestScore => totals.iter().map(|t| t.total).min(),
        };

        let Some(best) = best else {
            return Ok(Vec::new());
        };

        Ok(totals.into_iter().filter(|t| t.total == best).collect())
    }
}
