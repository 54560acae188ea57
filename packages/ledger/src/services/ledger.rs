//! Score ledger service: round×player score writes and the visible round
//! range for the grid.

use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::config::LedgerConfig;
use crate::entities::templates::RoundStructure;
use crate::errors::domain::DomainError;
use crate::repos::templates::Template;
use crate::repos::{players, scores, sessions, templates};

/// Stores and updates individual round×player score values.
pub struct ScoreLedger {
    db: DatabaseConnection,
    config: LedgerConfig,
}

impl ScoreLedger {
    pub(crate) fn new(db: DatabaseConnection, config: LedgerConfig) -> Self {
        Self { db, config }
    }

    /// Upsert one score value.
    ///
    /// `raw_value` is free-form text; blank or non-numeric input stores `0`.
    /// For FIXED templates the round index must fall inside the permanent
    /// round range. Idempotent: replaying a call changes nothing.
    pub async fn set_score(
        &self,
        session_id: i64,
        round_index: u32,
        player_id: i64,
        raw_value: &str,
    ) -> Result<(), DomainError> {
        let template = self.session_template(session_id).await?;

        if let Some(round_count) = template.fixed_round_count() {
            if round_index >= round_count {
                return Err(DomainError::validation(format!(
                    "round index {round_index} out of range: template '{}' has {round_count} rounds",
                    template.name
                )));
            }
        }

        players::require_in_session(&self.db, session_id, player_id).await?;

        let value = coerce_value(raw_value);
        scores::upsert(&self.db, session_id, round_index, player_id, value).await?;

        debug!(session_id, round_index, player_id, value, "score stored");
        Ok(())
    }

    /// Number of round rows a caller is offered to fill.
    ///
    /// FIXED templates always offer the permanent round count. DYNAMIC
    /// templates auto-extend: `max(highest written + 1 + extend_ahead,
    /// min_visible_rounds)`, derived by scanning existing entries and never
    /// persisted.
    pub async fn visible_round_count(&self, session_id: i64) -> Result<u32, DomainError> {
        let template = self.session_template(session_id).await?;

        match template.round_structure {
            RoundStructure::Fixed => Ok(template.default_round_names.len() as u32),
            RoundStructure::Dynamic => {
                let highest = scores::max_round_index(&self.db, session_id).await?;
                let written = highest.map(|h| h + 1).unwrap_or(0);
                Ok((written + self.config.extend_ahead).max(self.config.min_visible_rounds))
            }
        }
    }

    async fn session_template(&self, session_id: i64) -> Result<Template, DomainError> {
        let session = sessions::require_session(&self.db, session_id).await?;
        templates::require_template(&self.db, session.template_id).await
    }
}

/// Lenient input coercion: trimmed integer parse, anything else stores 0.
pub(crate) fn coerce_value(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}
