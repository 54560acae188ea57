//! Session store service: creation, by-date listing and detail snapshots.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;
use time::{Date, OffsetDateTime, UtcOffset};
use tracing::info;

use crate::db::txn::with_txn;
use crate::errors::domain::DomainError;
use crate::repos::players::{self, Player};
use crate::repos::scores::{self, ScoreEntry};
use crate::repos::sessions::{self, Session};
use crate::repos::templates::{self, Template};
use crate::services::roster;

pub use crate::repos::sessions::SessionSummary;

/// One consistent snapshot of everything a scoreboard needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDetails {
    pub session: Session,
    pub template: Template,
    pub players: Vec<Player>,
    pub scores: Vec<ScoreEntry>,
}

/// Creates and retrieves game sessions, scoped by calendar date.
pub struct SessionStore {
    db: DatabaseConnection,
}

impl SessionStore {
    pub(crate) fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a session against a template and seat the initial roster.
    ///
    /// All-or-nothing: the session row and its player rows commit in one
    /// transaction, so a reader never observes a session with zero players,
    /// and a validation failure persists nothing.
    pub async fn create(
        &self,
        template_id: i64,
        player_names: &[String],
    ) -> Result<i64, DomainError> {
        let template = templates::require_template(&self.db, template_id).await?;

        let seats: Vec<String> = player_names
            .iter()
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty())
            .collect();

        let distinct: HashSet<&str> = seats.iter().map(String::as_str).collect();
        if (distinct.len() as u32) < template.min_players {
            return Err(DomainError::validation(format!(
                "template '{}' needs at least {} distinct players, got {}",
                template.name,
                template.min_players,
                distinct.len()
            )));
        }
        if (seats.len() as u32) > template.max_players {
            return Err(DomainError::validation(format!(
                "template '{}' seats at most {} players, got {}",
                template.name,
                template.max_players,
                seats.len()
            )));
        }

        let played_at = today();
        let session = with_txn(&self.db, |txn| {
            Box::pin(async move {
                let session = sessions::create_session(txn, template_id, played_at).await?;
                for name in &seats {
                    roster::append_seat(txn, session.id, name).await?;
                }
                Ok(session)
            })
        })
        .await?;

        info!(
            session_id = session.id,
            template = %template.name,
            "session created"
        );
        Ok(session.id)
    }

    /// Sessions played on the given date, with the template display name.
    pub async fn by_date(&self, date: Date) -> Result<Vec<SessionSummary>, DomainError> {
        sessions::list_by_date(&self.db, date).await
    }

    /// Everything about one session, read in a single transaction.
    pub async fn details(&self, session_id: i64) -> Result<SessionDetails, DomainError> {
        with_txn(&self.db, |txn| {
            Box::pin(async move {
                let session = sessions::require_session(txn, session_id).await?;
                let template = templates::require_template(txn, session.template_id).await?;
                let players = players::list_by_session(txn, session_id).await?;
                let scores = scores::list_by_session(txn, session_id).await?;
                Ok(SessionDetails {
                    session,
                    template,
                    players,
                    scores,
                })
            })
        })
        .await
    }
}

/// The local calendar date used to stamp and group sessions. Falls back to
/// the UTC date when the local offset cannot be determined.
pub fn today() -> Date {
    let now = OffsetDateTime::now_utc();
    match UtcOffset::current_local_offset() {
        Ok(offset) => now.to_offset(offset).date(),
        Err(_) => now.date(),
    }
}
