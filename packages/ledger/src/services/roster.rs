//! Roster service: the sole write path for session seats.

use sea_orm::{DatabaseConnection, DatabaseTransaction};

use crate::db::txn::with_txn;
use crate::errors::domain::DomainError;
use crate::repos::players::{self, Player};
use crate::repos::sessions;

/// Maintains the ordered, append-only list of players seated at a session.
/// Seats are never removed or reordered.
pub struct RosterManager {
    db: DatabaseConnection,
}

impl RosterManager {
    pub(crate) fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Append a seat at the end of the roster. Supported mid-session;
    /// existing entries and totals are untouched.
    pub async fn add_player(&self, session_id: i64, name: &str) -> Result<Player, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("player name must not be blank"));
        }

        sessions::require_session(&self.db, session_id).await?;

        let name = name.to_owned();
        with_txn(&self.db, |txn| {
            Box::pin(async move { append_seat(txn, session_id, &name).await })
        })
        .await
    }
}

/// Append one seat with `seat_index = 1 + max(existing, -1)`. Every player
/// row in the store is written through here, which keeps seat indexes unique
/// and in insertion order.
pub(crate) async fn append_seat(
    txn: &DatabaseTransaction,
    session_id: i64,
    name: &str,
) -> Result<Player, DomainError> {
    let seat_index = players::next_seat_index(txn, session_id).await?;
    players::create_player(txn, session_id, name, seat_index).await
}
