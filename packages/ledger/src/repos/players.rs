//! Seat repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::players_sea as players_adapter;
use crate::entities::session_players;
use crate::errors::domain::{DomainError, NotFoundKind};

/// A player's seat within a session, with a stable display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub session_id: i64,
    pub name: String,
    pub seat_index: u32,
}

pub async fn create_player(
    txn: &DatabaseTransaction,
    session_id: i64,
    name: &str,
    seat_index: u32,
) -> Result<Player, DomainError> {
    let dto = players_adapter::PlayerInsert {
        session_id,
        name: name.to_owned(),
        seat_index: seat_index as i32,
    };
    let player = players_adapter::insert_player(txn, dto).await?;
    Ok(Player::from(player))
}

pub async fn list_by_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Vec<Player>, DomainError> {
    let players = players_adapter::find_by_session(conn, session_id).await?;
    Ok(players.into_iter().map(Player::from).collect())
}

/// Find a player seated in the given session, or error.
pub async fn require_in_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
    player_id: i64,
) -> Result<Player, DomainError> {
    let player = players_adapter::find_in_session(conn, session_id, player_id).await?;
    player.map(Player::from).ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Player,
            format!("player {player_id} not seated in session {session_id}"),
        )
    })
}

/// Next free seat: `1 + max(existing seat_index, -1)`.
pub async fn next_seat_index<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<u32, DomainError> {
    let max = players_adapter::max_seat_index(conn, session_id).await?;
    Ok((1 + max.unwrap_or(-1)) as u32)
}

// Conversions between SeaORM models and domain models

impl From<session_players::Model> for Player {
    fn from(model: session_players::Model) -> Self {
        Self {
            id: model.id,
            session_id: model.session_id,
            name: model.name,
            seat_index: model.seat_index.max(0) as u32,
        }
    }
}
