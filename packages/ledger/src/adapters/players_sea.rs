//! SeaORM adapter for session seats - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    Order, QueryFilter, QueryOrder, Set,
};

use crate::entities::session_players;

/// DTO for appending one seat.
#[derive(Debug, Clone)]
pub struct PlayerInsert {
    pub session_id: i64,
    pub name: String,
    pub seat_index: i32,
}

pub async fn find_by_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Vec<session_players::Model>, sea_orm::DbErr> {
    session_players::Entity::find()
        .filter(session_players::Column::SessionId.eq(session_id))
        .order_by(session_players::Column::SeatIndex, Order::Asc)
        .all(conn)
        .await
}

pub async fn find_in_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
    player_id: i64,
) -> Result<Option<session_players::Model>, sea_orm::DbErr> {
    session_players::Entity::find()
        .filter(session_players::Column::SessionId.eq(session_id))
        .filter(session_players::Column::Id.eq(player_id))
        .one(conn)
        .await
}

/// Highest seat_index currently taken in a session, None for an empty roster.
pub async fn max_seat_index<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Option<i32>, sea_orm::DbErr> {
    let top = session_players::Entity::find()
        .filter(session_players::Column::SessionId.eq(session_id))
        .order_by(session_players::Column::SeatIndex, Order::Desc)
        .one(conn)
        .await?;
    Ok(top.map(|p| p.seat_index))
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<session_players::Model>, sea_orm::DbErr> {
    session_players::Entity::find()
        .order_by(session_players::Column::Id, Order::Asc)
        .all(conn)
        .await
}

/// Seats are only written inside a transaction, through the roster service.
pub async fn insert_player(
    txn: &DatabaseTransaction,
    dto: PlayerInsert,
) -> Result<session_players::Model, sea_orm::DbErr> {
    let player_active = session_players::ActiveModel {
        id: NotSet,
        session_id: Set(dto.session_id),
        name: Set(dto.name),
        seat_index: Set(dto.seat_index),
    };

    player_active.insert(txn).await
}
