//! SeaORM adapter for score entries - generic over ConnectionTrait.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder, Set,
};

use crate::entities::scores;

/// DTO for one conflict-resolved score write.
#[derive(Debug, Clone, Copy)]
pub struct ScoreUpsert {
    pub session_id: i64,
    pub round_index: i32,
    pub player_id: i64,
    pub value: i64,
}

/// Upsert on the composite key `(session_id, round_index, player_id)`.
/// Idempotent: replaying the same write leaves identical state.
pub async fn upsert_score<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ScoreUpsert,
) -> Result<(), sea_orm::DbErr> {
    let score_active = scores::ActiveModel {
        session_id: Set(dto.session_id),
        round_index: Set(dto.round_index),
        player_id: Set(dto.player_id),
        value: Set(dto.value),
    };

    scores::Entity::insert(score_active)
        .on_conflict(
            OnConflict::columns([
                scores::Column::SessionId,
                scores::Column::RoundIndex,
                scores::Column::PlayerId,
            ])
            .update_column(scores::Column::Value)
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    Ok(())
}

pub async fn find_by_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Vec<scores::Model>, sea_orm::DbErr> {
    scores::Entity::find()
        .filter(scores::Column::SessionId.eq(session_id))
        .order_by(scores::Column::RoundIndex, Order::Asc)
        .order_by(scores::Column::PlayerId, Order::Asc)
        .all(conn)
        .await
}

/// Highest round_index written for a session, None when nothing is written.
/// The dynamic grid's visible row count is derived from this, never stored.
pub async fn max_round_index<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Option<i32>, sea_orm::DbErr> {
    let top = scores::Entity::find()
        .filter(scores::Column::SessionId.eq(session_id))
        .order_by(scores::Column::RoundIndex, Order::Desc)
        .one(conn)
        .await?;
    Ok(top.map(|s| s.round_index))
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<scores::Model>, sea_orm::DbErr> {
    scores::Entity::find()
        .order_by(scores::Column::SessionId, Order::Asc)
        .order_by(scores::Column::RoundIndex, Order::Asc)
        .order_by(scores::Column::PlayerId, Order::Asc)
        .all(conn)
        .await
}
