//! SeaORM adapter for session rows - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, NotSet,
    Order, QueryFilter, QueryOrder, Set,
};
use time::Date;

use crate::entities::{sessions, templates};

/// DTO for creating a session row.
#[derive(Debug, Clone)]
pub struct SessionInsert {
    pub template_id: i64,
    pub played_at: Date,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Option<sessions::Model>, sea_orm::DbErr> {
    sessions::Entity::find()
        .filter(sessions::Column::Id.eq(session_id))
        .one(conn)
        .await
}

/// Sessions played on one calendar date, joined with their template for the
/// denormalized display name.
pub async fn find_by_date_with_template<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    date: Date,
) -> Result<Vec<(sessions::Model, Option<templates::Model>)>, sea_orm::DbErr> {
    sessions::Entity::find()
        .filter(sessions::Column::PlayedAt.eq(date))
        .find_also_related(templates::Entity)
        .order_by(sessions::Column::Id, Order::Asc)
        .all(conn)
        .await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<sessions::Model>, sea_orm::DbErr> {
    sessions::Entity::find()
        .order_by(sessions::Column::Id, Order::Asc)
        .all(conn)
        .await
}

/// Session creation is only valid inside the creation transaction that also
/// seeds the roster.
pub async fn insert_session(
    txn: &DatabaseTransaction,
    dto: SessionInsert,
) -> Result<sessions::Model, sea_orm::DbErr> {
    let session_active = sessions::ActiveModel {
        id: NotSet,
        template_id: Set(dto.template_id),
        played_at: Set(dto.played_at),
        is_finished: Set(false),
    };

    session_active.insert(txn).await
}
