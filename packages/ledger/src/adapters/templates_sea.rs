//! SeaORM adapter for the template catalog - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::templates;

/// DTO for seeding one template row.
#[derive(Debug, Clone)]
pub struct TemplateInsert {
    pub name: String,
    pub min_players: i32,
    pub max_players: i32,
    pub win_condition: templates::WinCondition,
    pub round_structure: templates::RoundStructure,
    /// Already encoded with the canonical round-name codec.
    pub default_round_names: String,
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<templates::Model>, sea_orm::DbErr> {
    templates::Entity::find()
        .order_by(templates::Column::Id, Order::Asc)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    template_id: i64,
) -> Result<Option<templates::Model>, sea_orm::DbErr> {
    templates::Entity::find()
        .filter(templates::Column::Id.eq(template_id))
        .one(conn)
        .await
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    templates::Entity::find().count(conn).await
}

pub async fn insert_template<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TemplateInsert,
) -> Result<templates::Model, sea_orm::DbErr> {
    let template_active = templates::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        min_players: Set(dto.min_players),
        max_players: Set(dto.max_players),
        win_condition: Set(dto.win_condition),
        round_structure: Set(dto.round_structure),
        default_round_names: Set(dto.default_round_names),
    };

    template_active.insert(conn).await
}
