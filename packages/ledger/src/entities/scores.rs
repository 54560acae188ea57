use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "scores")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "session_id")]
    pub session_id: i64,
    #[sea_orm(primary_key, auto_increment = false, column_name = "round_index")]
    pub round_index: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "player_id")]
    pub player_id: i64,
    pub value: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sessions::Entity",
        from = "Column::SessionId",
        to = "super::sessions::Column::Id"
    )]
    Session,
    #[sea_orm(
        belongs_to = "super::session_players::Entity",
        from = "Column::PlayerId",
        to = "super::session_players::Column::Id"
    )]
    SessionPlayer,
}

impl Related<super::sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl Related<super::session_players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionPlayer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
