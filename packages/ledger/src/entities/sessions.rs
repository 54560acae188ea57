use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "template_id")]
    pub template_id: i64,
    #[sea_orm(column_name = "played_at")]
    pub played_at: Date,
    #[sea_orm(column_name = "is_finished")]
    pub is_finished: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::templates::Entity",
        from = "Column::TemplateId",
        to = "super::templates::Column::Id"
    )]
    Template,
    #[sea_orm(has_many = "super::session_players::Entity")]
    SessionPlayers,
    #[sea_orm(has_many = "super::scores::Entity")]
    Scores,
}

impl Related<super::templates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Template.def()
    }
}

impl Related<super::session_players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionPlayers.def()
    }
}

impl Related<super::scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
