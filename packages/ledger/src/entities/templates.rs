use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum WinCondition {
    #[sea_orm(string_value = "HIGHEST_SCORE")]
    HighestScore,
    #[sea_orm(string_value = "LOWEST_SCORE")]
    LowestScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum RoundStructure {
    /// Predetermined, immutable sequence of named rounds.
    #[sea_orm(string_value = "FIXED")]
    Fixed,
    /// Open-ended, auto-growing sequence of numbered rounds.
    #[sea_orm(string_value = "DYNAMIC")]
    Dynamic,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "templates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_name = "min_players")]
    pub min_players: i32,
    #[sea_orm(column_name = "max_players")]
    pub max_players: i32,
    #[sea_orm(column_name = "win_condition")]
    pub win_condition: WinCondition,
    #[sea_orm(column_name = "round_structure")]
    pub round_structure: RoundStructure,
    /// JSON-encoded ordered list of round labels; empty list for DYNAMIC.
    #[sea_orm(column_name = "default_round_names", column_type = "Text")]
    pub default_round_names: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sessions::Entity")]
    Sessions,
}

impl Related<super::sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
