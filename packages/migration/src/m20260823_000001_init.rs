use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Templates {
    Table,
    Id,
    Name,
    MinPlayers,
    MaxPlayers,
    WinCondition,
    RoundStructure,
    DefaultRoundNames,
}

#[derive(Iden)]
enum Sessions {
    Table,
    Id,
    TemplateId,
    PlayedAt,
    IsFinished,
}

#[derive(Iden)]
enum SessionPlayers {
    Table,
    Id,
    SessionId,
    Name,
    SeatIndex,
}

#[derive(Iden)]
enum Scores {
    Table,
    SessionId,
    RoundIndex,
    PlayerId,
    Value,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // templates
        manager
            .create_table(
                Table::create()
                    .table(Templates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Templates::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Templates::Name).string().not_null())
                    .col(ColumnDef::new(Templates::MinPlayers).integer().not_null())
                    .col(ColumnDef::new(Templates::MaxPlayers).integer().not_null())
                    .col(ColumnDef::new(Templates::WinCondition).string().not_null())
                    .col(
                        ColumnDef::new(Templates::RoundStructure)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Templates::DefaultRoundNames)
                            .text()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // sessions
        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sessions::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Sessions::TemplateId).big_integer().not_null())
                    .col(ColumnDef::new(Sessions::PlayedAt).date().not_null())
                    .col(
                        ColumnDef::new(Sessions::IsFinished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessions_template_id")
                            .from(Sessions::Table, Sessions::TemplateId)
                            .to(Templates::Table, Templates::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // index for the "today's games" dashboard query
        manager
            .create_index(
                Index::create()
                    .name("ix_sessions_played_at")
                    .table(Sessions::Table)
                    .col(Sessions::PlayedAt)
                    .to_owned(),
            )
            .await?;

        // session_players
        manager
            .create_table(
                Table::create()
                    .table(SessionPlayers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SessionPlayers::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(SessionPlayers::SessionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SessionPlayers::Name).string().not_null())
                    .col(
                        ColumnDef::new(SessionPlayers::SeatIndex)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_players_session_id")
                            .from(SessionPlayers::Table, SessionPlayers::SessionId)
                            .to(Sessions::Table, Sessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // seat order is unique within a session
        manager
            .create_index(
                Index::create()
                    .name("ux_session_players_session_seat")
                    .table(SessionPlayers::Table)
                    .col(SessionPlayers::SessionId)
                    .col(SessionPlayers::SeatIndex)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // scores, composite primary key drives the conflict-resolved upsert
        manager
            .create_table(
                Table::create()
                    .table(Scores::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Scores::SessionId).big_integer().not_null())
                    .col(ColumnDef::new(Scores::RoundIndex).integer().not_null())
                    .col(ColumnDef::new(Scores::PlayerId).big_integer().not_null())
                    .col(ColumnDef::new(Scores::Value).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(Scores::SessionId)
                            .col(Scores::RoundIndex)
                            .col(Scores::PlayerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scores_session_id")
                            .from(Scores::Table, Scores::SessionId)
                            .to(Sessions::Table, Sessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scores_player_id")
                            .from(Scores::Table, Scores::PlayerId)
                            .to(SessionPlayers::Table, SessionPlayers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scores::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(SessionPlayers::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Sessions::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Templates::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
