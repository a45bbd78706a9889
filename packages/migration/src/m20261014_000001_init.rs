use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Players {
    Table,
    Id,
    SeasonId,
    Name,
    BattingInnings,
    BattingRuns,
    BattingBalls,
    BattingFours,
    BattingSixes,
    BattingOuts,
    BattingDucks,
    BowlingInnings,
    BowlingBalls,
    BowlingRuns,
    BowlingWickets,
    BowlingMaidens,
    Catches,
    RunOuts,
    ManOfMatch,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Teams {
    Table,
    Id,
    SeasonId,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum TeamPlayers {
    Table,
    Id,
    TeamId,
    PlayerId,
    Position,
}

#[derive(Iden)]
enum CompletedMatches {
    Table,
    Id,
    SeasonId,
    MatchType,
    TotalOvers,
    TeamA,
    TeamB,
    Winner,
    ResultKind,
    Margin,
    ManOfTheMatch,
    Status,
    Document,
    CompletedAt,
}

fn counter<T: IntoIden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col).integer().not_null().default(0).to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Players::SeasonId).big_integer().not_null())
                    .col(ColumnDef::new(Players::Name).string().not_null())
                    .col(counter(Players::BattingInnings))
                    .col(counter(Players::BattingRuns))
                    .col(counter(Players::BattingBalls))
                    .col(counter(Players::BattingFours))
                    .col(counter(Players::BattingSixes))
                    .col(counter(Players::BattingOuts))
                    .col(counter(Players::BattingDucks))
                    .col(counter(Players::BowlingInnings))
                    .col(counter(Players::BowlingBalls))
                    .col(counter(Players::BowlingRuns))
                    .col(counter(Players::BowlingWickets))
                    .col(counter(Players::BowlingMaidens))
                    .col(counter(Players::Catches))
                    .col(counter(Players::RunOuts))
                    .col(counter(Players::ManOfMatch))
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Players::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_players_season_name")
                    .table(Players::Table)
                    .col(Players::SeasonId)
                    .col(Players::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // teams
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teams::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Teams::SeasonId).big_integer().not_null())
                    .col(ColumnDef::new(Teams::Name).string().not_null())
                    .col(
                        ColumnDef::new(Teams::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Teams::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_teams_season_name")
                    .table(Teams::Table)
                    .col(Teams::SeasonId)
                    .col(Teams::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // team_players (ordered roster)
        manager
            .create_table(
                Table::create()
                    .table(TeamPlayers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeamPlayers::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(TeamPlayers::TeamId).big_integer().not_null())
                    .col(
                        ColumnDef::new(TeamPlayers::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TeamPlayers::Position).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_players_team")
                            .from(TeamPlayers::Table, TeamPlayers::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_players_player")
                            .from(TeamPlayers::Table, TeamPlayers::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_team_players_team_position")
                    .table(TeamPlayers::Table)
                    .col(TeamPlayers::TeamId)
                    .col(TeamPlayers::Position)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // completed_matches
        manager
            .create_table(
                Table::create()
                    .table(CompletedMatches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompletedMatches::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(CompletedMatches::SeasonId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CompletedMatches::MatchType).string().not_null())
                    .col(ColumnDef::new(CompletedMatches::TotalOvers).integer().null())
                    .col(ColumnDef::new(CompletedMatches::TeamA).string().not_null())
                    .col(ColumnDef::new(CompletedMatches::TeamB).string().not_null())
                    .col(ColumnDef::new(CompletedMatches::Winner).string().null())
                    .col(ColumnDef::new(CompletedMatches::ResultKind).string().not_null())
                    .col(ColumnDef::new(CompletedMatches::Margin).integer().not_null())
                    .col(ColumnDef::new(CompletedMatches::ManOfTheMatch).string().null())
                    .col(ColumnDef::new(CompletedMatches::Status).string().not_null())
                    .col(ColumnDef::new(CompletedMatches::Document).text().not_null())
                    .col(
                        ColumnDef::new(CompletedMatches::CompletedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_completed_matches_season")
                    .table(CompletedMatches::Table)
                    .col(CompletedMatches::SeasonId)
                    .col(CompletedMatches::CompletedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompletedMatches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeamPlayers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;
        Ok(())
    }
}
