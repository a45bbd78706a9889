use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Season-scoped career totals, unique by (season_id, normalized name).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub season_id: i64,
    pub name: String,
    pub batting_innings: i32,
    pub batting_runs: i32,
    pub batting_balls: i32,
    pub batting_fours: i32,
    pub batting_sixes: i32,
    pub batting_outs: i32,
    pub batting_ducks: i32,
    pub bowling_innings: i32,
    pub bowling_balls: i32,
    pub bowling_runs: i32,
    pub bowling_wickets: i32,
    pub bowling_maidens: i32,
    pub catches: i32,
    pub run_outs: i32,
    pub man_of_match: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team_players::Entity")]
    TeamPlayers,
}

impl Related<super::team_players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamPlayers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
