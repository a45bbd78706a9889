//! Season player repository functions for the stats pipeline and read models.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::players_sea as players_adapter;
pub use crate::adapters::players_sea::{CounterDelta, Leaderboard};
use crate::entities::players;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BattingTotals {
    pub innings: i32,
    pub runs: i32,
    pub balls: i32,
    pub fours: i32,
    pub sixes: i32,
    pub outs: i32,
    pub ducks: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BowlingTotals {
    pub innings: i32,
    pub balls: i32,
    pub runs: i32,
    pub wickets: i32,
    pub maidens: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MiscTotals {
    pub catches: i32,
    pub run_outs: i32,
    pub man_of_match: i32,
}

/// Player domain model: one season's career totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonPlayer {
    pub id: i64,
    pub season_id: i64,
    pub name: String,
    pub batting: BattingTotals,
    pub bowling: BowlingTotals,
    pub misc: MiscTotals,
}

impl From<players::Model> for SeasonPlayer {
    fn from(m: players::Model) -> Self {
        Self {
            id: m.id,
            season_id: m.season_id,
            name: m.name,
            batting: BattingTotals {
                innings: m.batting_innings,
                runs: m.batting_runs,
                balls: m.batting_balls,
                fours: m.batting_fours,
                sixes: m.batting_sixes,
                outs: m.batting_outs,
                ducks: m.batting_ducks,
            },
            bowling: BowlingTotals {
                innings: m.bowling_innings,
                balls: m.bowling_balls,
                runs: m.bowling_runs,
                wickets: m.bowling_wickets,
                maidens: m.bowling_maidens,
            },
            misc: MiscTotals {
                catches: m.catches,
                run_outs: m.run_outs,
                man_of_match: m.man_of_match,
            },
        }
    }
}

/// Insert zeroed rows for any of `names` not yet in the season, then return
/// the normalized-name -> player id map for all of them.
pub async fn upsert_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
    names: &[String],
) -> Result<HashMap<String, i64>, DomainError> {
    for name in names {
        players_adapter::insert_if_absent(conn, season_id, name).await?;
    }
    let rows = players_adapter::find_by_names(conn, season_id, names).await?;
    Ok(rows.into_iter().map(|m| (m.name, m.id)).collect())
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
    name: &str,
) -> Result<Option<SeasonPlayer>, DomainError> {
    let row = players_adapter::find_by_name(conn, season_id, name).await?;
    Ok(row.map(SeasonPlayer::from))
}

/// Atomically add `delta` to the player's counters.
pub async fn add_counters<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    delta: &CounterDelta,
) -> Result<(), DomainError> {
    let affected = players_adapter::add_counters(conn, player_id, delta).await?;
    if affected == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("Player {player_id} not found"),
        ));
    }
    Ok(())
}

pub async fn leaderboard<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
    board: Leaderboard,
) -> Result<Vec<SeasonPlayer>, DomainError> {
    let rows = players_adapter::leaderboard(conn, season_id, board).await?;
    Ok(rows.into_iter().map(SeasonPlayer::from).collect())
}
