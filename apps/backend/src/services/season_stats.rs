//! Season read models over the stats database.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::errors::domain::DomainError;
use crate::repos::matches::{self, CompletedMatchRecord};
use crate::repos::players::{self, Leaderboard};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattingRow {
    pub name: String,
    pub innings: i32,
    pub runs: i32,
    pub balls: i32,
    pub fours: i32,
    pub sixes: i32,
    pub outs: i32,
    pub ducks: i32,
    /// runs per dismissal; `None` while never out
    pub average: Option<f64>,
    pub strike_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlingRow {
    pub name: String,
    pub innings: i32,
    pub overs: String,
    pub runs: i32,
    pub wickets: i32,
    pub maidens: i32,
    pub economy: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MiscRow {
    pub name: String,
    pub catches: i32,
    pub run_outs: i32,
    pub man_of_match: i32,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn ratio(num: i32, den: i32, scale: f64) -> f64 {
    if den <= 0 {
        0.0
    } else {
        round2(f64::from(num) * scale / f64::from(den))
    }
}

fn overs(balls: i32) -> String {
    format!("{}.{}", balls / 6, balls % 6)
}

pub async fn batting<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
) -> Result<Vec<BattingRow>, DomainError> {
    let rows = players::leaderboard(conn, season_id, Leaderboard::Batting).await?;
    Ok(rows
        .into_iter()
        .map(|p| {
            let b = p.batting;
            BattingRow {
                name: p.name,
                innings: b.innings,
                runs: b.runs,
                balls: b.balls,
                fours: b.fours,
                sixes: b.sixes,
                outs: b.outs,
                ducks: b.ducks,
                average: (b.outs > 0).then(|| ratio(b.runs, b.outs, 1.0)),
                strike_rate: ratio(b.runs, b.balls, 100.0),
            }
        })
        .collect())
}

pub async fn bowling<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
) -> Result<Vec<BowlingRow>, DomainError> {
    let rows = players::leaderboard(conn, season_id, Leaderboard::Bowling).await?;
    Ok(rows
        .into_iter()
        .map(|p| {
            let b = p.bowling;
            BowlingRow {
                name: p.name,
                innings: b.innings,
                overs: overs(b.balls),
                runs: b.runs,
                wickets: b.wickets,
                maidens: b.maidens,
                economy: ratio(b.runs, b.balls, 6.0),
            }
        })
        .collect())
}

pub async fn misc<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
) -> Result<Vec<MiscRow>, DomainError> {
    let rows = players::leaderboard(conn, season_id, Leaderboard::Misc).await?;
    Ok(rows
        .into_iter()
        .map(|p| MiscRow {
            name: p.name,
            catches: p.misc.catches,
            run_outs: p.misc.run_outs,
            man_of_match: p.misc.man_of_match,
        })
        .collect())
}

pub async fn completed_matches<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
) -> Result<Vec<CompletedMatchRecord>, DomainError> {
    matches::list_by_season(conn, season_id).await
}
