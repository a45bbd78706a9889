//! Folds one finalized match into season player/team aggregates.
//!
//! Every step runs against the same connection; callers wrap the whole run in
//! one transaction (`submit_completed_match`) so a failure at any step leaves
//! no trace in the database.

use std::collections::HashMap;

use futures::FutureExt;
use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::{debug, info, warn};

use crate::db::txn::with_txn;
use crate::domain::names::{clean_display_name, normalize_name};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::protocol::finalized_match::{BattingEntry, BowlingEntry, FieldingEntry, FinalizedMatch};
use crate::repos::matches::{self, CompletedMatchRecord};
use crate::repos::players::{self, CounterDelta};
use crate::repos::teams;

type PlayerMap = HashMap<String, i64>;

fn count(n: u32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

fn flag(b: bool) -> i32 {
    i32::from(b)
}

pub fn batting_delta(entry: &BattingEntry) -> CounterDelta {
    let out = entry.dismissal.is_some();
    CounterDelta {
        batting_innings: flag(entry.balls > 0),
        batting_runs: count(entry.runs),
        batting_balls: count(entry.balls),
        batting_fours: count(entry.fours),
        batting_sixes: count(entry.sixes),
        batting_outs: flag(out),
        batting_ducks: flag(out && entry.runs == 0),
        ..CounterDelta::default()
    }
}

pub fn bowling_delta(entry: &BowlingEntry) -> CounterDelta {
    CounterDelta {
        bowling_innings: flag(entry.balls > 0),
        bowling_balls: count(entry.balls),
        bowling_runs: count(entry.runs),
        bowling_wickets: count(entry.wickets),
        bowling_maidens: count(entry.maidens),
        ..CounterDelta::default()
    }
}

pub fn fielding_delta(entry: &FieldingEntry) -> CounterDelta {
    CounterDelta {
        catches: count(entry.catches),
        run_outs: count(entry.run_outs),
        ..CounterDelta::default()
    }
}

/// Normalized participant names, first occurrence order, blanks dropped.
fn registry(payload: &FinalizedMatch) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(payload.players.len());
    for raw in &payload.players {
        let name = normalize_name(raw);
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

fn resolve(map: &PlayerMap, raw: &str) -> Result<i64, DomainError> {
    map.get(&normalize_name(raw))
        .copied()
        .ok_or_else(|| DomainError::missing_player(raw))
}

fn validate(payload: &FinalizedMatch) -> Result<(), DomainError> {
    if payload.season_id <= 0 {
        return Err(DomainError::validation("season_id must be positive"));
    }
    if payload.teams.len() != 2 {
        return Err(DomainError::validation(format!(
            "a finalized match has exactly two teams, got {}",
            payload.teams.len()
        )));
    }
    if payload.teams.iter().any(|t| clean_display_name(&t.name).is_empty()) {
        return Err(DomainError::validation("team name must not be empty"));
    }
    Ok(())
}

/// Run every aggregation step against `conn`, in order.
pub async fn aggregate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    payload: &FinalizedMatch,
) -> Result<CompletedMatchRecord, DomainError> {
    validate(payload)?;
    let season_id = payload.season_id;

    // 1. players
    let names = registry(payload);
    let map = players::upsert_all(conn, season_id, &names).await?;
    debug!(season_id, players = map.len(), "players upserted");

    // 2. teams
    for team in &payload.teams {
        let roster = team
            .players
            .iter()
            .map(|name| resolve(&map, name))
            .collect::<Result<Vec<_>, _>>()?;
        let name = clean_display_name(&team.name);
        teams::upsert_with_roster(conn, season_id, &name, roster).await?;
    }
    debug!(season_id, teams = payload.teams.len(), "teams upserted");

    // 3. batting
    for innings in &payload.innings {
        for entry in &innings.batting {
            let id = resolve(&map, &entry.name)?;
            players::add_counters(conn, id, &batting_delta(entry)).await?;
        }
    }

    // 4. bowling
    for innings in &payload.innings {
        for entry in &innings.bowling {
            let id = resolve(&map, &entry.name)?;
            players::add_counters(conn, id, &bowling_delta(entry)).await?;
        }
    }

    // 5. fielding + man of the match
    for entry in &payload.fielding {
        let id = resolve(&map, &entry.name)?;
        players::add_counters(conn, id, &fielding_delta(entry)).await?;
    }
    if let Some(mom) = &payload.result.man_of_the_match {
        let id = resolve(&map, mom)?;
        let delta = CounterDelta {
            man_of_match: 1,
            ..CounterDelta::default()
        };
        players::add_counters(conn, id, &delta).await?;
    }

    // 6. archive
    matches::insert_completed(conn, payload).await
}

/// Aggregate `payload` in one transaction; nothing persists on error.
pub async fn submit_completed_match(
    db: &DatabaseConnection,
    payload: FinalizedMatch,
) -> Result<CompletedMatchRecord, AppError> {
    let match_id = payload.match_id.clone();
    let season_id = payload.season_id;
    info!(match_id = %match_id, season_id, "stats pipeline started");

    let outcome = with_txn(db, move |txn| {
        async move { aggregate(txn, &payload).await.map_err(AppError::from) }.boxed()
    })
    .await;

    match &outcome {
        Ok(record) => {
            info!(match_id = %match_id, season_id, record_id = record.id, "stats pipeline committed");
        }
        Err(err) => {
            warn!(match_id = %match_id, season_id, error = %err, "stats pipeline aborted");
        }
    }
    outcome
}
