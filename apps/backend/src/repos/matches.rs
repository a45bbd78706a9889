//! Completed-match archive repository functions.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::adapters::matches_sea as matches_adapter;
use crate::entities::completed_matches;
use crate::errors::domain::DomainError;
use crate::protocol::finalized_match::FinalizedMatch;

/// Stored match record as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedMatchRecord {
    pub id: i64,
    pub season_id: i64,
    pub match_type: String,
    pub total_overs: Option<i32>,
    pub team_a: String,
    pub team_b: String,
    pub winner: Option<String>,
    pub result_kind: String,
    pub margin: i32,
    pub man_of_the_match: Option<String>,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub completed_at: OffsetDateTime,
    pub document: FinalizedMatch,
}

impl TryFrom<completed_matches::Model> for CompletedMatchRecord {
    type Error = DomainError;

    fn try_from(m: completed_matches::Model) -> Result<Self, Self::Error> {
        let document = serde_json::from_str(&m.document)?;
        Ok(Self {
            id: m.id,
            season_id: m.season_id,
            match_type: m.match_type,
            total_overs: m.total_overs,
            team_a: m.team_a,
            team_b: m.team_b,
            winner: m.winner,
            result_kind: m.result_kind,
            margin: m.margin,
            man_of_the_match: m.man_of_the_match,
            status: m.status,
            completed_at: m.completed_at,
            document,
        })
    }
}

/// Archive `payload` as COMPLETED, stamped now.
pub async fn insert_completed<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    payload: &FinalizedMatch,
) -> Result<CompletedMatchRecord, DomainError> {
    let team_name = |i: usize| {
        payload
            .teams
            .get(i)
            .map(|t| t.name.clone())
            .unwrap_or_default()
    };
    let dto = matches_adapter::CompletedMatchCreate {
        season_id: payload.season_id,
        match_type: payload.match_type.as_str().to_string(),
        total_overs: payload
            .total_overs
            .map(|o| i32::try_from(o).unwrap_or(i32::MAX)),
        team_a: team_name(0),
        team_b: team_name(1),
        winner: payload.result.winner.clone(),
        result_kind: payload.result.kind.as_str().to_string(),
        margin: i32::try_from(payload.result.margin).unwrap_or(i32::MAX),
        man_of_the_match: payload.result.man_of_the_match.clone(),
        document: serde_json::to_string(payload)?,
    };
    let row = matches_adapter::insert_completed(conn, dto).await?;
    CompletedMatchRecord::try_from(row)
}

pub async fn list_by_season<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
) -> Result<Vec<CompletedMatchRecord>, DomainError> {
    matches_adapter::list_by_season(conn, season_id)
        .await?
        .into_iter()
        .map(CompletedMatchRecord::try_from)
        .collect()
}
