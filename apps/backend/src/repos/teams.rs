//! Season team repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::teams_sea as teams_adapter;
use crate::entities::teams;
use crate::errors::domain::DomainError;

/// Team domain model with its ordered roster of player ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonTeam {
    pub id: i64,
    pub season_id: i64,
    pub name: String,
    pub player_ids: Vec<i64>,
}

impl SeasonTeam {
    fn from_model(m: teams::Model, player_ids: Vec<i64>) -> Self {
        Self {
            id: m.id,
            season_id: m.season_id,
            name: m.name,
            player_ids,
        }
    }
}

/// Upsert the team by name and overwrite its roster.
pub async fn upsert_with_roster<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
    name: &str,
    player_ids: Vec<i64>,
) -> Result<SeasonTeam, DomainError> {
    let team = teams_adapter::upsert_by_name(conn, season_id, name).await?;
    teams_adapter::replace_roster(conn, team.id, &player_ids).await?;
    Ok(SeasonTeam::from_model(team, player_ids))
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
    name: &str,
) -> Result<Option<SeasonTeam>, DomainError> {
    let Some(team) = teams_adapter::find_by_name(conn, season_id, name).await? else {
        return Ok(None);
    };
    let player_ids = teams_adapter::roster_player_ids(conn, team.id).await?;
    Ok(Some(SeasonTeam::from_model(team, player_ids)))
}
