//! SeaORM adapter for season teams and their ordered rosters.

use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::entities::{team_players, teams};

/// Insert the team unless (season_id, name) exists; returns the stored row.
pub async fn upsert_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
    name: &str,
) -> Result<teams::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let row = teams::ActiveModel {
        id: NotSet,
        season_id: Set(season_id),
        name: Set(name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    teams::Entity::insert(row)
        .on_conflict(
            OnConflict::columns([teams::Column::SeasonId, teams::Column::Name])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    teams::Entity::find()
        .filter(teams::Column::SeasonId.eq(season_id))
        .filter(teams::Column::Name.eq(name))
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("teams.{name}")))
}

/// Overwrite the team's roster with `player_ids` in order.
pub async fn replace_roster<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    player_ids: &[i64],
) -> Result<(), sea_orm::DbErr> {
    team_players::Entity::delete_many()
        .filter(team_players::Column::TeamId.eq(team_id))
        .exec(conn)
        .await?;

    if !player_ids.is_empty() {
        let rows = player_ids
            .iter()
            .enumerate()
            .map(|(position, player_id)| team_players::ActiveModel {
                id: NotSet,
                team_id: Set(team_id),
                player_id: Set(*player_id),
                position: Set(i32::try_from(position).unwrap_or(i32::MAX)),
            });
        team_players::Entity::insert_many(rows)
            .exec_without_returning(conn)
            .await?;
    }

    teams::Entity::update_many()
        .filter(teams::Column::Id.eq(team_id))
        .col_expr(
            teams::Column::UpdatedAt,
            Expr::value(OffsetDateTime::now_utc()),
        )
        .exec(conn)
        .await?;
    Ok(())
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
    name: &str,
) -> Result<Option<teams::Model>, sea_orm::DbErr> {
    teams::Entity::find()
        .filter(teams::Column::SeasonId.eq(season_id))
        .filter(teams::Column::Name.eq(name))
        .one(conn)
        .await
}

/// Roster player ids in position order.
pub async fn roster_player_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    let rows = team_players::Entity::find()
        .filter(team_players::Column::TeamId.eq(team_id))
        .order_by(team_players::Column::Position, Order::Asc)
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(|r| r.player_id).collect())
}
