//! SeaORM adapter for the completed-match archive.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter,
    QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::entities::completed_matches;

pub mod dto;

pub use dto::CompletedMatchCreate;

pub const STATUS_COMPLETED: &str = "COMPLETED";

pub async fn insert_completed<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CompletedMatchCreate,
) -> Result<completed_matches::Model, sea_orm::DbErr> {
    let row = completed_matches::ActiveModel {
        id: NotSet,
        season_id: Set(dto.season_id),
        match_type: Set(dto.match_type),
        total_overs: Set(dto.total_overs),
        team_a: Set(dto.team_a),
        team_b: Set(dto.team_b),
        winner: Set(dto.winner),
        result_kind: Set(dto.result_kind),
        margin: Set(dto.margin),
        man_of_the_match: Set(dto.man_of_the_match),
        status: Set(STATUS_COMPLETED.to_string()),
        document: Set(dto.document),
        completed_at: Set(OffsetDateTime::now_utc()),
    };
    row.insert(conn).await
}

/// Newest first.
pub async fn list_by_season<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
) -> Result<Vec<completed_matches::Model>, sea_orm::DbErr> {
    completed_matches::Entity::find()
        .filter(completed_matches::Column::SeasonId.eq(season_id))
        .order_by(completed_matches::Column::CompletedAt, Order::Desc)
        .order_by(completed_matches::Column::Id, Order::Desc)
        .all(conn)
        .await
}
