//! SeaORM adapter for season players - generic over ConnectionTrait.

use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::entities::players;

pub mod dto;

pub use dto::{CounterDelta, Leaderboard};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// Insert a zeroed player row unless (season_id, name) already exists.
pub async fn insert_if_absent<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
    name: &str,
) -> Result<(), sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let row = players::ActiveModel {
        id: NotSet,
        season_id: Set(season_id),
        name: Set(name.to_string()),
        batting_innings: Set(0),
        batting_runs: Set(0),
        batting_balls: Set(0),
        batting_fours: Set(0),
        batting_sixes: Set(0),
        batting_outs: Set(0),
        batting_ducks: Set(0),
        bowling_innings: Set(0),
        bowling_balls: Set(0),
        bowling_runs: Set(0),
        bowling_wickets: Set(0),
        bowling_maidens: Set(0),
        catches: Set(0),
        run_outs: Set(0),
        man_of_match: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
    };

    players::Entity::insert(row)
        .on_conflict(
            OnConflict::columns([players::Column::SeasonId, players::Column::Name])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

pub async fn find_by_names<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
    names: &[String],
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    if names.is_empty() {
        return Ok(Vec::new());
    }
    players::Entity::find()
        .filter(players::Column::SeasonId.eq(season_id))
        .filter(players::Column::Name.is_in(names.iter().cloned()))
        .all(conn)
        .await
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
    name: &str,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find()
        .filter(players::Column::SeasonId.eq(season_id))
        .filter(players::Column::Name.eq(name))
        .one(conn)
        .await
}

/// `col = col + n` for every non-zero counter in `delta`. Returns rows affected.
pub async fn add_counters<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    delta: &CounterDelta,
) -> Result<u64, sea_orm::DbErr> {
    use players::Column as Col;

    let pairs = [
        (Col::BattingInnings, delta.batting_innings),
        (Col::BattingRuns, delta.batting_runs),
        (Col::BattingBalls, delta.batting_balls),
        (Col::BattingFours, delta.batting_fours),
        (Col::BattingSixes, delta.batting_sixes),
        (Col::BattingOuts, delta.batting_outs),
        (Col::BattingDucks, delta.batting_ducks),
        (Col::BowlingInnings, delta.bowling_innings),
        (Col::BowlingBalls, delta.bowling_balls),
        (Col::BowlingRuns, delta.bowling_runs),
        (Col::BowlingWickets, delta.bowling_wickets),
        (Col::BowlingMaidens, delta.bowling_maidens),
        (Col::Catches, delta.catches),
        (Col::RunOuts, delta.run_outs),
        (Col::ManOfMatch, delta.man_of_match),
    ];

    let mut update = players::Entity::update_many()
        .filter(players::Column::Id.eq(player_id))
        .col_expr(Col::UpdatedAt, Expr::value(OffsetDateTime::now_utc()));
    for (col, n) in pairs {
        if n != 0 {
            update = update.col_expr(col, Expr::col(col).add(n));
        }
    }

    let res = update.exec(conn).await?;
    Ok(res.rows_affected)
}

pub async fn leaderboard<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    season_id: i64,
    board: Leaderboard,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    let query = players::Entity::find().filter(players::Column::SeasonId.eq(season_id));
    let query = match board {
        Leaderboard::Batting => query
            .filter(players::Column::BattingInnings.gt(0))
            .order_by(players::Column::BattingRuns, Order::Desc),
        Leaderboard::Bowling => query
            .filter(players::Column::BowlingInnings.gt(0))
            .order_by(players::Column::BowlingWickets, Order::Desc)
            .order_by(players::Column::BowlingRuns, Order::Asc),
        Leaderboard::Misc => query
            .order_by(players::Column::ManOfMatch, Order::Desc)
            .order_by(players::Column::Catches, Order::Desc),
    };
    query
        .order_by(players::Column::Name, Order::Asc)
        .all(conn)
        .await
}
